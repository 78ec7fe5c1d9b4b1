// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod lemma;
pub mod persistence;
pub mod provision;

pub use crate::config::TranslatorConfig;
pub use crate::core::engine::Translator;
pub use crate::core::lexicon::{Lexicon, LoadStatus, SaveReport};
pub use crate::core::resolver::Resolver;
pub use crate::provision::{ProvisionReport, Provisioner, Resources};
