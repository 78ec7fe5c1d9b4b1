pub mod candidates;
pub mod engine;
pub mod lexicon;
pub mod resolver;
pub mod seed;
pub mod tokenizer;
pub mod types;
