// File: src/error.rs
use std::path::PathBuf;

/// Failures while reading or writing the dictionary file.
///
/// A malformed override file is not surfaced through this type by
/// `Lexicon::load_overrides`; that path records a status message instead and
/// keeps the previous mapping.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error decoding JSON from '{path}': {source}. File might be corrupted.")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize dictionary: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A linguistic resource (tokenizer abbreviations, WordNet) could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("resource '{name}' not found at {path}")]
    Missing { name: &'static str, path: PathBuf },

    #[error("failed to read resource {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unknown argument {0}")]
    UnknownArgument(String),
}
