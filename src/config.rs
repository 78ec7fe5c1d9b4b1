// File: src/config.rs
use crate::error::ConfigError;
use crate::persistence::DICTIONARY_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "translator.json";
const APP_DIR: &str = "hindi-translator";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Override dictionary, read at startup and written on save.
    pub dictionary_path: PathBuf,
    /// Root of the linguistic resources (`tokenizers/`, `wordnet/`).
    pub data_dir: PathBuf,
    /// Explicit WordNet `dict/` directory; defaults to `<data_dir>/wordnet`.
    pub wordnet_dir: Option<PathBuf>,
    /// Write the bundled abbreviation list when it is missing.
    pub install_bundled_resources: bool,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DICTIONARY_FILE),
            data_dir: default_data_dir(),
            wordnet_dir: None,
            install_bundled_resources: true,
            log_level: "info".to_string(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(APP_DIR))
}

impl TranslatorConfig {
    /// Reads the config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Config file if present, defaults otherwise. A broken file is reported
    /// and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("{:?} not found, using default configuration", path);
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!("Loaded configuration from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("{}. Using default configuration", e);
                Self::default()
            }
        }
    }

    /// Resolves the configuration from command-line arguments (without the
    /// program name): `--config <file>` picks the file, `--dict <file>` and
    /// `--data <dir>` override its values.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config_path = PathBuf::from(CONFIG_FILE);
        let mut dictionary = None;
        let mut data_dir = None;
        let mut wordnet_dir = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value = || args.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()));
            match arg.as_str() {
                "--config" => config_path = PathBuf::from(value()?),
                "--dict" => dictionary = Some(PathBuf::from(value()?)),
                "--data" => data_dir = Some(PathBuf::from(value()?)),
                "--wordnet" => wordnet_dir = Some(PathBuf::from(value()?)),
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        let mut config = Self::load_or_default(&config_path);
        if let Some(path) = dictionary {
            config.dictionary_path = path;
        }
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }
        if wordnet_dir.is_some() {
            config.wordnet_dir = wordnet_dir;
        }
        Ok(config)
    }

    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"log_level": "debug"}"#).unwrap();

        let config = TranslatorConfig::from_file(&path).unwrap();
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
        assert_eq!(config.dictionary_path, PathBuf::from(DICTIONARY_FILE));
        assert!(config.install_bundled_resources);
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            TranslatorConfig::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
        assert_eq!(TranslatorConfig::load_or_default(&path), TranslatorConfig::default());
    }

    #[test]
    fn arguments_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{"dictionary_path": "from_file.json"}"#).unwrap();

        let config = TranslatorConfig::from_args(args(&[
            "--config",
            path.to_str().unwrap(),
            "--data",
            "/tmp/data",
        ]))
        .unwrap();
        assert_eq!(config.dictionary_path, PathBuf::from("from_file.json"));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/data"));
    }

    #[test]
    fn argument_errors() {
        assert!(matches!(
            TranslatorConfig::from_args(args(&["--dict"])),
            Err(ConfigError::MissingValue(flag)) if flag == "--dict"
        ));
        assert!(matches!(
            TranslatorConfig::from_args(args(&["--verbose"])),
            Err(ConfigError::UnknownArgument(_))
        ));
    }

    #[test]
    fn unknown_log_level_defaults_to_info() {
        let config = TranslatorConfig {
            log_level: "loud".to_string(),
            ..TranslatorConfig::default()
        };
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }
}
