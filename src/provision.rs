// File: src/provision.rs
use crate::core::tokenizer::{WordTokenizer, BUNDLED_ABBREVIATIONS};
use crate::lemma::{Lemmatize, WordNet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

pub const ABBREVIATIONS_FILE: &str = "tokenizers/english_abbrev.txt";
pub const WORDNET_DIR: &str = "wordnet";

/// Linguistic resources handed to the resolver.
#[derive(Clone)]
pub struct Resources {
    pub tokenizer: WordTokenizer,
    /// `None` when no lemma data could be loaded.
    pub lemmatizer: Option<Arc<dyn Lemmatize>>,
}

impl Resources {
    pub fn new(tokenizer: WordTokenizer, lemmatizer: Option<Arc<dyn Lemmatize>>) -> Self {
        Self {
            tokenizer,
            lemmatizer,
        }
    }

    /// Whitespace tokenization and no lemmatization.
    pub fn degraded() -> Self {
        Self::new(WordTokenizer::whitespace(), None)
    }
}

impl std::fmt::Debug for Resources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resources")
            .field("tokenizer", &self.tokenizer)
            .field("lemmatizer", &self.lemmatizer.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProvisionReport {
    pub tokenizer_ready: bool,
    pub lemmatizer_ready: bool,
    /// User-visible problems; translation still works in degraded form.
    pub warnings: Vec<String>,
}

impl ProvisionReport {
    pub fn is_ready(&self) -> bool {
        self.tokenizer_ready && self.lemmatizer_ready
    }
}

/// Locates and loads the tokenizer and lemmatizer data once.
///
/// The outcome is cached: later calls to `provision` return the same
/// resources and report without touching the filesystem again.
pub struct Provisioner {
    data_dir: PathBuf,
    wordnet_dir: Option<PathBuf>,
    install_bundled: bool,
    state: OnceLock<(Resources, ProvisionReport)>,
}

impl Provisioner {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            wordnet_dir: None,
            install_bundled: true,
            state: OnceLock::new(),
        }
    }

    /// Uses `dir` instead of `<data_dir>/wordnet` and `$WNHOME/dict`.
    pub fn with_wordnet_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.wordnet_dir = Some(dir.into());
        self
    }

    /// Whether a missing abbreviation list is written from the copy bundled
    /// with the crate.
    pub fn install_bundled(mut self, install: bool) -> Self {
        self.install_bundled = install;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn provision(&self) -> (Resources, ProvisionReport) {
        self.state.get_or_init(|| self.load()).clone()
    }

    pub fn report(&self) -> Option<&ProvisionReport> {
        self.state.get().map(|(_, report)| report)
    }

    fn load(&self) -> (Resources, ProvisionReport) {
        tracing::info!("Checking linguistic resources in {:?}...", self.data_dir);
        let mut report = ProvisionReport::default();

        let abbrev_path = self.data_dir.join(ABBREVIATIONS_FILE);
        if !abbrev_path.is_file() && self.install_bundled {
            self.install_abbreviations(&abbrev_path, &mut report);
        }
        let tokenizer = match WordTokenizer::load(&abbrev_path) {
            Ok(tokenizer) => {
                tracing::info!("Tokenizer resource available.");
                report.tokenizer_ready = true;
                tokenizer
            }
            Err(e) => {
                tracing::warn!("{}. Falling back to whitespace tokenization.", e);
                report
                    .warnings
                    .push(format!("{}. Falling back to whitespace tokenization.", e));
                WordTokenizer::whitespace()
            }
        };

        let wordnet_dir = self.wordnet_location();
        let lemmatizer: Option<Arc<dyn Lemmatize>> = match WordNet::load(&wordnet_dir) {
            Ok(wordnet) => {
                report.lemmatizer_ready = true;
                Some(Arc::new(wordnet))
            }
            Err(e) => {
                tracing::warn!("{}. Lemmatization disabled.", e);
                report.warnings.push(format!(
                    "{}. Lemmatization disabled; install the WordNet dict files there.",
                    e
                ));
                None
            }
        };

        if report.is_ready() {
            tracing::info!("Linguistic resources ready.");
        } else {
            tracing::warn!("Some linguistic resources are missing. Translation quality may be affected.");
        }
        (Resources::new(tokenizer, lemmatizer), report)
    }

    fn install_abbreviations(&self, path: &Path, report: &mut ProvisionReport) {
        tracing::info!("Tokenizer resource not found. Installing bundled copy to {:?}", path);
        let result = match path.parent() {
            Some(parent) => fs::create_dir_all(parent),
            None => Ok(()),
        }
        .and_then(|()| fs::write(path, BUNDLED_ABBREVIATIONS));
        if let Err(e) = result {
            tracing::warn!("Error installing tokenizer resource: {}", e);
            report
                .warnings
                .push(format!("Error installing tokenizer resource to {}: {}", path.display(), e));
        }
    }

    fn wordnet_location(&self) -> PathBuf {
        if let Some(dir) = &self.wordnet_dir {
            return dir.clone();
        }
        let local = self.data_dir.join(WORDNET_DIR);
        if local.is_dir() {
            return local;
        }
        match std::env::var_os("WNHOME") {
            Some(home) => PathBuf::from(home).join("dict"),
            None => local,
        }
    }
}
