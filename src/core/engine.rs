use crate::config::TranslatorConfig;
use crate::core::lexicon::{Lexicon, LoadStatus, SaveReport};
use crate::core::resolver::Resolver;
use crate::core::types::Translation;
use crate::error::LexiconError;
use crate::provision::{ProvisionReport, Provisioner, Resources};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Host-facing translator: a lexicon shared behind a lock plus the resolver.
///
/// Lookups take the read lock and run concurrently; `add_word`,
/// `reload_overrides` and `save_dictionary` take the write lock.
pub struct Translator {
    lexicon: RwLock<Lexicon>,
    resolver: Resolver,
    dictionary_path: Option<PathBuf>,
    provision_report: ProvisionReport,
}

impl Translator {
    /// Base lexicon only, no dictionary file.
    pub fn new(resources: Resources) -> Self {
        Self {
            lexicon: RwLock::new(Lexicon::new()),
            resolver: Resolver::new(resources),
            dictionary_path: None,
            provision_report: ProvisionReport::default(),
        }
    }

    /// Base lexicon merged with the overrides at `path`; saves go back there.
    pub fn with_dictionary(resources: Resources, path: impl Into<PathBuf>) -> Self {
        let mut translator = Self::new(resources);
        let path = path.into();
        translator
            .lexicon
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .load_overrides(&path);
        translator.dictionary_path = Some(path);
        translator
    }

    /// Provisions resources from the configured data directory and loads the
    /// configured dictionary.
    pub fn from_config(config: &TranslatorConfig) -> Self {
        let provisioner = Provisioner::new(&config.data_dir)
            .install_bundled(config.install_bundled_resources);
        let provisioner = match &config.wordnet_dir {
            Some(dir) => provisioner.with_wordnet_dir(dir),
            None => provisioner,
        };
        let (resources, report) = provisioner.provision();

        let mut translator = Self::with_dictionary(resources, &config.dictionary_path);
        translator.provision_report = report;
        tracing::info!(
            "Translator initialized. Base dict size: {}, Current: {}",
            translator.base_size(),
            translator.dictionary_size()
        );
        translator
    }

    pub fn translate(&self, text: &str) -> String {
        self.resolver.translate(&self.read(), text)
    }

    /// Like `translate`, also reporting how each token was resolved.
    pub fn explain(&self, text: &str) -> Translation {
        self.resolver.resolve(&self.read(), text)
    }

    /// Session-scoped addition; persisted only by `save_dictionary`.
    pub fn add_word(&self, english: &str, hindi: &str) {
        self.write().add(english, hindi);
        tracing::info!("Added '{}': '{}' to the session dictionary", english.to_lowercase(), hindi);
    }

    pub fn lookup(&self, english: &str) -> Option<String> {
        self.read().lookup(english).map(str::to_string)
    }

    /// Writes the whole lexicon to the dictionary file.
    pub fn save_dictionary(&self) -> Result<SaveReport, LexiconError> {
        let path = self.dictionary_path();
        self.write().save(&path)
    }

    pub fn save_dictionary_to(&self, path: &Path) -> Result<SaveReport, LexiconError> {
        self.write().save(path)
    }

    /// Merges the dictionary file again, e.g. after it was edited by hand.
    pub fn reload_overrides(&self) -> LoadStatus {
        let path = self.dictionary_path();
        self.write().load_overrides(&path)
    }

    pub fn dictionary_path(&self) -> PathBuf {
        self.dictionary_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(crate::persistence::DICTIONARY_FILE))
    }

    pub fn dictionary_size(&self) -> usize {
        self.read().len()
    }

    pub fn base_size(&self) -> usize {
        self.read().base_size()
    }

    pub fn status_message(&self) -> String {
        self.read().status_message().to_string()
    }

    pub fn provision_report(&self) -> &ProvisionReport {
        &self.provision_report
    }

    pub fn resources_ready(&self) -> bool {
        self.resolver.tokenizer().is_language_aware() && self.resolver.has_lemmatizer()
    }

    fn read(&self) -> RwLockReadGuard<'_, Lexicon> {
        self.lexicon.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Lexicon> {
        self.lexicon.write().unwrap_or_else(PoisonError::into_inner)
    }
}
