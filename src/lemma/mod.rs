// File: src/lemma/mod.rs
pub mod morphy;

use crate::core::types::PartOfSpeech;

pub use morphy::WordNet;

/// Reduces an inflected word to its dictionary form.
///
/// Implementations return the word unchanged when no lemma is known.
pub trait Lemmatize: Send + Sync {
    fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String;

    /// Lemma without a part-of-speech hint. WordNet treats this as a noun.
    fn lemmatize_default(&self, word: &str) -> String {
        self.lemmatize(word, PartOfSpeech::Noun)
    }
}
