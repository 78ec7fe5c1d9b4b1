// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Part of speech used to pick the WordNet index and detachment rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Suffix WordNet uses for this part of speech in `index.*` and `*.exc`.
    pub fn wordnet_name(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wordnet_name())
    }
}

/// One input word after punctuation has been split off.
///
/// `core` is lowercase and has the edge punctuation removed. A token whose core
/// is empty carries punctuation only and is emitted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    pub leading: String,
    pub core: String,
    pub trailing: String,
}

/// How a single token was turned into output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// The core itself is a lexicon key.
    Direct,
    /// A lemma of the core is a lexicon key.
    Lemma { pos: PartOfSpeech, lemma: String },
    /// Nothing matched; rendered as `[core]`.
    Untranslated,
    /// The token had no word characters.
    Punctuation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedToken {
    pub source: String,
    pub output: String,
    pub resolution: Resolution,
}

/// Result of translating one sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    pub tokens: Vec<ResolvedToken>,
}

impl Translation {
    pub fn untranslated(&self) -> impl Iterator<Item = &ResolvedToken> {
        self.tokens
            .iter()
            .filter(|t| t.resolution == Resolution::Untranslated)
    }
}
