// File: src/core/tokenizer.rs
use crate::core::types::Token;
use crate::error::ResourceError;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Characters stripped from both ends of a word to get its core.
pub const STRIP_CHARS: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '{', '}',
];

/// Abbreviation list shipped with the crate; installed into the data
/// directory by the provisioner when missing.
pub const BUNDLED_ABBREVIATIONS: &str = include_str!("../../resources/english_abbrev.txt");

/// Strippable pieces that belong to the word after them.
const OPENERS: &[&str] = &["(", "[", "{"];

/// Splits a sentence into word tokens.
///
/// With an abbreviation list the text is first cut into sentences and each
/// sentence goes through Treebank-style rules that separate punctuation from
/// words. Without one, the text is split on whitespace only.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    abbreviations: Option<HashSet<String>>,
}

impl WordTokenizer {
    pub fn treebank(abbreviations: HashSet<String>) -> Self {
        Self {
            abbreviations: Some(abbreviations),
        }
    }

    /// Degraded tokenizer used when the abbreviation resource is unavailable.
    pub fn whitespace() -> Self {
        Self { abbreviations: None }
    }

    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        if !path.is_file() {
            return Err(ResourceError::Missing {
                name: "tokenizer abbreviations",
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::treebank(parse_abbreviations(&text)))
    }

    pub fn is_language_aware(&self) -> bool {
        self.abbreviations.is_some()
    }

    /// Raw pieces, punctuation separated where the rules allow it.
    pub fn split_words(&self, text: &str) -> Vec<String> {
        let Some(abbreviations) = &self.abbreviations else {
            return text.split_whitespace().map(str::to_string).collect();
        };

        split_sentences(text, abbreviations)
            .iter()
            .flat_map(|sentence| treebank_words(sentence))
            .collect()
    }

    /// Pieces turned into tokens. Pieces made only of `STRIP_CHARS` are folded
    /// into their neighbours; any other symbol stays a token of its own.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        assemble(self.split_words(text))
    }
}

pub fn parse_abbreviations(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.trim_end_matches('.').to_lowercase())
        .collect()
}

/// Three-way split of one piece into leading punctuation, core and trailing
/// punctuation.
pub fn split_punctuation(piece: &str) -> Token {
    let start = piece.len() - piece.trim_start_matches(STRIP_CHARS).len();
    let rest = &piece[start..];
    let core = rest.trim_end_matches(STRIP_CHARS);
    Token {
        leading: piece[..start].to_string(),
        core: core.to_string(),
        trailing: rest[core.len()..].to_string(),
    }
}

fn is_strippable(piece: &str) -> bool {
    piece.trim_matches(STRIP_CHARS).is_empty()
}

fn assemble(pieces: Vec<String>) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::with_capacity(pieces.len());
    let mut pending = String::new();
    let mut quote_open = false;

    for piece in pieces {
        if is_strippable(&piece) {
            let opens = if piece == "\"" {
                quote_open = !quote_open;
                quote_open
            } else {
                OPENERS.contains(&piece.as_str())
            };
            match tokens.last_mut() {
                Some(last) if !opens && pending.is_empty() => last.trailing.push_str(&piece),
                _ => pending.push_str(&piece),
            }
            continue;
        }

        let mut token = split_punctuation(&piece);
        if !pending.is_empty() {
            token.leading.insert_str(0, &pending);
            pending.clear();
        }
        tokens.push(token);
    }

    if !pending.is_empty() {
        match tokens.last_mut() {
            Some(last) => last.trailing.push_str(&pending),
            None => tokens.push(Token {
                leading: pending,
                ..Token::default()
            }),
        }
    }
    tokens
}

fn split_sentences(text: &str, abbreviations: &HashSet<String>) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        current.push(word);
        if ends_sentence(word, abbreviations) {
            sentences.push(current.join(" "));
            current.clear();
        }
    }
    if !current.is_empty() {
        sentences.push(current.join(" "));
    }
    sentences
}

fn ends_sentence(word: &str, abbreviations: &HashSet<String>) -> bool {
    let trimmed = word.trim_end_matches(|c: char| matches!(c, '"' | '\'' | ')' | ']' | '}'));
    match trimmed.chars().last() {
        Some('?') | Some('!') => true,
        Some('.') => {
            let stem = trimmed
                .trim_end_matches('.')
                .trim_start_matches(|c: char| !c.is_alphanumeric());
            let initial = stem.chars().count() == 1 && stem.chars().all(char::is_alphabetic);
            !initial && !abbreviations.contains(stem)
        }
        _ => false,
    }
}

fn treebank_rules() -> &'static [(Regex, &'static str)] {
    static RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            (r#"""#, r#" " "#),
            (r"([:,])([^\d])", " ${1} ${2}"),
            (r"([:,])$", " ${1} "),
            (r"\.\.\.", " ... "),
            (r"[;@#$%&]", " ${0} "),
            (r#"([^\.])(\.)([\]\)}>"']*)\s*$"#, "${1} ${2}${3} "),
            (r"[?!]", " ${0} "),
            (r"([^'])' ", "${1} ' "),
            (r"[\]\[\(\)\{\}<>]", " ${0} "),
            (r"--", " -- "),
            (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
            (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
        ]
        .into_iter()
        .filter_map(|(pattern, replacement)| match Regex::new(pattern) {
            Ok(regex) => Some((regex, replacement)),
            Err(e) => {
                tracing::error!("invalid tokenizer rule {:?}: {}", pattern, e);
                None
            }
        })
        .collect()
    })
}

fn treebank_words(sentence: &str) -> Vec<String> {
    let mut text = format!(" {} ", sentence);
    for (regex, replacement) in treebank_rules() {
        text = regex.replace_all(&text, *replacement).into_owned();
    }
    text.split_whitespace().map(str::to_string).collect()
}
