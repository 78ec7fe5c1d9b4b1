// File: src/lemma/morphy.rs
use crate::core::types::PartOfSpeech;
use crate::error::ResourceError;
use crate::lemma::Lemmatize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn detachment_rules(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective => ADJECTIVE_RULES,
        PartOfSpeech::Adverb => &[],
    }
}

/// Lemma tables read from a WordNet `dict/` directory.
///
/// Only the lemma column of `index.<pos>` and the `<pos>.exc` exception lists
/// are kept; synsets are never needed for lemmatization.
#[derive(Debug, Clone, Default)]
pub struct WordNet {
    lemmas: HashMap<PartOfSpeech, HashSet<String>>,
    exceptions: HashMap<PartOfSpeech, HashMap<String, Vec<String>>>,
}

impl WordNet {
    /// Loads `index.{noun,verb,adj,adv}` and the matching `.exc` files.
    /// Index files are required, exception files are optional.
    pub fn load(dir: &Path) -> Result<Self, ResourceError> {
        if !dir.is_dir() {
            return Err(ResourceError::Missing {
                name: "wordnet",
                path: dir.to_path_buf(),
            });
        }

        let mut wordnet = WordNet::default();
        for pos in PartOfSpeech::ALL {
            let index_path = dir.join(format!("index.{}", pos.wordnet_name()));
            if !index_path.is_file() {
                return Err(ResourceError::Missing {
                    name: "wordnet index",
                    path: index_path,
                });
            }
            let index = read_resource(&index_path)?;
            wordnet.lemmas.insert(pos, parse_index(&index));

            let exc_path = dir.join(format!("{}.exc", pos.wordnet_name()));
            if exc_path.is_file() {
                let exc = read_resource(&exc_path)?;
                wordnet.exceptions.insert(pos, parse_exceptions(&exc));
            }
        }

        tracing::info!(
            "Loaded WordNet from {:?}: {} noun, {} verb, {} adj, {} adv lemmas",
            dir,
            wordnet.lemma_count(PartOfSpeech::Noun),
            wordnet.lemma_count(PartOfSpeech::Verb),
            wordnet.lemma_count(PartOfSpeech::Adjective),
            wordnet.lemma_count(PartOfSpeech::Adverb),
        );
        Ok(wordnet)
    }

    /// Builds the tables from in-memory file contents.
    pub fn from_sources(indexes: &[(PartOfSpeech, &str)], exceptions: &[(PartOfSpeech, &str)]) -> Self {
        let mut wordnet = WordNet::default();
        for &(pos, text) in indexes {
            wordnet.lemmas.entry(pos).or_default().extend(parse_index(text));
        }
        for &(pos, text) in exceptions {
            wordnet
                .exceptions
                .entry(pos)
                .or_default()
                .extend(parse_exceptions(text));
        }
        wordnet
    }

    pub fn lemma_count(&self, pos: PartOfSpeech) -> usize {
        self.lemmas.get(&pos).map_or(0, HashSet::len)
    }

    pub fn is_lemma(&self, word: &str, pos: PartOfSpeech) -> bool {
        self.lemmas.get(&pos).is_some_and(|set| set.contains(word))
    }

    /// All known lemmas `form` may be an inflection of, in discovery order.
    ///
    /// The exception list is consulted first. Otherwise suffix detachment is
    /// applied repeatedly until some generation contains a known lemma.
    pub fn morphy(&self, form: &str, pos: PartOfSpeech) -> Vec<String> {
        if let Some(bases) = self.exceptions.get(&pos).and_then(|exc| exc.get(form)) {
            let candidates = std::iter::once(form.to_string()).chain(bases.iter().cloned());
            return self.known_lemmas(candidates, pos);
        }

        let rules = detachment_rules(pos);
        let mut forms = detach(std::slice::from_ref(&form.to_string()), rules);

        let first = std::iter::once(form.to_string()).chain(forms.iter().cloned());
        let results = self.known_lemmas(first, pos);
        if !results.is_empty() {
            return results;
        }

        // Every rule but men -> man shortens the form, and no suffix matches a
        // form ending in "man", so this terminates.
        while !forms.is_empty() {
            forms = detach(&forms, rules);
            let results = self.known_lemmas(forms.iter().cloned(), pos);
            if !results.is_empty() {
                return results;
            }
        }
        Vec::new()
    }

    fn known_lemmas(&self, forms: impl Iterator<Item = String>, pos: PartOfSpeech) -> Vec<String> {
        let mut seen = HashSet::new();
        forms
            .filter(|form| self.is_lemma(form, pos))
            .filter(|form| seen.insert(form.clone()))
            .collect()
    }
}

impl Lemmatize for WordNet {
    fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String {
        self.morphy(word, pos)
            .into_iter()
            .min_by_key(String::len)
            .unwrap_or_else(|| word.to_string())
    }
}

fn detach(forms: &[String], rules: &[(&str, &str)]) -> Vec<String> {
    let mut out = Vec::new();
    for form in forms {
        for &(suffix, replacement) in rules {
            if let Some(stem) = form.strip_suffix(suffix) {
                out.push(format!("{}{}", stem, replacement));
            }
        }
    }
    out
}

fn read_resource(path: &Path) -> Result<String, ResourceError> {
    fs::read_to_string(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Lemma column of a WordNet index file. Licence header lines start with a space.
fn parse_index(text: &str) -> HashSet<String> {
    text.lines()
        .filter(|line| !line.starts_with(' '))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// `inflected base [base...]` per line.
fn parse_exceptions(text: &str) -> HashMap<String, Vec<String>> {
    let mut exceptions = HashMap::new();
    for line in text.lines() {
        let mut fields = line.split_whitespace();
        let Some(inflected) = fields.next() else {
            continue;
        };
        let bases: Vec<String> = fields.map(str::to_string).collect();
        if !bases.is_empty() {
            exceptions.insert(inflected.to_string(), bases);
        }
    }
    exceptions
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOUN_INDEX: &str = "  1 This software and database is being provided\n\
        dog n 2 1 @ 2 0 02084071 02710044\n\
        box n 1 1 @ 1 0 02883344\n\
        child n 1 1 @ 1 0 09918248\n\
        man n 1 1 @ 1 0 10287213\n\
        city n 1 1 @ 1 0 08524735\n\
        run n 1 1 @ 1 0 00189565\n\
        are n 1 1 @ 1 0 13600404\n";
    const VERB_INDEX: &str = "run v 1 1 @ 1 0 01926311\n\
        be v 1 1 @ 1 0 02604760\n\
        make v 1 1 @ 1 0 01617192\n\
        dog v 1 1 @ 1 0 02001858\n";
    const ADJ_INDEX: &str = "good a 1 1 & 1 0 01123148\nbig a 1 1 & 1 0 01382086\n";
    const ADV_INDEX: &str = "quickly r 1 0 1 0 00085811\n";
    const NOUN_EXC: &str = "children child\nmen man\n";
    const VERB_EXC: &str = "are be\nran run\nrunning run\n";
    const ADJ_EXC: &str = "better good well\nbigger big\n";

    fn fixture() -> WordNet {
        WordNet::from_sources(
            &[
                (PartOfSpeech::Noun, NOUN_INDEX),
                (PartOfSpeech::Verb, VERB_INDEX),
                (PartOfSpeech::Adjective, ADJ_INDEX),
                (PartOfSpeech::Adverb, ADV_INDEX),
            ],
            &[
                (PartOfSpeech::Noun, NOUN_EXC),
                (PartOfSpeech::Verb, VERB_EXC),
                (PartOfSpeech::Adjective, ADJ_EXC),
            ],
        )
    }

    #[test]
    fn regular_noun_plurals() {
        let wn = fixture();
        assert_eq!(wn.lemmatize("dogs", PartOfSpeech::Noun), "dog");
        assert_eq!(wn.lemmatize("boxes", PartOfSpeech::Noun), "box");
        assert_eq!(wn.lemmatize("cities", PartOfSpeech::Noun), "city");
    }

    #[test]
    fn exceptions_take_priority() {
        let wn = fixture();
        assert_eq!(wn.lemmatize("children", PartOfSpeech::Noun), "child");
        assert_eq!(wn.lemmatize("running", PartOfSpeech::Verb), "run");
        assert_eq!(wn.lemmatize("ran", PartOfSpeech::Verb), "run");
        assert_eq!(wn.lemmatize("better", PartOfSpeech::Adjective), "good");
    }

    #[test]
    fn exception_keeps_form_when_it_is_a_lemma() {
        let wn = fixture();
        // "are" is a noun (unit of area) and an inflection of "be".
        assert_eq!(wn.morphy("are", PartOfSpeech::Verb), vec!["be".to_string()]);
        assert_eq!(wn.lemmatize("are", PartOfSpeech::Noun), "are");
    }

    #[test]
    fn verb_suffixes() {
        let wn = fixture();
        assert_eq!(wn.lemmatize("makes", PartOfSpeech::Verb), "make");
        assert_eq!(wn.lemmatize("making", PartOfSpeech::Verb), "make");
        assert_eq!(wn.lemmatize("dogs", PartOfSpeech::Verb), "dog");
    }

    #[test]
    fn unknown_words_are_returned_unchanged() {
        let wn = fixture();
        assert_eq!(wn.lemmatize("zephyrs", PartOfSpeech::Noun), "zephyrs");
        assert_eq!(wn.lemmatize("quickly", PartOfSpeech::Adverb), "quickly");
        assert_eq!(wn.lemmatize("faster", PartOfSpeech::Adverb), "faster");
    }

    #[test]
    fn same_length_detachment_stops() {
        let wn = fixture();
        assert!(wn.morphy("frogmen", PartOfSpeech::Noun).is_empty());
        assert_eq!(wn.lemmatize("frogmen", PartOfSpeech::Noun), "frogmen");
    }

    #[test]
    fn default_lemma_is_noun() {
        let wn = fixture();
        assert_eq!(wn.lemmatize_default("men"), "man");
    }

    #[test]
    fn load_requires_index_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.noun"), NOUN_INDEX).unwrap();

        let err = WordNet::load(dir.path()).unwrap_err();
        assert!(matches!(err, ResourceError::Missing { name: "wordnet index", .. }));

        fs::write(dir.path().join("index.verb"), VERB_INDEX).unwrap();
        fs::write(dir.path().join("index.adj"), ADJ_INDEX).unwrap();
        fs::write(dir.path().join("index.adv"), ADV_INDEX).unwrap();
        fs::write(dir.path().join("verb.exc"), VERB_EXC).unwrap();

        let wn = WordNet::load(dir.path()).unwrap();
        assert_eq!(wn.lemma_count(PartOfSpeech::Noun), 7);
        assert_eq!(wn.lemmatize("running", PartOfSpeech::Verb), "run");
    }
}
