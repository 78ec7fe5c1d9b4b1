// --- File: src/core/lexicon.rs
use crate::core::seed::BASE_ENTRIES;
use crate::error::LexiconError;
use crate::persistence::{parse_mapping, read_mapping, write_mapping, Mapping};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of merging an override source into the lexicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded {
        source: String,
        added: usize,
        updated: usize,
        total_in_source: usize,
    },
    Absent {
        source: String,
        base_size: usize,
    },
    Malformed {
        reason: String,
    },
}

impl LoadStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, LoadStatus::Malformed { .. })
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadStatus::Loaded {
                source,
                added,
                updated,
                total_in_source,
            } => write!(
                f,
                "Loaded {} new and {} updated words from '{}'. Total words from file: {}.",
                added, updated, source, total_in_source
            ),
            LoadStatus::Absent { source, base_size } => write!(
                f,
                "No extended dictionary ('{}') found. Using basic dictionary of {} words.",
                source, base_size
            ),
            LoadStatus::Malformed { reason } => f.write_str(reason),
        }
    }
}

/// A successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub path: PathBuf,
    pub entries: usize,
}

impl fmt::Display for SaveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dictionary successfully saved with {} words to {}",
            self.entries,
            self.path.display()
        )
    }
}

/// English → Hindi mapping.
///
/// Entries keep insertion order; overwriting a key keeps its original slot.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
    base_size: usize,
    status_message: String,
}

impl Lexicon {
    /// Creates a lexicon holding the built-in base entries.
    pub fn new() -> Self {
        let mut lexicon = Self::empty();
        for &(english, hindi) in BASE_ENTRIES {
            lexicon.insert(english.to_string(), hindi.to_string());
        }
        lexicon.base_size = lexicon.len();
        lexicon
    }

    /// A lexicon without the base entries. Mostly useful for hosts that ship
    /// their own complete dictionary.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            base_size: 0,
            status_message: String::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries right after seeding.
    pub fn base_size(&self) -> usize {
        self.base_size
    }

    /// Message describing the last override load, for display by the host.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Exact-match lookup.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Session-scoped insert or overwrite. The key is lowercased; the value is
    /// stored as given.
    pub fn add(&mut self, english: &str, hindi: &str) {
        self.insert(english.to_lowercase(), hindi.to_string());
    }

    /// Merges the override file at `path` into the lexicon.
    ///
    /// Never fails: absence and parse errors are reported through the returned
    /// status (also kept in `status_message`). On error the mapping is left as
    /// it was.
    pub fn load_overrides(&mut self, path: &Path) -> LoadStatus {
        let source = path.display().to_string();
        let status = match read_mapping(path) {
            Ok(Some(mapping)) => self.merge(source, mapping),
            Ok(None) => LoadStatus::Absent {
                source,
                base_size: self.base_size,
            },
            Err(e) => Self::failure(e, &source),
        };
        self.record(status)
    }

    /// Same as `load_overrides` for mapping text that does not live on disk.
    pub fn load_overrides_str(&mut self, contents: &str, origin: &str) -> LoadStatus {
        let status = match parse_mapping(contents, Path::new(origin)) {
            Ok(mapping) => self.merge(origin.to_string(), mapping),
            Err(e) => Self::failure(e, origin),
        };
        self.record(status)
    }

    /// Writes the whole mapping, key-sorted, to `path`.
    pub fn save(&self, path: &Path) -> Result<SaveReport, LexiconError> {
        let sorted: BTreeMap<&str, &str> = self.iter().collect();
        match write_mapping(path, &sorted) {
            Ok(()) => {
                let report = SaveReport {
                    path: path.to_path_buf(),
                    entries: sorted.len(),
                };
                tracing::info!("{}", report);
                Ok(report)
            }
            Err(e) => {
                tracing::error!("Error saving dictionary: {}", e);
                Err(e)
            }
        }
    }

    fn merge(&mut self, source: String, mapping: Mapping) -> LoadStatus {
        let total_in_source = mapping.len();
        let mut added = 0;
        let mut updated = 0;
        for (english, hindi) in mapping {
            match self.index.get(&english) {
                Some(&slot) => {
                    if self.entries[slot].1 != hindi {
                        updated += 1;
                    }
                    self.entries[slot].1 = hindi;
                }
                None => {
                    self.insert(english, hindi);
                    added += 1;
                }
            }
        }
        LoadStatus::Loaded {
            source,
            added,
            updated,
            total_in_source,
        }
    }

    fn failure(error: LexiconError, source: &str) -> LoadStatus {
        let reason = match error {
            LexiconError::Parse { .. } => error.to_string(),
            other => format!("Error loading extended dictionary '{}': {}", source, other),
        };
        LoadStatus::Malformed { reason }
    }

    fn record(&mut self, status: LoadStatus) -> LoadStatus {
        if status.is_failure() {
            tracing::warn!("{}", status);
        } else {
            tracing::info!("{}", status);
        }
        self.status_message = status.to_string();
        status
    }

    fn insert(&mut self, english: String, hindi: String) {
        if let Some(&slot) = self.index.get(&english) {
            self.entries[slot].1 = hindi;
        } else {
            self.index.insert(english.clone(), self.entries.len());
            self.entries.push((english, hindi));
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::DICTIONARY_FILE;

    #[test]
    fn base_entries_are_seeded() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.base_size(), BASE_ENTRIES.len());
        assert_eq!(lexicon.len(), lexicon.base_size());
        assert_eq!(lexicon.lookup("language"), Some("भाषा"));
        assert_eq!(lexicon.lookup("Language"), None);
    }

    #[test]
    fn add_lowercases_key() {
        let mut lexicon = Lexicon::new();
        lexicon.add("Hello", "X");
        assert_eq!(lexicon.lookup("hello"), Some("X"));
        assert_eq!(lexicon.len(), lexicon.base_size());

        lexicon.add("Zephyr", "");
        assert_eq!(lexicon.lookup("zephyr"), Some(""));
        assert_eq!(lexicon.len(), lexicon.base_size() + 1);
    }

    #[test]
    fn overrides_grow_size_only_for_new_keys() {
        let mut lexicon = Lexicon::new();
        let status = lexicon.load_overrides_str(
            r#"{"dog": "कुत्ता", "cat": "बिल्ली", "water": "जल", "one": "एक"}"#,
            "inline",
        );

        assert_eq!(
            status,
            LoadStatus::Loaded {
                source: "inline".to_string(),
                added: 2,
                updated: 1,
                total_in_source: 4,
            }
        );
        assert_eq!(lexicon.len(), lexicon.base_size() + 2);
        assert_eq!(lexicon.lookup("water"), Some("जल"));
        assert!(lexicon.status_message().starts_with("Loaded 2 new and 1 updated"));
    }

    #[test]
    fn new_override_keys_follow_file_order() {
        let mut lexicon = Lexicon::new();
        lexicon.load_overrides_str(r#"{"zebra": "ज़ेबरा", "hello": "हैलो", "apple": "सेब"}"#, "inline");

        let appended: Vec<&str> = lexicon.iter().skip(lexicon.base_size()).map(|(k, _)| k).collect();
        assert_eq!(appended, vec!["zebra", "apple"]);
        assert!(lexicon.contains("zebra"));
        assert!(!lexicon.contains("Zebra"));
        assert_eq!(lexicon.lookup("hello"), Some("हैलो"));
    }

    #[test]
    fn malformed_override_keeps_previous_state() {
        let mut lexicon = Lexicon::new();
        lexicon.add("dog", "कुत्ता");
        let before = lexicon.len();

        let status = lexicon.load_overrides_str(r#"{"cat": "बिल्ली", "#, "broken.json");

        assert!(status.is_failure());
        assert_eq!(lexicon.len(), before);
        assert_eq!(lexicon.lookup("cat"), None);
        assert!(lexicon.status_message().contains("broken.json"));
    }

    #[test]
    fn absent_override_reports_base_size() {
        let dir = tempfile::tempdir().unwrap();
        let mut lexicon = Lexicon::new();
        let status = lexicon.load_overrides(&dir.path().join(DICTIONARY_FILE));

        assert!(matches!(status, LoadStatus::Absent { base_size, .. } if base_size == BASE_ENTRIES.len()));
        assert!(lexicon
            .status_message()
            .ends_with(&format!("Using basic dictionary of {} words.", BASE_ENTRIES.len())));
    }

    #[test]
    fn save_then_reload_keeps_every_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DICTIONARY_FILE);

        let mut lexicon = Lexicon::new();
        lexicon.add("Dog", "कुत्ता");
        lexicon.add("water", "जल");
        let report = lexicon.save(&path).unwrap();
        assert_eq!(report.entries, lexicon.len());

        let mut fresh = Lexicon::new();
        let status = fresh.load_overrides(&path);
        assert!(matches!(status, LoadStatus::Loaded { added: 1, updated: 1, .. }));
        for (english, hindi) in lexicon.iter() {
            assert_eq!(fresh.lookup(english), Some(hindi));
        }
    }

    #[test]
    fn save_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A directory already sits at the destination.
        let err = Lexicon::new().save(dir.path()).unwrap_err();
        assert!(matches!(err, LexiconError::Write { .. }));
    }
}
