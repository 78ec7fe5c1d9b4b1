// File: src/persistence.rs
use crate::error::LexiconError;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Default file name of the override dictionary.
pub const DICTIONARY_FILE: &str = "english_hindi_dict.json";

const INDENT: &[u8] = b"    ";

/// Override entries in the order they appear in the source. A repeated key
/// keeps its first position and its last value.
pub type Mapping = Vec<(String, String)>;

struct OrderedMapping(Mapping);

impl<'de> Deserialize<'de> for OrderedMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMappingVisitor)
    }
}

struct OrderedMappingVisitor;

impl<'de> Visitor<'de> for OrderedMappingVisitor {
    type Value = OrderedMapping;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of English words to Hindi strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries: Mapping = Vec::with_capacity(access.size_hint().unwrap_or(0));
        let mut slots: HashMap<String, usize> = HashMap::new();
        while let Some((english, hindi)) = access.next_entry::<String, String>()? {
            match slots.get(&english) {
                Some(&slot) => entries[slot].1 = hindi,
                None => {
                    slots.insert(english.clone(), entries.len());
                    entries.push((english, hindi));
                }
            }
        }
        Ok(OrderedMapping(entries))
    }
}

/// Reads a flat `{"english": "hindi"}` object.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_mapping(path: &Path) -> Result<Option<Mapping>, LexiconError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(LexiconError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse_mapping(&contents, path).map(Some)
}

/// Parses mapping text; `origin` only labels the error.
pub fn parse_mapping(contents: &str, origin: &Path) -> Result<Mapping, LexiconError> {
    // A leading BOM is common in hand-edited Windows files.
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    serde_json::from_str(contents)
        .map(|OrderedMapping(entries)| entries)
        .map_err(|source| LexiconError::Parse {
            path: origin.to_path_buf(),
            source,
        })
}

/// Writes the mapping key-sorted, 4-space indented, non-ASCII unescaped.
/// The destination is replaced atomically.
pub fn write_mapping(path: &Path, mapping: &BTreeMap<&str, &str>) -> Result<(), LexiconError> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_err = |source| LexiconError::Write {
        path: path.to_path_buf(),
        source,
    };
    fs::create_dir_all(parent_dir).map_err(write_err)?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(write_err)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
        mapping.serialize(&mut serializer)?;
        writer.write_all(b"\n").map_err(write_err)?;
        writer.flush().map_err(write_err)?;
    }

    temp_file.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
