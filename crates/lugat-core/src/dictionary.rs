use std::collections::BTreeMap;

use lugat_types::DictionaryEntry;

use crate::error::LoadError;

/// Word list keyed by headword as authored (case-sensitive)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: BTreeMap<String, DictionaryEntry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a top-level JSON object of word -> entry
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let entries: BTreeMap<String, DictionaryEntry> = serde_json::from_str(json_str)?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, word: &str) -> Option<&DictionaryEntry> {
        self.entries.get(word)
    }

    /// Headwords in ascending order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Headword at `index` of the ordered key list
    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.words().nth(index)
    }
}

impl FromIterator<(String, DictionaryEntry)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, DictionaryEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
