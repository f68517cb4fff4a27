use std::env;

use serde::{Deserialize, Serialize};

fn default_source() -> String {
    "semantic.json".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Filesystem path or http(s) URL of the word list
    #[serde(default = "default_source")]
    pub source: String,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let source = env::var("LUGAT_DICTIONARY").unwrap_or_else(|_| default_source());

        Self { source }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
        }
    }
}
