use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::input::InputConfig;
use self::render::RenderConfig;
use self::search::SearchConfig;

pub mod dictionary;
pub mod input;
pub mod render;
pub mod search;

fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub search: SearchConfig,
    pub render: RenderConfig,
    pub input: InputConfig,

    /// Capacity of the channels between the UI and the event loop
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let channel_capacity = env::var("LUGAT_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&v| v > 0)
            .unwrap_or_else(default_channel_capacity);

        Config {
            dictionary: DictionaryConfig::new(),
            search: SearchConfig::default(),
            render: RenderConfig::default(),
            input: InputConfig::default(),

            channel_capacity,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            search: SearchConfig::default(),
            render: RenderConfig::default(),
            input: InputConfig::default(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_section_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"search": {"legacy_regex_query": true}}"#).unwrap();

        assert!(config.search.legacy_regex_query);
        assert_eq!(config.dictionary.source, "semantic.json");
        assert_eq!(config.render.allowed_tags, ["b", "i", "em", "strong", "a"]);
        assert_eq!(config.render.unknown_origin, "Unknown");
        assert_eq!(config.channel_capacity, 64);
    }

    #[test]
    fn word_count_message_fills_count() {
        let render = RenderConfig::default();
        assert!(
            render
                .word_count_message(42)
                .starts_with("Currently, there are 42 words and suffixes")
        );
    }
}
