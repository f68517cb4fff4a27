use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// Treat the typed query as a raw regular expression when highlighting
    /// suggestions. Off by default: the query is matched literally.
    pub legacy_regex_query: bool,
    /// Cap on the number of suggestions shown, unlimited when unset
    pub max_suggestions: Option<usize>,
}
