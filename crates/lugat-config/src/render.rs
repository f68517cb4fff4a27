use serde::{Deserialize, Serialize};

fn default_allowed_tags() -> Vec<String> {
    ["b", "i", "em", "strong", "a"].map(String::from).to_vec()
}

fn default_allowed_attributes() -> Vec<String> {
    vec!["href".to_string()]
}

fn default_highlight_keywords() -> Vec<String> {
    ["Ottoman", "Middle", "Proto"].map(String::from).to_vec()
}

fn default_unknown_origin() -> String {
    "Unknown".to_string()
}

fn default_no_results_message() -> String {
    "No results found.".to_string()
}

fn default_loading_message() -> String {
    "Loading dictionary...".to_string()
}

fn default_load_error_message() -> String {
    "Error loading dictionary.".to_string()
}

fn default_word_count_template() -> String {
    "Currently, there are {count} words and suffixes in our dictionary. \
     Our dictionary includes the meanings of the words, their origins, \
     the suffixes they take, and the functions of those suffixes."
        .to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RenderConfig {
    /// Tags kept in descriptions, everything else is stripped
    #[serde(default = "default_allowed_tags")]
    pub allowed_tags: Vec<String>,
    #[serde(default = "default_allowed_attributes")]
    pub allowed_attributes: Vec<String>,
    /// Whole words highlighted in descriptions
    #[serde(default = "default_highlight_keywords")]
    pub highlight_keywords: Vec<String>,
    #[serde(default = "default_unknown_origin")]
    pub unknown_origin: String,
    #[serde(default = "default_no_results_message")]
    pub no_results_message: String,
    #[serde(default = "default_loading_message")]
    pub loading_message: String,
    #[serde(default = "default_load_error_message")]
    pub load_error_message: String,
    /// Status text after a successful load, `{count}` is the entry count
    #[serde(default = "default_word_count_template")]
    pub word_count_template: String,
}

impl RenderConfig {
    pub fn word_count_message(&self, count: usize) -> String {
        self.word_count_template
            .replace("{count}", &count.to_string())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            allowed_tags: default_allowed_tags(),
            allowed_attributes: default_allowed_attributes(),
            highlight_keywords: default_highlight_keywords(),
            unknown_origin: default_unknown_origin(),
            no_results_message: default_no_results_message(),
            loading_message: default_loading_message(),
            load_error_message: default_load_error_message(),
            word_count_template: default_word_count_template(),
        }
    }
}
