use serde::{Deserialize, Serialize};

fn default_extra_letters() -> String {
    "çÇðÐýÝöÖþÞüÜğĞıİşŞ".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct InputConfig {
    /// Letters accepted in the search box on top of ASCII letters and whitespace
    #[serde(default = "default_extra_letters")]
    pub extra_letters: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            extra_letters: default_extra_letters(),
        }
    }
}
