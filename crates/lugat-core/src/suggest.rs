use lugat_config::search::SearchConfig;
use lugat_types::Suggestion;
use regex::{Regex, RegexBuilder};
use unicode_normalization::UnicodeNormalization;

use crate::dictionary::Dictionary;
use crate::sanitize::escape_text;

const HIGHLIGHT_OPEN: &str = r#"<span class="highlight">"#;
const HIGHLIGHT_CLOSE: &str = "</span>";

/// Incremental substring search over headwords
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    legacy_regex_query: bool,
    max_suggestions: Option<usize>,
}

impl SuggestionEngine {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            legacy_regex_query: config.legacy_regex_query,
            max_suggestions: config.max_suggestions,
        }
    }

    /// Suggestions for an already trimmed and case-folded query.
    ///
    /// `None` means the list is hidden (empty query). A missing dictionary
    /// behaves as an empty one.
    pub fn suggest(&self, dict: Option<&Dictionary>, query: &str) -> Option<Vec<Suggestion>> {
        if query.is_empty() {
            return None;
        }

        let pattern = self.pattern(query);
        let limit = self.max_suggestions.unwrap_or(usize::MAX);

        // Dictionary words iterate in ascending order already
        let suggestions = dict
            .into_iter()
            .flat_map(|d| d.words())
            .filter_map(|word| {
                // Keys compare in the same NFC form as the query
                let normalized = word.nfc().collect::<String>();
                normalized
                    .to_lowercase()
                    .contains(query)
                    .then(|| Suggestion {
                        word: word.to_string(),
                        html: highlight_with(&normalized, pattern.as_ref()),
                    })
            })
            .take(limit)
            .collect::<Vec<_>>();

        tracing::debug!("Query '{}': {} suggestions", query, suggestions.len());
        Some(suggestions)
    }

    /// Case-insensitive, global match of `query` inside `text`
    pub fn highlight_matches(&self, text: &str, query: &str) -> String {
        highlight_with(text, self.pattern(query).as_ref())
    }

    fn pattern(&self, query: &str) -> Option<Regex> {
        let source = if self.legacy_regex_query {
            query.to_string()
        } else {
            regex::escape(query)
        };

        match RegexBuilder::new(&source).case_insensitive(true).build() {
            Ok(regex) => Some(regex),
            Err(e) => {
                tracing::debug!("Query '{}' is not a valid pattern: {}", query, e);
                None
            }
        }
    }
}

fn highlight_with(text: &str, pattern: Option<&Regex>) -> String {
    let Some(pattern) = pattern else {
        return escape_text(text);
    };

    let mut html = String::with_capacity(text.len() + HIGHLIGHT_OPEN.len());
    let mut last = 0;

    for found in pattern.find_iter(text).filter(|m| m.start() != m.end()) {
        html.push_str(&escape_text(&text[last..found.start()]));
        html.push_str(HIGHLIGHT_OPEN);
        html.push_str(&escape_text(found.as_str()));
        html.push_str(HIGHLIGHT_CLOSE);
        last = found.end();
    }
    html.push_str(&escape_text(&text[last..]));

    html
}
