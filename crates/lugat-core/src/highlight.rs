use std::sync::LazyLock;

use regex::{Captures, Regex, RegexBuilder};

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// Wraps whole-word keyword occurrences in highlight spans
#[derive(Debug, Clone)]
pub struct KeywordHighlighter {
    keywords: Vec<String>,
    pattern: Option<Regex>,
}

impl KeywordHighlighter {
    pub fn new(keywords: &[String]) -> Self {
        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        let pattern = if keywords.is_empty() {
            None
        } else {
            let alternation = keywords
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
                .case_insensitive(true)
                .build()
                .inspect_err(|e| tracing::warn!("Keyword pattern rejected: {}", e))
                .ok()
        };

        Self { keywords, pattern }
    }

    /// Highlight keywords in the text parts of sanitized HTML.
    /// Tags and attribute values are left untouched.
    pub fn highlight(&self, html: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return html.to_string();
        };

        let mut out = String::with_capacity(html.len());
        let mut last = 0;

        for tag in TAG.find_iter(html) {
            out.push_str(&self.highlight_text(pattern, &html[last..tag.start()]));
            out.push_str(tag.as_str());
            last = tag.end();
        }
        out.push_str(&self.highlight_text(pattern, &html[last..]));

        out
    }

    fn highlight_text(&self, pattern: &Regex, text: &str) -> String {
        pattern
            .replace_all(text, |caps: &Captures| {
                // Rendered with the configured spelling, not the matched one
                let found = &caps[0];
                let keyword = self
                    .keywords
                    .iter()
                    .find(|k| k.to_lowercase() == found.to_lowercase())
                    .map(String::as_str)
                    .unwrap_or(found);
                format!(r#"<span class="highlight">{keyword}</span>"#)
            })
            .into_owned()
    }
}
