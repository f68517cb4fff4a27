use std::collections::{HashMap, HashSet};

use lugat_config::render::RenderConfig;

/// Neutralizes markup in user-facing HTML
pub trait Sanitizer: Send + Sync {
    fn sanitize(&self, html: &str) -> String;
}

// Dropped together with their contents
const CLEAN_CONTENT_TAGS: [&str; 2] = ["script", "style"];

/// Keeps only allowlisted tags and attributes, backed by ammonia
#[derive(Debug, Clone)]
pub struct AllowlistSanitizer {
    tags: Vec<String>,
    attributes: Vec<String>,
}

impl AllowlistSanitizer {
    pub fn new(tags: &[String], attributes: &[String]) -> Self {
        let tags = tags
            .iter()
            .map(|t| t.to_ascii_lowercase())
            .filter(|t| !CLEAN_CONTENT_TAGS.contains(&t.as_str()))
            .collect();
        let attributes = attributes.iter().map(|a| a.to_ascii_lowercase()).collect();

        Self { tags, attributes }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(&config.allowed_tags, &config.allowed_attributes)
    }
}

impl Sanitizer for AllowlistSanitizer {
    fn sanitize(&self, html: &str) -> String {
        let mut builder = ammonia::Builder::default();
        builder
            .tags(self.tags.iter().map(String::as_str).collect::<HashSet<_>>())
            .clean_content_tags(CLEAN_CONTENT_TAGS.into_iter().collect::<HashSet<_>>())
            .tag_attributes(HashMap::<&str, HashSet<&str>>::new())
            .generic_attributes(self.attributes.iter().map(String::as_str).collect::<HashSet<_>>())
            .link_rel(None);

        builder.clean(html).to_string()
    }
}

/// Escapes text for use in element content or quoted attributes
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
