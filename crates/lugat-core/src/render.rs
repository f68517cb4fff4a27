use lugat_config::render::RenderConfig;
use lugat_types::{DictionaryEntry, RenderInstruction, RenderedEntry};

use crate::dictionary::Dictionary;
use crate::highlight::KeywordHighlighter;
use crate::sanitize::{AllowlistSanitizer, Sanitizer, escape_text};

/// Exact lookup and result rendering
pub struct Renderer {
    sanitizer: Box<dyn Sanitizer>,
    highlighter: KeywordHighlighter,
    unknown_origin: String,
    no_results_message: String,
}

impl Renderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self::with_sanitizer(config, Box::new(AllowlistSanitizer::from_config(config)))
    }

    pub fn with_sanitizer(config: &RenderConfig, sanitizer: Box<dyn Sanitizer>) -> Self {
        Self {
            sanitizer,
            highlighter: KeywordHighlighter::new(&config.highlight_keywords),
            unknown_origin: config.unknown_origin.clone(),
            no_results_message: config.no_results_message.clone(),
        }
    }

    /// Exact-match lookup; a missing dictionary finds nothing
    pub fn lookup(&self, dict: Option<&Dictionary>, word: &str) -> RenderInstruction {
        match dict.and_then(|d| d.get(word)) {
            Some(entry) => RenderInstruction::ShowEntry(self.render_entry(word, entry)),
            None => {
                tracing::debug!("No entry for '{}'", word);
                self.no_results()
            }
        }
    }

    pub fn no_results(&self) -> RenderInstruction {
        RenderInstruction::ShowNoResults {
            message: self.no_results_message.clone(),
            // Configured text, trusted
            html: format!(r#"<h3 class="error">{}</h3>"#, self.no_results_message),
        }
    }

    pub fn render_entry(&self, word: &str, entry: &DictionaryEntry) -> RenderedEntry {
        let kind = entry.kind.clone().unwrap_or_default();
        let origin = entry
            .origin
            .clone()
            .filter(|o| !o.is_empty())
            .unwrap_or_else(|| self.unknown_origin.clone());
        let description = entry.description.as_deref().unwrap_or_default();
        let description_html = self
            .highlighter
            .highlight(&self.sanitizer.sanitize(description));

        let html = format!(
            concat!(
                r#"<div class="word"><h3>{word}</h3><p><i>{kind}</i></p></div>"#,
                r#"<div class="details"><p><b>Origin:</b> {origin}</p></div>"#,
                r#"<p class="description"><b class='green'>I.</b> {description}</p>"#,
            ),
            word = escape_text(word),
            kind = escape_text(&kind),
            origin = escape_text(&origin),
            description = description_html,
        );

        RenderedEntry {
            word: word.to_string(),
            kind,
            origin,
            description_html,
            html,
        }
    }
}
