use std::fmt;

use serde::{Deserialize, Serialize};

/// One dictionary record as authored in the word list
///
/// Fields are not validated: a record missing `type` or `description`
/// still loads and renders those parts as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Grammatical type, e.g. "noun" or "suffix"
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// HTML-bearing description text
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Page or front end event; `id` is set when the sender waits for the reply
    UiEvent { id: Option<u64>, event: UiEvent },
    /// Instructions produced for one event, `reply_to` echoes its id
    Render {
        reply_to: Option<u64>,
        instructions: Vec<RenderInstruction>,
    },
    Shutdown,
}

/// Page elements the browser reads from or renders into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Page,
    SearchBox,
    ActionButton,
    Suggestions,
    StatusMessage,
    Result,
}

impl ElementId {
    /// Fixed element identifier used by the HTML shell
    pub fn dom_id(&self) -> &'static str {
        match self {
            ElementId::Page => "document",
            ElementId::SearchBox => "searchBox",
            ElementId::ActionButton => "searchButton",
            ElementId::Suggestions => "suggestions",
            ElementId::StatusMessage => "wordCountMessage",
            ElementId::Result => "result",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Ready,
    DictionaryLoaded,
    Input,
    KeyPress,
    Click,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    PageReady,
    /// Loader finished, successfully or not; the outcome lives in the app state
    DictionaryLoaded,
    SearchInput(String),
    SearchKeyPress(Key),
    ActionClick,
    SuggestionClick(String),
}

impl UiEvent {
    /// Element and event kind this event is dispatched on
    pub fn target(&self) -> (ElementId, EventKind) {
        match self {
            UiEvent::PageReady => (ElementId::Page, EventKind::Ready),
            UiEvent::DictionaryLoaded => (ElementId::Page, EventKind::DictionaryLoaded),
            UiEvent::SearchInput(_) => (ElementId::SearchBox, EventKind::Input),
            UiEvent::SearchKeyPress(_) => (ElementId::SearchBox, EventKind::KeyPress),
            UiEvent::ActionClick => (ElementId::ActionButton, EventKind::Click),
            UiEvent::SuggestionClick(_) => (ElementId::Suggestions, EventKind::Click),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionLabel {
    Search,
    Random,
}

impl ActionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionLabel::Search => "Search",
            ActionLabel::Random => "Random",
        }
    }
}

impl fmt::Display for ActionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    /// Word markup with matching parts wrapped in highlight spans
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub word: String,
    pub kind: String,
    pub origin: String,
    /// Sanitized and keyword-highlighted description
    pub description_html: String,
    /// Full result block ready for the results container
    pub html: String,
}

/// What a front end should change after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
    SetStatus(String),
    ShowSuggestions(Vec<Suggestion>),
    HideSuggestions,
    SetSearchText(String),
    SetActionLabel(ActionLabel),
    ShowEntry(RenderedEntry),
    ShowNoResults { message: String, html: String },
    /// Keystroke vetoed before insertion
    RejectKey(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_reads_type_field() {
        let entry: DictionaryEntry = serde_json::from_str(
            r#"{"type": "noun", "origin": "Old English", "description": "A tall plant."}"#,
        )
        .unwrap();

        assert_eq!(entry.kind.as_deref(), Some("noun"));
        assert_eq!(entry.origin.as_deref(), Some("Old English"));
        assert_eq!(entry.description.as_deref(), Some("A tall plant."));
    }

    #[test]
    fn entry_tolerates_missing_fields() {
        let entry: DictionaryEntry = serde_json::from_str("{}").unwrap();
        assert_eq!(entry, DictionaryEntry::default());
    }

    #[test]
    fn events_target_fixed_elements() {
        assert_eq!(
            UiEvent::SuggestionClick("tree".into()).target(),
            (ElementId::Suggestions, EventKind::Click)
        );
        assert_eq!(ElementId::StatusMessage.dom_id(), "wordCountMessage");
    }
}
