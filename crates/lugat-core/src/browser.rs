use std::collections::HashMap;
use std::sync::Arc;

use lugat_types::{ActionLabel, ElementId, EventKind, Key, RenderInstruction, UiEvent};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::gate::InputGate;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::random::pick_random;
use crate::render::Renderer;
use crate::state::{AppState, LoadStatus};
use crate::suggest::SuggestionEngine;

/// Event handler: current browser state plus event in, render instructions out
pub type Handler = fn(&mut BrowserContext, &UiEvent) -> Vec<RenderInstruction>;

/// Everything a handler may read or update
pub struct BrowserContext {
    pub state: Arc<AppState>,
    /// Raw text currently in the search box
    pub search_text: String,
    suggestions: SuggestionEngine,
    renderer: Renderer,
    gate: InputGate,
    rng: Box<dyn RngCore + Send>,
}

impl BrowserContext {
    pub fn new(state: Arc<AppState>, rng: Box<dyn RngCore + Send>) -> Self {
        let config = &state.config;
        let suggestions = SuggestionEngine::new(&config.search);
        let renderer = Renderer::new(&config.render);
        let gate = InputGate::new(&config.input);

        Self {
            state,
            search_text: String::new(),
            suggestions,
            renderer,
            gate,
            rng,
        }
    }

    /// Trimmed, case-folded search text
    pub fn query(&self) -> String {
        DefaultPreprocessor.process(&self.search_text)
    }

    pub fn action_label(&self) -> ActionLabel {
        if self.search_text.trim().is_empty() {
            ActionLabel::Random
        } else {
            ActionLabel::Search
        }
    }

    /// Status line for the current load state
    pub fn status_message(&self) -> String {
        let render = &self.state.config.render;
        match self.state.status() {
            LoadStatus::Loading => render.loading_message.clone(),
            LoadStatus::Ready(dict) => render.word_count_message(dict.len()),
            LoadStatus::Failed(_) => render.load_error_message.clone(),
        }
    }

    pub fn suggest(&self) -> RenderInstruction {
        match self
            .suggestions
            .suggest(self.state.dictionary(), &self.query())
        {
            Some(list) => RenderInstruction::ShowSuggestions(list),
            None => RenderInstruction::HideSuggestions,
        }
    }

    /// Exact lookup of the typed text
    pub fn lookup_typed(&self) -> RenderInstruction {
        self.lookup_word(&self.query())
    }

    /// Exact lookup of a headword as authored
    pub fn lookup_word(&self, word: &str) -> RenderInstruction {
        self.renderer.lookup(self.state.dictionary(), word)
    }

    pub fn lookup_random(&mut self) -> RenderInstruction {
        let Some(dict) = self.state.dictionary() else {
            return self.renderer.no_results();
        };

        match pick_random(dict, &mut *self.rng) {
            Some(word) => {
                tracing::debug!("Random pick: '{}'", word);
                self.renderer.lookup(Some(dict), word)
            }
            None => self.renderer.no_results(),
        }
    }
}

/// Handlers registered by (element, event kind)
pub struct HandlerTable {
    handlers: HashMap<(ElementId, EventKind), Handler>,
}

impl HandlerTable {
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register(&mut self, element: ElementId, kind: EventKind, handler: Handler) {
        if self.handlers.insert((element, kind), handler).is_some() {
            tracing::debug!("Replaced handler for {:?}/{:?}", element, kind);
        }
    }

    pub fn get(&self, element: ElementId, kind: EventKind) -> Option<Handler> {
        self.handlers.get(&(element, kind)).copied()
    }

    /// Run the handler for the event's target; unregistered targets render nothing
    pub fn dispatch(&self, ctx: &mut BrowserContext, event: &UiEvent) -> Vec<RenderInstruction> {
        let (element, kind) = event.target();
        match self.get(element, kind) {
            Some(handler) => handler(ctx, event),
            None => {
                tracing::debug!("No handler for {}/{:?}", element.dom_id(), kind);
                Vec::new()
            }
        }
    }
}

impl Default for HandlerTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.register(ElementId::Page, EventKind::Ready, on_page_ready);
        table.register(ElementId::Page, EventKind::DictionaryLoaded, on_dictionary_loaded);
        table.register(ElementId::SearchBox, EventKind::Input, on_search_input);
        table.register(ElementId::SearchBox, EventKind::KeyPress, on_search_key_press);
        table.register(ElementId::ActionButton, EventKind::Click, on_action_click);
        table.register(ElementId::Suggestions, EventKind::Click, on_suggestion_click);
        table
    }
}

fn on_page_ready(ctx: &mut BrowserContext, _event: &UiEvent) -> Vec<RenderInstruction> {
    vec![
        RenderInstruction::SetStatus(ctx.status_message()),
        RenderInstruction::SetActionLabel(ctx.action_label()),
    ]
}

fn on_dictionary_loaded(ctx: &mut BrowserContext, _event: &UiEvent) -> Vec<RenderInstruction> {
    if let LoadStatus::Failed(reason) = ctx.state.status() {
        tracing::error!("Error fetching dictionary: {}", reason);
    }
    vec![RenderInstruction::SetStatus(ctx.status_message())]
}

fn on_search_input(ctx: &mut BrowserContext, event: &UiEvent) -> Vec<RenderInstruction> {
    let UiEvent::SearchInput(text) = event else {
        return Vec::new();
    };
    ctx.search_text = text.clone();

    vec![
        ctx.suggest(),
        RenderInstruction::SetActionLabel(ctx.action_label()),
    ]
}

fn on_search_key_press(ctx: &mut BrowserContext, event: &UiEvent) -> Vec<RenderInstruction> {
    let UiEvent::SearchKeyPress(key) = event else {
        return Vec::new();
    };

    match *key {
        Key::Enter => vec![ctx.lookup_typed(), RenderInstruction::HideSuggestions],
        Key::Char(c) if !ctx.gate.accepts_char(c) => vec![RenderInstruction::RejectKey(c)],
        // Accepted keystrokes show up as a following input event
        Key::Char(_) => Vec::new(),
    }
}

fn on_action_click(ctx: &mut BrowserContext, _event: &UiEvent) -> Vec<RenderInstruction> {
    match ctx.action_label() {
        ActionLabel::Random => vec![ctx.lookup_random()],
        ActionLabel::Search => vec![ctx.lookup_typed()],
    }
}

fn on_suggestion_click(ctx: &mut BrowserContext, event: &UiEvent) -> Vec<RenderInstruction> {
    let UiEvent::SuggestionClick(word) = event else {
        return Vec::new();
    };
    ctx.search_text = word.clone();

    vec![
        RenderInstruction::SetSearchText(word.clone()),
        RenderInstruction::HideSuggestions,
        RenderInstruction::SetActionLabel(ctx.action_label()),
        ctx.lookup_word(word),
    ]
}

/// The single UI controller: owns the browser state and the handler table
pub struct DictionaryBrowser {
    ctx: BrowserContext,
    handlers: HandlerTable,
}

impl DictionaryBrowser {
    pub fn new(state: Arc<AppState>) -> Self {
        Self::with_rng(state, Box::new(StdRng::from_entropy()))
    }

    pub fn with_rng(state: Arc<AppState>, rng: Box<dyn RngCore + Send>) -> Self {
        Self {
            ctx: BrowserContext::new(state, rng),
            handlers: HandlerTable::default(),
        }
    }

    pub fn handlers_mut(&mut self) -> &mut HandlerTable {
        &mut self.handlers
    }

    pub fn context(&self) -> &BrowserContext {
        &self.ctx
    }

    pub fn handle(&mut self, event: &UiEvent) -> Vec<RenderInstruction> {
        tracing::debug!("Handling {:?}", event.target());
        self.handlers.dispatch(&mut self.ctx, event)
    }
}
