use std::io::{self, Write};

use kanal::{AsyncReceiver, AsyncSender};
use lugat_types::{ActionLabel, AppEvent, Key, RenderInstruction, Suggestion, UiEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Line-oriented stand-in for the search page
pub struct TerminalView {
    pub search_text: String,
    pub label: ActionLabel,
    pub suggestions: Vec<Suggestion>,
}

impl Default for TerminalView {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            label: ActionLabel::Random,
            suggestions: Vec::new(),
        }
    }
}

impl TerminalView {
    pub fn apply(&mut self, instruction: RenderInstruction, out: &mut impl Write) -> io::Result<()> {
        match instruction {
            RenderInstruction::SetStatus(status) => writeln!(out, "{status}")?,
            RenderInstruction::ShowSuggestions(suggestions) => {
                if suggestions.is_empty() {
                    writeln!(out, "  (no suggestions)")?;
                }
                for (i, suggestion) in suggestions.iter().enumerate() {
                    writeln!(out, "  {:>3}. {}", i + 1, suggestion.word)?;
                }
                self.suggestions = suggestions;
            }
            RenderInstruction::HideSuggestions => self.suggestions.clear(),
            RenderInstruction::SetSearchText(text) => self.search_text = text,
            RenderInstruction::SetActionLabel(label) => self.label = label,
            RenderInstruction::ShowEntry(entry) => {
                writeln!(out, "{} ({})", entry.word, entry.kind)?;
                writeln!(out, "Origin: {}", entry.origin)?;
                writeln!(out, "I. {}", entry.description_html)?;
            }
            RenderInstruction::ShowNoResults { message, .. } => writeln!(out, "{message}")?,
            RenderInstruction::RejectKey(c) => writeln!(out, "  ignored {c:?}")?,
        }
        Ok(())
    }

    pub fn apply_all(
        &mut self,
        instructions: Vec<RenderInstruction>,
        out: &mut impl Write,
    ) -> io::Result<()> {
        for instruction in instructions {
            self.apply(instruction, out)?;
        }
        out.flush()
    }
}

/// Parsed line of terminal input
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Replace the search text, typed char by char
    Type(String),
    Enter,
    Click,
    Pick(usize),
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let Some(rest) = line.strip_prefix(':') else {
            return Command::Type(line.to_string());
        };
        let mut parts = rest.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("enter"), None) => Command::Enter,
            (Some("click"), None) => Command::Click,
            (Some("quit" | "q"), None) => Command::Quit,
            (Some("pick"), Some(n)) => match n.parse() {
                Ok(n) if n > 0 => Command::Pick(n),
                _ => Command::Unknown(line.to_string()),
            },
            _ => Command::Unknown(line.to_string()),
        }
    }
}

/// Sends UI events and waits for their replies, rendering anything in between
pub struct UiSession<W: Write> {
    pub view: TerminalView,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    next_id: u64,
    out: W,
}

impl<W: Write> UiSession<W> {
    pub fn new(
        app_to_ui_rx: AsyncReceiver<AppEvent>,
        ui_to_app_tx: AsyncSender<AppEvent>,
        out: W,
    ) -> Self {
        Self {
            view: TerminalView::default(),
            app_to_ui_rx,
            ui_to_app_tx,
            next_id: 1,
            out,
        }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Dispatch one event and return its instructions once they arrive
    pub async fn request(&mut self, event: UiEvent) -> anyhow::Result<Vec<RenderInstruction>> {
        let id = self.next_id;
        self.next_id += 1;

        self.ui_to_app_tx
            .send(AppEvent::UiEvent {
                id: Some(id),
                event,
            })
            .await?;

        loop {
            match self.app_to_ui_rx.recv().await? {
                AppEvent::Render {
                    reply_to: Some(reply),
                    instructions,
                } if reply == id => return Ok(instructions),
                other => self.render(other)?,
            }
        }
    }

    pub fn render(&mut self, event: AppEvent) -> anyhow::Result<()> {
        if let AppEvent::Render { instructions, .. } = event {
            self.view.apply_all(instructions, &mut self.out)?;
        }
        Ok(())
    }

    async fn send_and_render(&mut self, event: UiEvent) -> anyhow::Result<()> {
        let instructions = self.request(event).await?;
        self.view.apply_all(instructions, &mut self.out)?;
        Ok(())
    }

    /// Returns false once the user asked to quit
    pub async fn run_command(&mut self, command: Command) -> anyhow::Result<bool> {
        match command {
            Command::Type(text) => self.type_text(&text).await?,
            Command::Enter => self.send_and_render(UiEvent::SearchKeyPress(Key::Enter)).await?,
            Command::Click => self.send_and_render(UiEvent::ActionClick).await?,
            Command::Pick(n) => match self.view.suggestions.get(n - 1) {
                Some(suggestion) => {
                    let word = suggestion.word.clone();
                    self.send_and_render(UiEvent::SuggestionClick(word)).await?;
                }
                None => writeln!(self.out, "  no suggestion #{n}")?,
            },
            Command::Quit => return Ok(false),
            Command::Unknown(line) => {
                writeln!(self.out, "  unknown command {line:?} (:enter, :click, :pick N, :quit)")?
            }
        }
        Ok(true)
    }

    async fn type_text(&mut self, text: &str) -> anyhow::Result<()> {
        let mut typed = String::new();

        for c in text.chars() {
            let verdict = self.request(UiEvent::SearchKeyPress(Key::Char(c))).await?;
            let rejected = verdict
                .iter()
                .any(|i| matches!(i, RenderInstruction::RejectKey(_)));
            self.view.apply_all(verdict, &mut self.out)?;
            if !rejected {
                typed.push(c);
            }
        }

        self.view.search_text = typed.clone();
        self.send_and_render(UiEvent::SearchInput(typed)).await
    }

    fn prompt(&mut self, interactive: bool) -> io::Result<()> {
        if interactive {
            write!(self.out, "[{}] {}> ", self.view.label, self.view.search_text)?;
            self.out.flush()?;
        }
        Ok(())
    }
}

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let interactive = atty::is(atty::Stream::Stdin);
    let mut session = UiSession::new(app_to_ui_rx.clone(), ui_to_app_tx.clone(), io::stdout());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    session.send_and_render(UiEvent::PageReady).await?;
    session.prompt(interactive)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if !session.run_command(Command::parse(line.trim_end())).await? {
                    break;
                }
                session.prompt(interactive)?;
            }
            event = app_to_ui_rx.recv() => {
                session.render(event?)?;
            }
            _ = cancel.cancelled() => break,
        }
    }

    tracing::info!("Terminal UI stopping");
    ui_to_app_tx.send(AppEvent::Shutdown).await?;
    cancel.cancel();
    Ok(())
}
