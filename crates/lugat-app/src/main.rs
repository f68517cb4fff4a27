use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use lugat_core::{AppState, DictionaryBrowser, DictionaryLoader, LoadStatus};
use lugat_types::{Key, UiEvent};
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod loader;
pub mod profile;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::ui::TerminalView;

/// Browse a word list: autocomplete, exact lookup and random entries
#[derive(Parser, Debug)]
#[command(name = "lugat", version)]
struct Args {
    /// Word list path or http(s) URL, overrides the config
    #[arg(short, long, global = true)]
    dictionary: Option<String>,

    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive session (default)
    Browse,
    /// List suggestions for a partial word
    Suggest { query: String },
    /// Show the entry for a word
    Lookup { word: String },
    /// Show a random entry
    Random,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.json_logs);

    let mut config = profile::load_config(args.config.as_deref())?;
    if let Some(source) = args.dictionary {
        config.dictionary.source = source;
    }
    let state = Arc::new(AppState::new(config));

    match args.command.unwrap_or(Command::Browse) {
        Command::Browse => browse(state).await,
        Command::Suggest { query } => run_once(state, vec![UiEvent::SearchInput(query)]).await,
        Command::Lookup { word } => {
            run_once(
                state,
                vec![UiEvent::SearchInput(word), UiEvent::SearchKeyPress(Key::Enter)],
            )
            .await
        }
        Command::Random => run_once(state, vec![UiEvent::ActionClick]).await,
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn browse(state: Arc<AppState>) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    let outcome = loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
                break Ok(());
            }
            _ = controller.stopped() => break Ok(()),
            result = tasks.join_next() => match result {
                Some(Ok(Ok(()))) => continue,
                Some(Ok(Err(e))) => {
                    tracing::error!("task exited: {e}");
                    break Err(e);
                }
                Some(Err(e)) => {
                    tracing::error!("task panicked: {e}");
                    break Err(e.into());
                }
                None => break Ok(()),
            },
        }
    };

    controller.shutdown();
    tasks.shutdown().await;
    outcome
}

/// Load, replay a few events through the browser and print the result
async fn run_once(state: Arc<AppState>, events: Vec<UiEvent>) -> anyhow::Result<()> {
    let loader = DictionaryLoader::from_source(&state.config.dictionary.source);
    state.finish_load(loader.load().await);

    if let LoadStatus::Failed(reason) = state.status() {
        anyhow::bail!("{} ({reason})", state.config.render.load_error_message);
    }

    let mut browser = DictionaryBrowser::new(state);
    let mut view = TerminalView::default();
    let mut out = io::stdout().lock();

    for event in events {
        view.apply_all(browser.handle(&event), &mut out)?;
    }

    Ok(())
}
