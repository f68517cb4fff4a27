use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lugat_core::{AppState, DictionaryBrowser};
use lugat_types::AppEvent;
use tokio_util::sync::CancellationToken;

/// App's main loop: feeds UI events to the browser, sends back render instructions
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let browser = DictionaryBrowser::new(state);
    run_browser(browser, ui_to_app_rx, app_to_ui_tx, cancel).await
}

pub async fn run_browser(
    mut browser: DictionaryBrowser,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            event = ui_to_app_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => {
                    tracing::debug!("[EVENT_LOOP] Channel closed");
                    break;
                }
            },
            _ = cancel.cancelled() => break,
        };

        match event {
            AppEvent::UiEvent { id, event } => {
                let instructions = browser.handle(&event);
                tracing::debug!(
                    "[EVENT_LOOP] {:?} -> {} instructions",
                    event.target(),
                    instructions.len()
                );
                app_to_ui_tx
                    .send(AppEvent::Render {
                        reply_to: id,
                        instructions,
                    })
                    .await?;
            }
            AppEvent::Render { .. } => {
                // UI-only event, ignore in backend
            }
            AppEvent::Shutdown => {
                tracing::info!("[EVENT_LOOP] Shutdown requested");
                break;
            }
        }
    }

    Ok(())
}
