use std::sync::Arc;

use kanal::AsyncSender;
use lugat_core::{AppState, DictionaryLoader};
use lugat_types::{AppEvent, UiEvent};

/// One-shot dictionary fetch; reports back through the event channel
pub async fn load_dictionary(
    state: Arc<AppState>,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let loader = DictionaryLoader::from_source(&state.config.dictionary.source);
    let result = loader.load().await;

    if let Err(e) = &result {
        tracing::error!("Failed to load dictionary from {}: {}", loader.location(), e);
    }
    state.finish_load(result);

    event_tx
        .send(AppEvent::UiEvent {
            id: None,
            event: UiEvent::DictionaryLoaded,
        })
        .await?;

    Ok(())
}
