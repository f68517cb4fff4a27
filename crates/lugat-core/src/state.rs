use std::sync::OnceLock;

use lugat_config::Config;

use crate::dictionary::Dictionary;
use crate::error::LoadError;

/// Where the one-time dictionary load stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus<'a> {
    Loading,
    Ready(&'a Dictionary),
    Failed(&'a str),
}

/// Session state: configuration plus the dictionary, written once
#[derive(Default)]
pub struct AppState {
    pub config: Config,
    dictionary: OnceLock<Result<Dictionary, String>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            dictionary: OnceLock::new(),
        }
    }

    /// Record the load outcome. Returns false if one was already recorded.
    pub fn finish_load(&self, result: Result<Dictionary, LoadError>) -> bool {
        let outcome = result.map_err(|e| e.to_string());
        let accepted = self.dictionary.set(outcome).is_ok();
        if !accepted {
            tracing::warn!("Dictionary already loaded, ignoring second load result");
        }
        accepted
    }

    pub fn status(&self) -> LoadStatus<'_> {
        match self.dictionary.get() {
            None => LoadStatus::Loading,
            Some(Ok(dict)) => LoadStatus::Ready(dict),
            Some(Err(reason)) => LoadStatus::Failed(reason),
        }
    }

    /// The dictionary, if it loaded successfully
    pub fn dictionary(&self) -> Option<&Dictionary> {
        match self.status() {
            LoadStatus::Ready(dict) => Some(dict),
            _ => None,
        }
    }
}
