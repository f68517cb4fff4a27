pub mod browser;
pub mod dictionary;
pub mod error;
pub mod gate;
pub mod highlight;
pub mod loader;
pub mod preprocess;
pub mod random;
pub mod render;
pub mod sanitize;
pub mod state;
pub mod suggest;

pub use browser::{BrowserContext, DictionaryBrowser, HandlerTable};
pub use dictionary::Dictionary;
pub use error::LoadError;
pub use loader::DictionaryLoader;
pub use state::{AppState, LoadStatus};
