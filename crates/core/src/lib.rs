pub mod config;
pub mod error;
pub mod history;
pub mod session;
pub mod store;

pub use config::Config;
pub use error::{ConfigError, StoreError};
pub use history::{Cursor, HistoryNavigator, Submission};
pub use session::HistorySession;
pub use store::{HistoryStore, JsonFileStore, MemoryStore};
