mod app;
mod events;
mod logging;
mod strings;
mod terminal;
mod theme;
mod ui;

use anyhow::Result;
use cmdbar_core::{Config, HistoryStore, JsonFileStore, MemoryStore};
use terminal::TerminalGuard;
use tracing::{info, warn};

fn main() -> Result<()> {
    let _log_guard = logging::init().unwrap_or(None);
    let config = Config::from_env_and_file().unwrap_or_else(|e| {
        warn!(target: "tui", "config ignored: {}", e);
        Config::default()
    });
    let store = open_store(&config);
    let mut app = app::App::new(&config, store);
    let mut term = TerminalGuard::new()?;
    let res = events::run(&mut term.terminal, &mut app);
    info!(target: "tui", "exit");
    res
}

fn open_store(config: &Config) -> Box<dyn HistoryStore> {
    if let Some(path) = &config.history_file {
        return Box::new(JsonFileStore::new(path));
    }
    match JsonFileStore::open_default() {
        Ok(store) => {
            info!(target: "tui", "history file: {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            warn!(target: "tui", "history kept in memory only: {}", e);
            Box::new(MemoryStore::default())
        }
    }
}
