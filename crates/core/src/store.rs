use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Persistence collaborator for the submitted-command history.
///
/// Entries are always passed most recent first.
pub trait HistoryStore {
    fn load_history(&self) -> Result<Vec<String>, StoreError>;
    fn save_history(&mut self, entries: &[String]) -> Result<(), StoreError>;
}

impl<S: HistoryStore + ?Sized> HistoryStore for Box<S> {
    fn load_history(&self) -> Result<Vec<String>, StoreError> {
        (**self).load_history()
    }

    fn save_history(&mut self, entries: &[String]) -> Result<(), StoreError> {
        (**self).save_history(entries)
    }
}

/// Keeps history in memory only. Useful for tests and for running without a
/// writable data directory.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Vec<String>,
}

impl MemoryStore {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl HistoryStore for MemoryStore {
    fn load_history(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.entries.clone())
    }

    fn save_history(&mut self, entries: &[String]) -> Result<(), StoreError> {
        self.entries = entries.to_vec();
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct SavedHistory {
    history: Vec<String>,
}

/// Stores history as `{"history": [...]}` in a single JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/cmdbar/history.json`
    pub fn default_path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        Some(base.data_dir().join("cmdbar").join("history.json"))
    }

    pub fn open_default() -> Result<Self, StoreError> {
        Self::default_path()
            .map(Self::new)
            .ok_or(StoreError::NoLocation)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> StoreError {
    let path = path.to_path_buf();
    move |source| StoreError::Io { path, source }
}

impl HistoryStore for JsonFileStore {
    fn load_history(&self) -> Result<Vec<String>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read(&self.path).map_err(io_err(&self.path))?;
        let saved: SavedHistory = serde_json::from_slice(&data)?;
        Ok(saved.history)
    }

    fn save_history(&mut self, entries: &[String]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err(parent))?;
        }
        let saved = SavedHistory {
            history: entries.to_vec(),
        };
        let data = serde_json::to_vec_pretty(&saved)?;
        let mut tmp = self.path.clone();
        tmp.set_extension("json.tmp");
        {
            let mut f = fs::File::create(&tmp).map_err(io_err(&tmp))?;
            f.write_all(&data).map_err(io_err(&tmp))?;
            f.flush().map_err(io_err(&tmp))?;
        }
        fs::rename(&tmp, &self.path).map_err(io_err(&self.path))?;
        Ok(())
    }
}
