use tracing::{debug, warn};

use crate::history::{Cursor, HistoryNavigator};
use crate::store::HistoryStore;

/// A navigator bound to its persistence collaborator for one console session.
///
/// Store failures never reach the caller: a failed load starts from an empty
/// history and a failed save is dropped, both with a warning in the log.
pub struct HistorySession<S> {
    navigator: HistoryNavigator,
    store: S,
}

impl<S: HistoryStore> HistorySession<S> {
    pub fn open(store: S, limit: Option<usize>) -> Self {
        let entries = match store.load_history() {
            Ok(entries) => entries,
            Err(e) => {
                warn!(target: "history", "load failed, starting empty: {}", e);
                Vec::new()
            }
        };
        debug!(target: "history", "loaded {} entries", entries.len());
        Self {
            navigator: HistoryNavigator::with_entries(entries, limit),
            store,
        }
    }

    pub fn navigator(&self) -> &HistoryNavigator {
        &self.navigator
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn entries(&self) -> &[String] {
        self.navigator.entries()
    }

    pub fn cursor(&self) -> Cursor {
        self.navigator.cursor()
    }

    pub fn display(&self) -> &str {
        self.navigator.display()
    }

    pub fn on_edit(&mut self, text: &str) {
        self.navigator.on_edit(text);
    }

    pub fn move_older(&mut self) -> &str {
        self.navigator.move_older()
    }

    pub fn move_newer(&mut self) -> &str {
        self.navigator.move_newer()
    }

    /// Record `text` and hand it back for dispatch. Persists only when the
    /// history actually changed.
    pub fn submit(&mut self, text: &str) -> String {
        let submission = self.navigator.submit(text);
        if submission.history_changed {
            self.persist();
        }
        submission.text
    }

    pub fn clear(&mut self) {
        self.navigator.clear();
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save_history(self.navigator.entries()) {
            warn!(target: "history", "save failed, dropping: {}", e);
        }
    }
}
