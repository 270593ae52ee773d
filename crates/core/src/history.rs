//! Command history navigation for a single-line input bar.
//!
//! Entries are kept most-recent-first. The navigator never touches a text
//! field itself: callers feed it edits and navigation requests and then ask
//! [`HistoryNavigator::display`] what the field should show.

use std::collections::HashSet;

/// Where the navigator currently points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Not browsing; the input shows the draft.
    #[default]
    Editing,
    /// Browsing; the input shows `entries[index]`.
    Browsing(usize),
}

/// Outcome of [`HistoryNavigator::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub text: String,
    /// True when the stored history was modified and should be persisted.
    pub history_changed: bool,
}

#[derive(Clone, Debug, Default)]
pub struct HistoryNavigator {
    entries: Vec<String>,
    cursor: Cursor,
    draft: String,
    limit: Option<usize>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a navigator from previously stored entries (most recent first).
    /// Later duplicates are dropped and the limit is applied.
    pub fn with_entries(entries: Vec<String>, limit: Option<usize>) -> Self {
        let mut seen: HashSet<String> = HashSet::with_capacity(entries.len());
        let deduped: Vec<String> = entries
            .into_iter()
            .filter(|e| seen.insert(e.clone()))
            .collect();
        let mut nav = Self {
            entries: deduped,
            cursor: Cursor::Editing,
            draft: String::new(),
            limit,
        };
        nav.enforce_limit();
        nav
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_browsing(&self) -> bool {
        matches!(self.cursor, Cursor::Browsing(_))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text the input field should currently show.
    pub fn display(&self) -> &str {
        match self.cursor {
            Cursor::Editing => &self.draft,
            Cursor::Browsing(i) => &self.entries[i],
        }
    }

    /// Record a free edit. Ignored while browsing so the draft survives a
    /// round trip through history.
    pub fn on_edit(&mut self, text: &str) {
        if let Cursor::Editing = self.cursor {
            self.draft.clear();
            self.draft.push_str(text);
        }
    }

    pub fn move_older(&mut self) -> &str {
        let next = match self.cursor {
            Cursor::Editing => 0,
            Cursor::Browsing(i) => i + 1,
        };
        if next < self.entries.len() {
            self.cursor = Cursor::Browsing(next);
        }
        self.display()
    }

    pub fn move_newer(&mut self) -> &str {
        self.cursor = match self.cursor {
            Cursor::Editing | Cursor::Browsing(0) => Cursor::Editing,
            Cursor::Browsing(i) => Cursor::Browsing(i - 1),
        };
        self.display()
    }

    /// Finalize an input line. Non-empty text moves to the front of the
    /// history; the cursor and draft are reset either way.
    pub fn submit(&mut self, text: &str) -> Submission {
        let mut history_changed = false;
        if !text.is_empty() {
            let already_first = self.entries.first().is_some_and(|e| e == text);
            if !already_first {
                self.entries.retain(|e| e != text);
                self.entries.insert(0, text.to_string());
                self.enforce_limit();
                history_changed = true;
            }
        }
        self.cursor = Cursor::Editing;
        self.draft.clear();
        Submission {
            text: text.to_string(),
            history_changed,
        }
    }

    /// Forget every entry and return to editing an empty line.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = Cursor::Editing;
        self.draft.clear();
    }

    fn enforce_limit(&mut self) {
        if let Some(max) = self.limit {
            self.entries.truncate(max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nav(entries: &[&str]) -> HistoryNavigator {
        HistoryNavigator::with_entries(entries.iter().map(|s| s.to_string()).collect(), None)
    }

    #[test]
    fn distinct_submissions_are_most_recent_first() {
        let mut h = HistoryNavigator::new();
        for s in ["a", "b", "c", "d"] {
            h.submit(s);
        }
        assert_eq!(h.entries(), ["d", "c", "b", "a"]);
    }

    #[test]
    fn resubmitting_moves_entry_to_front() {
        let mut h = nav(&["c", "b", "a"]);
        let sub = h.submit("a");
        assert!(sub.history_changed);
        assert_eq!(h.entries(), ["a", "c", "b"]);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn resubmitting_front_entry_is_not_a_change() {
        let mut h = nav(&["ls", "pwd"]);
        let sub = h.submit("ls");
        assert!(!sub.history_changed);
        assert_eq!(h.entries(), ["ls", "pwd"]);
    }

    #[test]
    fn older_visits_every_entry_then_stops() {
        let mut h = nav(&["one", "two", "three"]);
        let mut seen = Vec::new();
        for _ in 0..h.len() {
            seen.push(h.move_older().to_string());
        }
        assert_eq!(seen, ["one", "two", "three"]);
        assert_eq!(h.move_older(), "three");
        assert_eq!(h.cursor(), Cursor::Browsing(2));
    }

    #[test]
    fn older_on_empty_history_is_noop() {
        let mut h = HistoryNavigator::new();
        h.on_edit("draft");
        assert_eq!(h.move_older(), "draft");
        assert_eq!(h.cursor(), Cursor::Editing);
    }

    #[test]
    fn newer_returns_to_draft_from_any_depth() {
        let mut h = nav(&["one", "two", "three"]);
        h.on_edit("typed");
        h.move_older();
        h.move_older();
        h.move_older();
        assert_eq!(h.move_newer(), "two");
        assert_eq!(h.move_newer(), "one");
        assert_eq!(h.move_newer(), "typed");
        assert_eq!(h.cursor(), Cursor::Editing);
        assert_eq!(h.move_newer(), "typed");
        assert_eq!(h.cursor(), Cursor::Editing);
    }

    #[test]
    fn edits_while_browsing_leave_draft_alone() {
        let mut h = nav(&["ls"]);
        h.on_edit("p");
        h.on_edit("pw");
        assert_eq!(h.draft(), "pw");
        h.move_older();
        h.on_edit("lsx");
        assert_eq!(h.draft(), "pw");
        assert_eq!(h.display(), "ls");
    }

    #[test]
    fn scenario_type_and_submit() {
        let mut h = HistoryNavigator::new();
        h.on_edit("ls");
        let sub = h.submit("ls");
        assert_eq!(sub.text, "ls");
        assert_eq!(h.entries(), ["ls"]);
        assert_eq!(h.display(), "");
    }

    #[test]
    fn scenario_walk_two_entries() {
        let mut h = nav(&["ls", "pwd"]);
        assert_eq!(h.move_older(), "ls");
        assert_eq!(h.move_older(), "pwd");
        assert_eq!(h.move_older(), "pwd");
    }

    #[test]
    fn scenario_draft_restored() {
        let mut h = nav(&["ls"]);
        h.on_edit("pw");
        assert_eq!(h.move_older(), "ls");
        assert_eq!(h.move_newer(), "pw");
    }

    #[test]
    fn scenario_empty_submit() {
        let mut h = nav(&["ls"]);
        h.on_edit("x");
        h.move_older();
        let sub = h.submit("");
        assert_eq!(sub.text, "");
        assert!(!sub.history_changed);
        assert_eq!(h.entries(), ["ls"]);
        assert_eq!(h.cursor(), Cursor::Editing);
        assert_eq!(h.draft(), "");
    }

    #[test]
    fn submitting_while_browsing_resets_state() {
        let mut h = nav(&["ls", "pwd"]);
        h.on_edit("half");
        let shown = h.move_older().to_string();
        h.move_older();
        let shown_second = h.display().to_string();
        h.submit(&shown_second);
        assert_eq!(shown, "ls");
        assert_eq!(h.entries(), ["pwd", "ls"]);
        assert_eq!(h.display(), "");
        assert!(!h.is_browsing());
    }

    #[test]
    fn limit_drops_oldest() {
        let mut h = HistoryNavigator::with_entries(Vec::new(), Some(2));
        h.submit("a");
        h.submit("b");
        h.submit("c");
        assert_eq!(h.entries(), ["c", "b"]);
    }

    #[test]
    fn loading_normalises_duplicates_and_limit() {
        let stored = vec!["a", "b", "a", "c", "b", "d"]
            .into_iter()
            .map(String::from)
            .collect();
        let h = HistoryNavigator::with_entries(stored, Some(3));
        assert_eq!(h.entries(), ["a", "b", "c"]);
    }

    #[test]
    fn loading_large_unbounded_history_dedupes() {
        let stored: Vec<String> = (0..50_000)
            .map(|i| format!("cmd {}", i % 25_000))
            .collect();
        let h = HistoryNavigator::with_entries(stored, None);
        assert_eq!(h.len(), 25_000);
        assert_eq!(h.entries()[0], "cmd 0");
        assert_eq!(h.entries()[24_999], "cmd 24999");
    }

    #[test]
    fn clear_forgets_everything() {
        let mut h = nav(&["a", "b"]);
        h.move_older();
        h.clear();
        assert!(h.is_empty());
        assert_eq!(h.cursor(), Cursor::Editing);
        assert_eq!(h.move_older(), "");
    }
}
