use tracing::debug;

use super::App;

impl App {
    // Replace the bar contents with the next older entry, if any.
    pub fn history_older(&mut self) {
        self.input = self.history.move_older().to_string();
        debug!(target: "tui", "history older: {:?}", self.history.cursor());
        self.dirty = true;
    }

    pub fn history_newer(&mut self) {
        self.input = self.history.move_newer().to_string();
        debug!(target: "tui", "history newer: {:?}", self.history.cursor());
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{app_with, type_str};
    use cmdbar_core::Cursor;
    use pretty_assertions::assert_eq;

    #[test]
    fn older_on_empty_history_keeps_draft() {
        let mut app = app_with(&[]);
        type_str(&mut app, "echo");
        app.history_older();
        assert_eq!(app.input, "echo");
        assert_eq!(app.history.cursor(), Cursor::Editing);
    }

    #[test]
    fn newer_while_editing_is_noop() {
        let mut app = app_with(&["ls"]);
        type_str(&mut app, "e");
        app.history_newer();
        assert_eq!(app.input, "e");
    }
}
