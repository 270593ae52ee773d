use std::time::Instant;

use cmdbar_core::{Config, HistorySession, HistoryStore};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use tracing::{debug, info};

pub mod commands;
pub mod history;
pub mod input;
pub mod output;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Echo,
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub struct OutputLine {
    pub kind: LineKind,
    pub text: String,
}

impl OutputLine {
    pub fn echo<S: Into<String>>(s: S) -> Self {
        Self {
            kind: LineKind::Echo,
            text: s.into(),
        }
    }
    pub fn info<S: Into<String>>(s: S) -> Self {
        Self {
            kind: LineKind::Info,
            text: s.into(),
        }
    }
    pub fn error<S: Into<String>>(s: S) -> Self {
        Self {
            kind: LineKind::Error,
            text: s.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Output,
    Input,
}

pub struct WrappedLine {
    pub kind: LineKind,
    pub text_len: usize,
    pub lines: Vec<String>,
}

pub type Session = HistorySession<Box<dyn HistoryStore>>;

pub struct App {
    pub output: Vec<OutputLine>,
    pub input: String,
    pub history: Session,
    pub prompt: String,
    pub focus: Focus,
    focus_deadline: Option<Instant>,
    pub should_quit: bool,
    pub output_scroll: u16,
    pub stick_to_bottom: bool,
    pub output_viewport: u16,
    pub output_area: Option<Rect>,
    pub bar_area: Option<Rect>,
    pub older_button: Option<Rect>,
    pub newer_button: Option<Rect>,
    pub wrap_width: u16,
    pub wrap_cache: Vec<WrappedLine>,
    pub input_visible_lines: u16,
    pub input_max_lines: u16,
    pub dirty: bool,
}

impl App {
    pub fn new(config: &Config, store: Box<dyn HistoryStore>) -> Self {
        let history = HistorySession::open(store, config.history_limit);
        let (focus, focus_deadline) = if config.focus_delay.is_zero() {
            (Focus::Input, None)
        } else {
            (Focus::Output, Some(Instant::now() + config.focus_delay))
        };
        info!(target: "tui", "console ready: {} history entries", history.entries().len());
        Self {
            output: vec![OutputLine::info(
                "Type a command and press Enter. Up/Down: history; Tab: focus; Esc: quit. /help for more.",
            )],
            input: String::new(),
            history,
            prompt: config.prompt.clone(),
            focus,
            focus_deadline,
            should_quit: false,
            output_scroll: 0,
            stick_to_bottom: true,
            output_viewport: 0,
            output_area: None,
            bar_area: None,
            older_button: None,
            newer_button: None,
            wrap_width: 0,
            wrap_cache: Vec::new(),
            input_visible_lines: 1,
            input_max_lines: 4,
            dirty: true,
        }
    }

    /// Finalize the current line: record it, reset the bar, hand the text to
    /// the console.
    pub fn submit(&mut self) {
        let line = std::mem::take(&mut self.input);
        let text = self.history.submit(&line);
        self.input = self.history.display().to_string();
        info!(target: "tui", "submit: {} chars, history={}", text.len(), self.history.entries().len());
        self.dispatch(&text);
        self.stick_to_bottom = true;
        self.output_scroll = 0;
        self.dirty = true;
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
        self.focus_deadline = None;
        self.dirty = true;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Output,
            Focus::Output => Focus::Input,
        };
        self.focus_deadline = None;
        self.dirty = true;
    }

    pub fn scroll_output_up(&mut self, n: u16) {
        self.output_scroll = self.output_scroll.saturating_add(n);
        self.stick_to_bottom = false;
        self.dirty = true;
    }

    pub fn scroll_output_down(&mut self, n: u16) {
        self.output_scroll = self.output_scroll.saturating_sub(n);
        if self.output_scroll == 0 {
            self.stick_to_bottom = true;
        }
        self.dirty = true;
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let on_input = matches!(self.focus, Focus::Input);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Enter => {
                debug!(target: "tui", "on_key: Enter => submit");
                self.focus_input();
                self.submit();
            }
            KeyCode::Up if on_input => self.history_older(),
            KeyCode::Down if on_input => self.history_newer(),
            KeyCode::Char('p') if ctrl => self.history_older(),
            KeyCode::Char('n') if ctrl => self.history_newer(),
            KeyCode::Up => self.scroll_output_up(1),
            KeyCode::Down => self.scroll_output_down(1),
            KeyCode::PageUp => self.scroll_output_up(self.output_viewport.max(1)),
            KeyCode::PageDown => self.scroll_output_down(self.output_viewport.max(1)),
            KeyCode::Home if ctrl => self.scroll_output_up(u16::MAX),
            KeyCode::End if ctrl => self.scroll_output_down(u16::MAX),
            KeyCode::Backspace if on_input => self.delete_left_grapheme(),
            KeyCode::Char('u') if ctrl && on_input => self.clear_input(),
            KeyCode::Char(ch) if !ctrl => {
                if !on_input {
                    self.focus_input();
                }
                let mut buf = [0u8; 4];
                self.insert_text(ch.encode_utf8(&mut buf));
            }
            _ => {}
        }
        self.dirty = true;
    }

    pub fn on_tick(&mut self) {
        if let Some(deadline) = self.focus_deadline {
            if Instant::now() >= deadline {
                debug!(target: "tui", "focus delay elapsed, focusing input bar");
                self.focus_input();
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use cmdbar_core::{Cursor, MemoryStore};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    pub(crate) fn app_with(entries: &[&str]) -> App {
        let config = Config {
            focus_delay: Duration::ZERO,
            ..Config::default()
        };
        let store = MemoryStore::new(entries.iter().map(|s| s.to_string()).collect());
        App::new(&config, Box::new(store))
    }

    pub(crate) fn press(app: &mut App, code: KeyCode) {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub(crate) fn type_str(app: &mut App, s: &str) {
        for ch in s.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn typing_and_enter_records_history() {
        let mut app = app_with(&[]);
        type_str(&mut app, "ls");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.history.entries(), ["ls"]);
        assert_eq!(app.input, "");
        assert_eq!(app.output.last().map(|l| l.text.as_str()), Some("> ls"));
    }

    #[test]
    fn up_down_walks_history_and_restores_draft() {
        let mut app = app_with(&["ls", "pwd"]);
        type_str(&mut app, "pw");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.input, "ls");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.input, "pwd");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.input, "pwd");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.input, "pw");
        assert_eq!(app.history.cursor(), Cursor::Editing);
    }

    #[test]
    fn edits_while_browsing_do_not_touch_draft() {
        let mut app = app_with(&["ls"]);
        type_str(&mut app, "pw");
        press(&mut app, KeyCode::Up);
        type_str(&mut app, " -la");
        assert_eq!(app.input, "ls -la");
        assert_eq!(app.history.navigator().draft(), "pw");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.history.entries(), ["ls -la", "ls"]);
    }

    #[test]
    fn empty_enter_is_still_dispatched() {
        let mut app = app_with(&["ls"]);
        let before = app.output.len();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.history.entries(), ["ls"]);
        assert_eq!(app.output.len(), before + 1);
        assert_eq!(app.output.last().map(|l| l.text.as_str()), Some("> "));
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app_with(&[]);
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn focus_waits_for_delay() {
        let config = Config {
            focus_delay: Duration::from_secs(3600),
            ..Config::default()
        };
        let mut app = App::new(&config, Box::new(MemoryStore::default()));
        assert_eq!(app.focus, Focus::Output);
        app.on_tick();
        assert_eq!(app.focus, Focus::Output);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.focus, Focus::Input);
        assert_eq!(app.input, "x");
    }

    #[test]
    fn ctrl_u_only_clears_when_input_focused() {
        let mut app = app_with(&[]);
        type_str(&mut app, "keep me");
        press(&mut app, KeyCode::Tab);
        app.on_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "keep me");

        press(&mut app, KeyCode::Tab);
        app.on_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.input, "");
    }

    #[test]
    fn arrows_scroll_output_when_unfocused() {
        let mut app = app_with(&["ls"]);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Output);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.input, "");
        assert_eq!(app.output_scroll, 1);
        assert!(!app.stick_to_bottom);
        press(&mut app, KeyCode::Down);
        assert!(app.stick_to_bottom);
    }
}
