use tracing::info;

use crate::strings::{help_lines_ascii, HISTORY_CLEARED, HISTORY_EMPTY};

use super::{App, OutputLine};

impl App {
    /// Consumer of submitted lines: echo, then run builtins.
    pub fn dispatch(&mut self, text: &str) {
        self.push_output(OutputLine::echo(format!("{}{}", self.prompt, text)));
        let s = text.trim();
        let Some(rest) = s.strip_prefix('/') else {
            return;
        };
        let mut parts = rest.splitn(2, char::is_whitespace);
        let cmd = parts.next().unwrap_or("").to_lowercase();
        let arg = parts.next().unwrap_or("").trim();
        match (cmd.as_str(), arg) {
            ("clear", _) => {
                self.output.clear();
                self.output_scroll = 0;
            }
            ("history", "") => self.list_history(),
            ("history", "clear") => {
                self.history.clear();
                info!(target: "tui", "history cleared");
                self.push_output(OutputLine::info(HISTORY_CLEARED));
            }
            ("help", _) => {
                for line in help_lines_ascii() {
                    self.push_output(OutputLine::info(*line));
                }
            }
            ("quit", _) | ("exit", _) => self.should_quit = true,
            _ => self.push_output(OutputLine::error(format!("unknown command: {}", s))),
        }
    }

    fn list_history(&mut self) {
        if self.history.entries().is_empty() {
            self.push_output(OutputLine::info(HISTORY_EMPTY));
            return;
        }
        let lines: Vec<OutputLine> = self
            .history
            .entries()
            .iter()
            .enumerate()
            .map(|(i, e)| OutputLine::info(format!("{:>4}  {}", i + 1, e)))
            .collect();
        for l in lines {
            self.push_output(l);
        }
    }
}
