use textwrap::{wrap, Options};
use unicode_width::UnicodeWidthStr;

use super::{App, OutputLine, WrappedLine};

/// Oldest output lines are dropped past this many.
pub const MAX_OUTPUT_LINES: usize = 10_000;

impl App {
    pub fn push_output(&mut self, line: OutputLine) {
        self.output.push(line);
        if self.output.len() > MAX_OUTPUT_LINES {
            let excess = self.output.len() - MAX_OUTPUT_LINES;
            self.output.drain(..excess);
            let cached = excess.min(self.wrap_cache.len());
            self.wrap_cache.drain(..cached);
        }
        if self.stick_to_bottom {
            self.output_scroll = 0;
        }
        self.dirty = true;
    }

    pub fn ensure_output_wrapped(&mut self, width: u16) {
        let width = width.max(1);
        let stale = self.wrap_cache.len() != self.output.len()
            || self
                .output
                .iter()
                .zip(&self.wrap_cache)
                .any(|(l, w)| l.text.len() != w.text_len);
        if self.wrap_width == width && !stale {
            return;
        }
        self.wrap_cache = self
            .output
            .iter()
            .map(|l| Self::wrap_line(l, width, &self.prompt))
            .collect();
        self.wrap_width = width;
    }

    pub fn output_total_lines(&self) -> usize {
        self.wrap_cache.iter().map(|w| w.lines.len()).sum()
    }

    /// Returns (viewport, max_scroll, first visible line) for an inner height.
    /// Also clamps `output_scroll` so it never runs past the top.
    pub fn compute_output_layout(&mut self, inner_height: u16) -> (usize, usize, usize) {
        let viewport = inner_height.max(1) as usize;
        let total = self.output_total_lines();
        let max_scroll = total.saturating_sub(viewport);
        if self.stick_to_bottom {
            self.output_scroll = 0;
        }
        let reachable = u16::try_from(max_scroll).unwrap_or(u16::MAX);
        self.output_scroll = self.output_scroll.min(reachable);
        let start = max_scroll - self.output_scroll as usize;
        (viewport, max_scroll, start)
    }

    fn wrap_line(l: &OutputLine, width: u16, prompt: &str) -> WrappedLine {
        let indent = " ".repeat(UnicodeWidthStr::width(prompt));
        let opts = Options::new(width as usize).subsequent_indent(&indent);
        let mut lines: Vec<String> = wrap(&l.text, opts)
            .into_iter()
            .map(|c| c.into_owned())
            .collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        WrappedLine {
            kind: l.kind,
            text_len: l.text.len(),
            lines,
        }
    }
}
