use unicode_segmentation::UnicodeSegmentation;

use super::App;

impl App {
    /// Append text at the end of the bar. Line breaks become spaces: the bar
    /// holds a single command line.
    pub fn insert_text(&mut self, s: &str) {
        let cleaned: String = s
            .chars()
            .filter(|c| *c != '\r')
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        if cleaned.is_empty() {
            return;
        }
        self.input.push_str(&cleaned);
        self.input_edited();
    }

    pub fn delete_left_grapheme(&mut self) {
        if let Some((idx, _)) = self.input.grapheme_indices(true).next_back() {
            self.input.truncate(idx);
            self.input_edited();
        }
    }

    pub fn clear_input(&mut self) {
        if self.input.is_empty() {
            return;
        }
        self.input.clear();
        self.input_edited();
    }

    fn input_edited(&mut self) {
        self.history.on_edit(&self.input);
        self.dirty = true;
    }
}
