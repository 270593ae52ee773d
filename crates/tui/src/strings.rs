// Centralized UI strings and labels. ASCII-friendly by default.

use unicode_width::UnicodeWidthStr;

pub const INPUT_HINT: &str = "Type a command, Enter to submit";

// UI block titles (keep surrounding spaces for visual padding)
pub const TITLE_OUTPUT: &str = " Console ";
pub const TITLE_INPUT: &str = " Input ";

// History navigation controls shown inside the input bar.
pub const BUTTON_OLDER: &str = "[^]";
pub const BUTTON_NEWER: &str = "[v]";

pub const HISTORY_EMPTY: &str = "(history is empty)";
pub const HISTORY_CLEARED: &str = "history cleared";

pub const STICK_BOTTOM: &str = "Bottom";

pub fn build_stick_label(scroll: u16) -> String {
    if scroll == 0 {
        STICK_BOTTOM.to_string()
    } else {
        format!("+{} lines", scroll)
    }
}

// Position in history for the status bar: "new" while editing, "3/10" while browsing.
pub fn history_position(browsing: Option<usize>, total: usize) -> String {
    match browsing {
        Some(i) => format!("Hist:{}/{}", i + 1, total),
        None => format!("Hist:new/{}", total),
    }
}

// Build the status bar line, dropping trailing segments that don't fit.
pub fn build_status_line(stick: &str, focus: &str, history: &str, max_width: u16) -> String {
    let mut segments: Vec<String> = vec![format!("[{}][{}]", stick, focus), history.to_string()];
    // Hints ordered by importance; will be appended if space allows.
    let hints: [&str; 4] = [
        "Enter: submit",
        "Up/Down: history",
        "Tab: focus; PgUp/PgDn: scroll",
        "Esc: quit",
    ];
    for h in hints {
        segments.push(h.to_string());
    }

    let sep = "  |  ";
    let mut out = String::new();
    let mut used = 0usize;
    for (i, seg) in segments.iter().enumerate() {
        let segw = UnicodeWidthStr::width(seg.as_str());
        let addw = segw
            + if i == 0 {
                0
            } else {
                UnicodeWidthStr::width(sep)
            };
        if used + addw > max_width as usize {
            break;
        }
        if i > 0 {
            out.push_str(sep);
            used += UnicodeWidthStr::width(sep);
        }
        out.push_str(seg);
        used += segw;
    }
    out
}

pub fn help_lines_ascii() -> &'static [&'static str] {
    &[
        "Keys",
        "  Enter: Submit    Esc/Ctrl-C: Quit    Tab: Switch focus",
        "  Up/Down or Ctrl-P/Ctrl-N: Older/newer history entry (click [^]/[v] too)",
        "  Backspace: Delete last char    Ctrl-U: Clear line",
        "  PgUp/PgDn, mouse wheel: Scroll output    Ctrl-Home/End: Top/bottom",
        "Commands",
        "  /history: List history    /history clear: Forget history",
        "  /clear: Clear output    /help: This text    /quit: Exit",
    ]
}
