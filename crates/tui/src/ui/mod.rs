use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus, LineKind};
use crate::strings::{
    build_status_line, build_stick_label, history_position, BUTTON_NEWER, BUTTON_OLDER,
    INPUT_HINT, TITLE_INPUT, TITLE_OUTPUT,
};
use crate::theme::THEME;
use cmdbar_core::Cursor;

// Two buttons plus the gaps around them.
const BUTTONS_WIDTH: u16 = 8;

pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    // The bar hugs the bottom edge; it grows upward for long input.
    let text_width = area.width.saturating_sub(2 + BUTTONS_WIDTH);
    let input_total_lines = wrap_graphemes(&app.input, text_width).len().max(1) as u16;
    app.input_visible_lines = input_total_lines.min(app.input_max_lines);
    let bar_height = app.input_visible_lines + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(bar_height),
        ])
        .split(area);

    app.output_area = Some(chunks[0]);
    app.bar_area = Some(chunks[2]);
    draw_output(f, chunks[0], app);
    draw_status(f, chunks[1], app);
    draw_bar(f, chunks[2], app);
}

fn draw_output(f: &mut Frame, area: Rect, app: &mut App) {
    let focused = matches!(app.focus, Focus::Output);
    let border_style = if focused {
        Style::default().fg(THEME.border_focus)
    } else {
        Style::default().fg(THEME.border_inactive)
    };
    let block = Block::default()
        .title(TITLE_OUTPUT)
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    app.ensure_output_wrapped(inner_width);
    let (viewport, _max_scroll, start) = app.compute_output_layout(inner_height);
    app.output_viewport = viewport as u16;

    let lines: Vec<Line> = app
        .wrap_cache
        .iter()
        .flat_map(|w| {
            let style = match w.kind {
                LineKind::Echo => Style::default()
                    .fg(THEME.echo_fg)
                    .add_modifier(Modifier::BOLD),
                LineKind::Info => Style::default().fg(THEME.info_fg),
                LineKind::Error => Style::default().fg(THEME.error_fg),
            };
            w.lines
                .iter()
                .map(move |l| Line::from(Span::styled(l.clone(), style)))
        })
        .skip(start)
        .take(viewport)
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);

    let inner = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: inner_width,
        height: inner_height,
    };
    let total = app.output_total_lines();
    if total > viewport && !inner.is_empty() {
        let mut sb_state = ScrollbarState::new(total).position(start);
        let sb = Scrollbar::default().orientation(ScrollbarOrientation::VerticalRight);
        f.render_stateful_widget(sb, inner, &mut sb_state);
    }
}

fn draw_bar(f: &mut Frame, area: Rect, app: &mut App) {
    let focused = matches!(app.focus, Focus::Input);
    let browsing = match app.history.cursor() {
        Cursor::Browsing(i) => Some(i),
        Cursor::Editing => None,
    };
    let border_style = if focused {
        Style::default().fg(THEME.border_focus)
    } else {
        Style::default().fg(THEME.border_inactive)
    };
    let title = match browsing {
        Some(i) => Span::styled(
            format!("{}[{}/{}] ", TITLE_INPUT, i + 1, app.history.entries().len()),
            Style::default().fg(THEME.browsing_fg),
        ),
        None => Span::raw(TITLE_INPUT),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(BUTTONS_WIDTH)])
        .split(inner);
    let text_area = cols[0];
    let buttons = cols[1];

    // Wrapped here, by grapheme width, so the caret below lands where the
    // text is actually drawn.
    let wrapped = wrap_graphemes(&app.input, text_area.width);
    let offset_y = (wrapped.len() as u16).saturating_sub(text_area.height.max(1));
    let para = if app.input.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            INPUT_HINT,
            Style::default().fg(THEME.hint_fg),
        )))
    } else {
        Paragraph::new(wrapped.into_iter().map(Line::from).collect::<Vec<_>>())
            .scroll((offset_y, 0))
    };
    if !text_area.is_empty() {
        f.render_widget(para, text_area);
    }

    // Buttons sit on the last row of the bar, next to the caret. A squeezed
    // bar clips them, possibly to nothing.
    let row = buttons.y + buttons.height.saturating_sub(1);
    let older = Rect::new(buttons.x + 1, row, 3, 1).intersection(buttons);
    let newer = Rect::new(buttons.x + 4, row, 3, 1).intersection(buttons);
    let can_older = match browsing {
        Some(i) => i + 1 < app.history.entries().len(),
        None => !app.history.entries().is_empty(),
    };
    let can_newer = browsing.is_some();
    app.older_button = render_button(f, older, BUTTON_OLDER, can_older);
    app.newer_button = render_button(f, newer, BUTTON_NEWER, can_newer);

    if focused && !text_area.is_empty() {
        let graphemes: Vec<&str> = app.input.graphemes(true).collect();
        let (line_idx, col) = measure_prefix_line_col(&graphemes, graphemes.len(), text_area.width);
        let x = (text_area.x + col).min(text_area.right() - 1);
        let y = (text_area.y + line_idx.saturating_sub(offset_y)).min(text_area.bottom() - 1);
        f.set_cursor_position(Position::new(x, y));
    }
}

// Returns the area the button occupies, or None when it was clipped away.
fn render_button(f: &mut Frame, area: Rect, label: &str, enabled: bool) -> Option<Rect> {
    if area.is_empty() {
        return None;
    }
    let style = if enabled {
        Style::default()
            .fg(THEME.button_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(THEME.button_disabled_fg)
    };
    f.render_widget(Paragraph::new(Span::styled(label, style)), area);
    Some(area)
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let stick = build_stick_label(app.output_scroll);
    let focus = match app.focus {
        Focus::Input => "Input",
        Focus::Output => "Console",
    };
    let browsing = match app.history.cursor() {
        Cursor::Browsing(i) => Some(i),
        Cursor::Editing => None,
    };
    let hist = history_position(browsing, app.history.entries().len());
    let tips = build_status_line(&stick, focus, &hist, area.width);
    let para = Paragraph::new(Line::from(Span::styled(
        tips,
        Style::default().fg(THEME.hint_fg),
    )));
    f.render_widget(para, area);
}

// Break `s` into rows of at most `width` columns, never splitting a grapheme.
// Uses the same rule as `measure_prefix_line_col`.
fn wrap_graphemes(s: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return vec![s.to_string()];
    }
    let mut lines = vec![String::new()];
    let mut col = 0usize;
    for g in s.graphemes(true) {
        let w = UnicodeWidthStr::width(g);
        if col + w > width as usize {
            lines.push(String::new());
            col = 0;
        }
        if let Some(last) = lines.last_mut() {
            last.push_str(g);
        }
        col += w;
    }
    lines
}

fn measure_prefix_line_col(graphemes: &[&str], upto: usize, width: u16) -> (u16, u16) {
    if width == 0 {
        return (0, 0);
    }
    let mut line = 0usize;
    let mut col = 0usize;
    for g in graphemes.iter().take(upto) {
        let w = UnicodeWidthStr::width(*g);
        if col + w > width as usize {
            line += 1;
            col = 0;
        }
        col += w;
    }
    (line as u16, col as u16)
}
