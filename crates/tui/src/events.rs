use std::time::{Duration, Instant};

use crossterm::event::{self, Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use tracing::debug;

use crate::{
    app::{App, Focus},
    ui,
};

pub fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    let mut last_draw = Instant::now();
    let heartbeat = Duration::from_millis(500);
    loop {
        if app.dirty || last_draw.elapsed() >= heartbeat {
            terminal.draw(|f| ui::draw(f, app))?;
            app.dirty = false;
            last_draw = Instant::now();
        }
        if matches!(app.focus, Focus::Input) {
            let _ = terminal.show_cursor();
        } else {
            let _ = terminal.hide_cursor();
        }

        if event::poll(Duration::from_millis(120))? {
            match event::read()? {
                Event::Key(key) => app.on_key(key),
                Event::Paste(s) => {
                    app.focus_input();
                    app.insert_text(&s);
                }
                // The bar is laid out from the bottom edge on every draw, so a
                // redraw is all a resize needs.
                Event::Resize(w, h) => {
                    debug!(target: "tui", "resize {}x{}", w, h);
                    app.dirty = true;
                }
                Event::Mouse(me) => on_mouse(app, me),
                _ => {}
            }
        }

        app.on_tick();

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn inside(area: Option<Rect>, x: u16, y: u16) -> bool {
    area.is_some_and(|a| x >= a.x && x < a.x + a.width && y >= a.y && y < a.y + a.height)
}

pub fn on_mouse(app: &mut App, me: MouseEvent) {
    let (x, y) = (me.column, me.row);
    match me.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if inside(app.older_button, x, y) {
                app.focus_input();
                app.history_older();
            } else if inside(app.newer_button, x, y) {
                app.focus_input();
                app.history_newer();
            } else if inside(app.bar_area, x, y) {
                app.focus_input();
            } else if inside(app.output_area, x, y) {
                app.focus = Focus::Output;
                app.dirty = true;
            }
        }
        MouseEventKind::ScrollUp if inside(app.output_area, x, y) => app.scroll_output_up(3),
        MouseEventKind::ScrollDown if inside(app.output_area, x, y) => app.scroll_output_down(3),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{app_with, type_str};
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn click(app: &mut App, column: u16, row: u16) {
        on_mouse(
            app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    #[test]
    fn buttons_navigate_history() {
        let mut app = app_with(&["ls", "pwd"]);
        app.older_button = Some(Rect::new(10, 20, 3, 1));
        app.newer_button = Some(Rect::new(14, 20, 3, 1));
        type_str(&mut app, "draft");
        click(&mut app, 11, 20);
        assert_eq!(app.input, "ls");
        click(&mut app, 11, 20);
        assert_eq!(app.input, "pwd");
        click(&mut app, 15, 20);
        click(&mut app, 15, 20);
        assert_eq!(app.input, "draft");
    }

    #[test]
    fn clicking_output_moves_focus() {
        let mut app = app_with(&[]);
        app.output_area = Some(Rect::new(0, 0, 80, 10));
        click(&mut app, 5, 5);
        assert_eq!(app.focus, Focus::Output);
    }
}
