use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, Focus};

/// Handle a key while the subject field has focus.
pub fn handle_field_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Hand focus to the surface. The field blurs first, so the grace
        // period is what keeps the surface from flickering shut here.
        KeyCode::Down | KeyCode::Tab => {
            if app.select.is_open() && !app.select.suggestions().is_empty() {
                app.select.blur(Instant::now());
                app.focus = Focus::Surface;
                app.select.focus();
            }
        }
        KeyCode::Esc => {
            app.select.blur(Instant::now());
        }
        // Single-line field: swallow Enter rather than inserting a newline
        KeyCode::Enter => {}
        _ => {
            if app.select.disabled {
                return;
            }
            // Typing counts as focusing the field
            app.select.focus();
            let before = app.select.raw_text().to_string();
            if app.select.textarea.input(key) && app.select.raw_text() != before {
                let query = app.select.raw_text().to_string();
                app.issue_query(query);
            }
        }
    }
}

/// Handle a key while the suggestion surface has focus.
pub fn handle_surface_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up if app.select.highlighted() == 0 => {
            app.select.blur(Instant::now());
            app.focus = Focus::Field;
            app.select.focus();
        }
        KeyCode::Up => app.select.highlight_prev(),
        KeyCode::Down => app.select.highlight_next(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(subject) = app.select.highlighted_suggestion().cloned() {
                app.select.toggle(&subject);
            }
        }
        KeyCode::Esc | KeyCode::Tab => {
            // Back to the field with no follow-up focus on the surface: the
            // deferred close runs out and the surface closes
            app.select.blur(Instant::now());
            app.focus = Focus::Field;
        }
        _ => {}
    }
}
