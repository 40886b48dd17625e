//! Tests for the overlay rendering

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use super::*;
use crate::checkmark::CheckmarkState;

fn buffer_text(buffer: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn draw(state: &CheckmarkState) -> String {
    let backend = TestBackend::new(60, 16);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| render_overlay(state, frame))
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

#[test]
fn inactive_overlay_draws_nothing() {
    let state = CheckmarkState::new();

    let text = draw(&state);

    assert!(text.chars().all(|c| c == ' ' || c == '\n'));
}

#[test]
fn active_overlay_shows_the_label() {
    let mut state = CheckmarkState::new();
    state.activate("Saved");

    let text = draw(&state);

    assert!(text.contains("Saved"));
    assert!(!text.contains('\u{2713}'));
}

#[test]
fn checked_overlay_shows_the_check() {
    let mut state = CheckmarkState::new();
    state.activate("Saved");
    state.check();

    let text = draw(&state);

    assert!(text.contains('\u{2713}'));
}
