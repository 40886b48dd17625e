use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::CheckmarkState;
use crate::widgets::popup;

const SPINNER_FRAMES: [&str; 4] = ["\u{25d0}", "\u{25d3}", "\u{25d1}", "\u{25d2}"];

const OVERLAY_WIDTH: u16 = 32;
const OVERLAY_HEIGHT: u16 = 7;

/// Render the overlay centered over the whole frame. No-op while inactive.
pub fn render_overlay(state: &CheckmarkState, frame: &mut Frame) {
    if !state.is_active() {
        return;
    }

    let area = popup::centered(frame.area(), OVERLAY_WIDTH, OVERLAY_HEIGHT);
    popup::clear_area(frame, area);

    let mark = if state.is_checked() {
        let style = if state.draw_fraction() < 1.0 {
            Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        };
        Span::styled("\u{2713}", style)
    } else {
        let frame_idx = usize::from(state.step()) % SPINNER_FRAMES.len();
        Span::styled(
            SPINNER_FRAMES[frame_idx],
            Style::default().fg(Color::Cyan),
        )
    };

    let lines = vec![
        Line::default(),
        Line::from(mark),
        Line::default(),
        Line::from(Span::styled(
            state.label().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let content = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );

    frame.render_widget(content, area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
