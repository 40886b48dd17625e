use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::App;
use crate::checkmark;
use crate::select;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1),                    // Title
            Constraint::Length(select::FIELD_HEIGHT), // Subject field
            Constraint::Min(1),                       // Status
            Constraint::Length(1),                    // Key hints
        ])
        .split(frame.area());

        let field_area = layout[1];

        self.render_title(frame, layout[0]);
        select::render_field(self, frame, field_area);
        self.render_status(frame, layout[2]);
        self.render_hints(frame, layout[3]);

        // The surface and the overlay draw over the base layout
        select::render_surface(self, frame, field_area);
        checkmark::render_overlay(&self.checkmark, frame);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(" subsel: pick your subjects")
            .style(Style::default().fg(Color::Cyan));
        frame.render_widget(title, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let selected = self.last_change.borrow();
        let line = if selected.is_empty() {
            Line::from(Span::styled(
                " Nothing selected yet",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(vec![
                Span::raw(" Selected: "),
                Span::styled(selected.join(", "), Style::default().fg(Color::White)),
            ])
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let hints = Paragraph::new(
            " Type to search | Down: suggestions | Space: toggle | Ctrl+S: save | Ctrl+C: quit",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hints, area);
    }
}
