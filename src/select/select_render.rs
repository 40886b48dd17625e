//! Rendering for the subject field, its chips, and the suggestion surface.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::widgets::popup;

/// Outer height of the subject field: borders plus a chips row and an
/// input row.
pub const FIELD_HEIGHT: u16 = 4;

/// Visible rows of the suggestion surface before it scrolls
const SURFACE_MAX_ROWS: u16 = 8;

pub fn render_field(app: &App, frame: &mut Frame, area: Rect) {
    // A non-empty derived value means the field presents as filled even
    // though the user may not have typed anything
    let filled = !app.select.display_value().is_empty();
    let border_style = if filled || app.focus == Focus::Field {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Subjects ")
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let chips_area = Rect { height: 1, ..inner };
    frame.render_widget(Paragraph::new(chip_line(app, inner.width)), chips_area);

    if inner.height < 2 {
        return;
    }
    let input_area = Rect {
        y: inner.y + 1,
        height: 1,
        ..inner
    };

    let raw_empty = app.select.raw_text().is_empty();
    if raw_empty && app.select.selected_subjects().is_empty() {
        // Empty field: placeholder hint
        let hint = Line::from(Span::styled(
            app.select.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(hint), input_area);
    } else if raw_empty && app.focus != Focus::Field {
        // Idle field with a selection: the derived value (a non-printing
        // placeholder) keeps the field presenting as filled
        frame.render_widget(Paragraph::new(app.select.display_value()), input_area);
    } else {
        frame.render_widget(&app.select.textarea, input_area);
    }
}

/// Selected subjects as chips, truncated to the available width.
fn chip_line(app: &App, width: u16) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;

    for subject in app.select.selected_subjects() {
        let label = format!(" {subject} \u{2715} ");
        let chip_width = label.width() + 1;
        if used + chip_width > width as usize {
            break;
        }
        used += chip_width;
        spans.push(Span::styled(
            label,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

/// Render the suggestion surface anchored below the field.
pub fn render_surface(app: &mut App, frame: &mut Frame, anchor: Rect) {
    if !app.select.is_open() || app.select.suggestions().is_empty() {
        return;
    }

    let rows = (app.select.suggestions().len() as u16).min(SURFACE_MAX_ROWS);
    let area = popup::below_anchor(frame.area(), anchor, anchor.width, rows + 2);
    if area.height < 3 {
        return;
    }
    popup::clear_area(frame, area);

    let items: Vec<ListItem> = app
        .select
        .suggestions()
        .iter()
        .map(|subject| {
            let mark = if app.select.is_selected(subject) {
                "[x] "
            } else {
                "[ ] "
            };
            ListItem::new(Line::from(vec![Span::raw(mark), Span::raw(subject.clone())]))
        })
        .collect();

    let highlight = if app.focus == Focus::Surface {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(highlight);

    let highlighted = app.select.highlighted();
    app.select.surface_list.select(Some(highlighted));
    frame.render_stateful_widget(list, area, &mut app.select.surface_list);
}

#[cfg(test)]
#[path = "select_render_tests.rs"]
mod select_render_tests;
