use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn centered(frame_area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);

    Rect {
        x: frame_area.x + (frame_area.width.saturating_sub(width)) / 2,
        y: frame_area.y + (frame_area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Popup anchored directly below a rect, clamped to the frame on every side.
pub fn below_anchor(frame_area: Rect, anchor: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame_area.width);
    let y = anchor.bottom().min(frame_area.bottom());
    let x = anchor
        .x
        .min(frame_area.right().saturating_sub(width))
        .max(frame_area.x);

    Rect {
        x,
        y,
        width,
        height: height.min(frame_area.bottom().saturating_sub(y)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
