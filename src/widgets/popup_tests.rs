//! Tests for popup geometry helpers

use ratatui::layout::Rect;

use super::{below_anchor, centered};

#[test]
fn centered_popup_is_centered() {
    let frame = Rect::new(0, 0, 80, 24);
    let popup = centered(frame, 40, 10);

    assert_eq!(popup, Rect::new(20, 7, 40, 10));
}

#[test]
fn centered_popup_clamps_to_frame() {
    let frame = Rect::new(0, 0, 20, 6);
    let popup = centered(frame, 40, 10);

    assert_eq!(popup.width, 20);
    assert_eq!(popup.height, 6);
}

#[test]
fn below_anchor_sits_under_the_anchor() {
    let frame = Rect::new(0, 0, 80, 24);
    let anchor = Rect::new(4, 2, 40, 4);
    let popup = below_anchor(frame, anchor, 40, 8);

    assert_eq!(popup.x, 4);
    assert_eq!(popup.y, 6);
    assert_eq!(popup.width, 40);
    assert_eq!(popup.height, 8);
}

#[test]
fn below_anchor_clamps_height_to_remaining_rows() {
    let frame = Rect::new(0, 0, 80, 10);
    let anchor = Rect::new(0, 2, 40, 4);
    let popup = below_anchor(frame, anchor, 40, 20);

    assert_eq!(popup.y, 6);
    assert_eq!(popup.height, 4);
}

#[test]
fn below_anchor_shifts_left_when_anchor_overflows() {
    let frame = Rect::new(0, 0, 30, 24);
    let anchor = Rect::new(20, 2, 20, 4);
    let popup = below_anchor(frame, anchor, 25, 8);

    assert_eq!(popup.x, 5);
    assert_eq!(popup.right(), 30);
}
