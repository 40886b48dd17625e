use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use ratatui::style::Style;
use ratatui::widgets::ListState;
use tui_textarea::TextArea;

use super::display_value::derive_value;

/// Grace period between a blur and the surface actually closing.
///
/// Moving focus from the field into the surface blurs the field first; the
/// close must not land before the surface's own focus event arrives, or the
/// surface flickers shut mid-handoff. One event-loop tick is the minimum
/// delay the runtime gives us.
pub const CLOSE_GRACE: Duration = Duration::from_millis(50);

/// Visibility of the suggestion surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Closed,
    Open,
    /// Blurred while open. Closes once the deadline passes unless a focus
    /// event cancels it first.
    ClosingPending { deadline: Instant },
}

type ChangeCallback = Box<dyn FnMut(&[String])>;

/// State of the subject multi-select widget
pub struct SelectState {
    /// Raw typed text (single-line editing buffer)
    pub textarea: TextArea<'static>,
    /// Hint shown while the field is empty and nothing is selected
    pub placeholder: String,
    /// Ignore edits when set
    pub disabled: bool,
    /// Apply suggestion replies only if they are not older than the newest
    /// reply already applied
    pub guard_stale_replies: bool,
    /// Scroll/selection state of the rendered suggestion list
    pub surface_list: ListState,
    surface: Surface,
    /// Subject name -> selected flag; an absent key means not selected
    selection: BTreeMap<String, bool>,
    /// Relevance-ordered suggestions from the newest applied query
    suggestions: Vec<String>,
    /// Highlighted row of the surface
    highlighted: usize,
    /// Id handed out to the most recent query
    last_issued: u64,
    /// Id of the newest reply applied so far
    last_applied: u64,
    on_change: Option<ChangeCallback>,
}

impl SelectState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());

        Self {
            textarea,
            placeholder: String::new(),
            disabled: false,
            guard_stale_replies: true,
            surface_list: ListState::default(),
            surface: Surface::Closed,
            selection: BTreeMap::new(),
            suggestions: Vec::new(),
            highlighted: 0,
            last_issued: 0,
            last_applied: 0,
            on_change: None,
        }
    }

    /// Register the parent-supplied change callback. It is invoked
    /// synchronously on every toggle with the complete current selection.
    pub fn on_change(&mut self, callback: impl FnMut(&[String]) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Whether the surface is visible. A pending close still counts as
    /// visible until the deadline fires.
    pub fn is_open(&self) -> bool {
        self.surface != Surface::Closed
    }

    /// Focus the field or the surface: opens the suggestion surface and
    /// cancels any pending close. Idempotent.
    pub fn focus(&mut self) {
        self.surface = Surface::Open;
    }

    /// Blur: schedule a deferred close one grace period out. A blur while
    /// already closed is a no-op; a re-blur replaces the pending deadline.
    pub fn blur(&mut self, now: Instant) {
        if self.surface != Surface::Closed {
            self.surface = Surface::ClosingPending {
                deadline: now + CLOSE_GRACE,
            };
        }
    }

    /// Fire a pending close once its deadline has passed.
    pub fn on_tick(&mut self, now: Instant) {
        if let Surface::ClosingPending { deadline } = self.surface
            && now >= deadline
        {
            self.surface = Surface::Closed;
        }
    }

    /// Flip the selected flag for `subject` and notify the parent with the
    /// complete current selection.
    pub fn toggle(&mut self, subject: &str) {
        let flag = self.selection.entry(subject.to_string()).or_insert(false);
        *flag = !*flag;

        let selected = self.selected_subjects();
        if let Some(callback) = self.on_change.as_mut() {
            callback(&selected);
        }
    }

    /// Whether `subject` is currently selected. Absent means not selected.
    pub fn is_selected(&self, subject: &str) -> bool {
        self.selection.get(subject).copied().unwrap_or(false)
    }

    /// All currently selected subject names.
    pub fn selected_subjects(&self) -> Vec<String> {
        self.selection
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(subject, _)| subject.clone())
            .collect()
    }

    /// Current raw typed text.
    pub fn raw_text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// The value the rendered field shows, derived from the selection and
    /// the raw text. Never authoritative on its own.
    pub fn display_value(&self) -> String {
        derive_value(&self.selection, self.raw_text())
    }

    /// Hand out the id for the next suggestion query.
    pub fn begin_query(&mut self) -> u64 {
        self.last_issued += 1;
        self.last_issued
    }

    /// Replace the suggestion list with a query reply.
    ///
    /// The list is fully replaced, never merged. When the staleness guard is
    /// on, a reply older than the newest one already applied is discarded;
    /// with the guard off the latest-arriving reply wins. Returns whether
    /// the reply was applied.
    pub fn apply_suggestions(&mut self, names: Vec<String>, request_id: u64) -> bool {
        if self.guard_stale_replies && request_id < self.last_applied {
            log::debug!(
                "discarding stale suggestion reply {} (newest applied: {})",
                request_id,
                self.last_applied
            );
            return false;
        }

        self.last_applied = request_id;
        self.suggestions = names;
        self.highlighted = self
            .highlighted
            .min(self.suggestions.len().saturating_sub(1));
        true
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn highlighted_suggestion(&self) -> Option<&String> {
        self.suggestions.get(self.highlighted)
    }

    /// Move the highlight down, wrapping at the end.
    pub fn highlight_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.highlighted = (self.highlighted + 1) % self.suggestions.len();
    }

    /// Move the highlight up, wrapping at the start.
    pub fn highlight_prev(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.highlighted = if self.highlighted == 0 {
            self.suggestions.len() - 1
        } else {
            self.highlighted - 1
        };
    }
}

impl Default for SelectState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "select_state_tests.rs"]
mod select_state_tests;
