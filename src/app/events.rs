use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};

use super::state::{App, Focus};
use crate::select;

/// Interval between ticks when no input arrives. Also paces the deferred
/// close and the overlay animation.
pub const TICK_RATE: Duration = Duration::from_millis(50);

impl App {
    /// Wait up to `timeout` for input, then advance timers and drain worker
    /// replies.
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                _ => {}
            }
        }

        self.on_tick(Instant::now());
        self.poll_search();
        Ok(())
    }

    /// Handle key press events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return;
        }

        // Not a global key, delegate to the focused control
        match self.focus {
            Focus::Field => select::handle_field_key(self, key),
            Focus::Surface => select::handle_surface_key(self, key),
        }
    }

    /// Handle global keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // The overlay blocks all other input while visible
        if self.checkmark.is_active() {
            match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.checkmark.dismiss(),
                _ => {}
            }
            return true;
        }

        // Ctrl+C: exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Ctrl+S: save the current selection
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit();
            return true;
        }

        false
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
