use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender};
use std::time::Instant;

use crate::checkmark::CheckmarkState;
use crate::config::Config;
use crate::search::{SearchReply, SearchRequest};
use crate::select::SelectState;

/// Which control has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field,
    Surface,
}

/// Application state
pub struct App {
    pub select: SelectState,
    pub checkmark: CheckmarkState,
    pub focus: Focus,
    pub should_quit: bool,
    /// Latest payload delivered through the widget's change callback
    pub last_change: Rc<RefCell<Vec<String>>>,
    request_tx: Sender<SearchRequest>,
    reply_rx: Receiver<SearchReply>,
}

impl App {
    /// Create a new App instance wired to a running search worker
    pub fn new(
        config: &Config,
        request_tx: Sender<SearchRequest>,
        reply_rx: Receiver<SearchReply>,
    ) -> Self {
        let mut select = SelectState::new();
        select.placeholder = config.ui.placeholder.clone();
        select.disabled = config.ui.disabled;

        let last_change = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&last_change);
        select.on_change(move |subjects| {
            *sink.borrow_mut() = subjects.to_vec();
        });

        let mut app = Self {
            select,
            checkmark: CheckmarkState::new(),
            focus: Focus::Field,
            should_quit: false,
            last_change,
            request_tx,
            reply_rx,
        };

        // Populate the surface for the default "no filter" query up front
        app.issue_query(String::new());
        app
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Issue a suggestion query to the worker.
    pub fn issue_query(&mut self, query: String) {
        let request_id = self.select.begin_query();
        let request = SearchRequest::Query { query, request_id };
        if self.request_tx.send(request).is_err() {
            log::debug!("search worker gone; dropping query {request_id}");
        }
    }

    /// Drain worker replies. A failed round trip keeps the previous
    /// suggestion list rather than blanking the surface.
    pub fn poll_search(&mut self) {
        while let Ok(reply) = self.reply_rx.try_recv() {
            match reply {
                SearchReply::Hits { names, request_id } => {
                    self.select.apply_suggestions(names, request_id);
                }
                SearchReply::Error {
                    message,
                    request_id,
                } => {
                    log::debug!("suggestion query {request_id} failed: {message}");
                }
            }
        }
    }

    /// Advance time-driven state.
    pub fn on_tick(&mut self, now: Instant) {
        self.select.on_tick(now);
        self.checkmark.on_tick();
    }

    /// Confirm the current selection: show the overlay, checked.
    pub fn submit(&mut self) {
        let count = self.select.selected_subjects().len();
        let label = if count == 1 {
            "1 subject saved".to_string()
        } else {
            format!("{count} subjects saved")
        };
        self.checkmark.activate(label);
        self.checkmark.check();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver, Sender};

    use super::*;

    fn test_app() -> (App, Receiver<SearchRequest>, Sender<SearchReply>) {
        let (request_tx, request_rx) = mpsc::channel();
        let (reply_tx, reply_rx) = mpsc::channel();
        let app = App::new(&Config::default(), request_tx, reply_rx);
        (app, request_rx, reply_tx)
    }

    #[test]
    fn initialization_issues_the_default_query() {
        let (app, request_rx, _reply_tx) = test_app();

        assert_eq!(app.focus, Focus::Field);
        assert!(!app.should_quit());
        assert!(!app.select.is_open());

        match request_rx.try_recv().unwrap() {
            SearchRequest::Query { query, request_id } => {
                assert_eq!(query, "");
                assert_eq!(request_id, 1);
            }
        }
    }

    #[test]
    fn poll_search_applies_hits() {
        let (mut app, _request_rx, reply_tx) = test_app();

        reply_tx
            .send(SearchReply::Hits {
                names: vec!["Math".to_string(), "Mathematics".to_string()],
                request_id: 1,
            })
            .unwrap();
        app.poll_search();

        assert_eq!(
            app.select.suggestions(),
            ["Math".to_string(), "Mathematics".to_string()]
        );
    }

    #[test]
    fn failed_query_keeps_the_previous_suggestions() {
        let (mut app, _request_rx, reply_tx) = test_app();

        reply_tx
            .send(SearchReply::Hits {
                names: vec!["Math".to_string()],
                request_id: 1,
            })
            .unwrap();
        app.poll_search();

        app.issue_query("chem".to_string());
        reply_tx
            .send(SearchReply::Error {
                message: "timed out".to_string(),
                request_id: 2,
            })
            .unwrap();
        app.poll_search();

        assert_eq!(app.select.suggestions(), ["Math".to_string()]);
    }

    #[test]
    fn change_callback_records_the_full_selection() {
        let (mut app, _request_rx, _reply_tx) = test_app();

        app.select.toggle("Math");

        assert_eq!(*app.last_change.borrow(), vec!["Math".to_string()]);
    }

    #[test]
    fn submit_activates_a_checked_overlay() {
        let (mut app, _request_rx, _reply_tx) = test_app();
        app.select.toggle("Math");

        app.submit();

        assert!(app.checkmark.is_active());
        assert!(app.checkmark.is_checked());
        assert_eq!(app.checkmark.label(), "1 subject saved");
    }
}
