//! Search worker thread
//!
//! Runs suggestion queries in a background thread so the UI loop never
//! blocks on the index. Requests arrive on one channel and replies go back
//! on another, tagged with the request id that produced them. There is no
//! cancellation: stale replies are filtered by the widget at apply time.

use std::sync::mpsc::{Receiver, Sender};

use super::provider::SearchProvider;

/// Request messages sent to the search worker thread
#[derive(Debug)]
pub enum SearchRequest {
    /// Run one query round trip
    Query {
        query: String,
        /// Unique id for this request, echoed on the reply
        request_id: u64,
    },
}

/// Reply messages received from the search worker thread
#[derive(Debug)]
pub enum SearchReply {
    /// Hit names in relevance order
    Hits {
        names: Vec<String>,
        request_id: u64,
    },
    /// The round trip failed
    Error {
        message: String,
        request_id: u64,
    },
}

/// Spawn the search worker thread.
///
/// The thread processes requests in arrival order until the request channel
/// closes, and exits early if the reply side hangs up.
pub fn spawn_worker(
    provider: SearchProvider,
    request_rx: Receiver<SearchRequest>,
    reply_tx: Sender<SearchReply>,
) {
    std::thread::spawn(move || worker_loop(provider, request_rx, reply_tx));
}

fn worker_loop(
    provider: SearchProvider,
    request_rx: Receiver<SearchRequest>,
    reply_tx: Sender<SearchReply>,
) {
    while let Ok(request) = request_rx.recv() {
        match request {
            SearchRequest::Query { query, request_id } => {
                let reply = match provider.search(&query) {
                    Ok(names) => SearchReply::Hits { names, request_id },
                    Err(e) => SearchReply::Error {
                        message: e.to_string(),
                        request_id,
                    },
                };
                if reply_tx.send(reply).is_err() {
                    // Main thread disconnected, stop working
                    return;
                }
            }
        }
    }

    log::debug!("search worker thread shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
