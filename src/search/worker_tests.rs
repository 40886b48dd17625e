//! Tests for the search worker thread

use std::sync::mpsc;
use std::time::Duration;

use super::*;
use crate::search::{BuiltinIndex, SearchProvider};

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

fn spawn_builtin_worker() -> (mpsc::Sender<SearchRequest>, mpsc::Receiver<SearchReply>) {
    let (request_tx, request_rx) = mpsc::channel();
    let (reply_tx, reply_rx) = mpsc::channel();
    spawn_worker(
        SearchProvider::Builtin(BuiltinIndex::default()),
        request_rx,
        reply_tx,
    );
    (request_tx, reply_rx)
}

#[test]
fn replies_echo_the_request_id() {
    let (request_tx, reply_rx) = spawn_builtin_worker();

    request_tx
        .send(SearchRequest::Query {
            query: "math".to_string(),
            request_id: 7,
        })
        .unwrap();

    match reply_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        SearchReply::Hits { names, request_id } => {
            assert_eq!(request_id, 7);
            assert!(names.iter().any(|n| n == "Math"));
        }
        other => panic!("unexpected reply: {other:?}"),
    }
}

#[test]
fn requests_are_answered_in_arrival_order() {
    let (request_tx, reply_rx) = spawn_builtin_worker();

    for (query, request_id) in [("art", 1), ("music", 2)] {
        request_tx
            .send(SearchRequest::Query {
                query: query.to_string(),
                request_id,
            })
            .unwrap();
    }

    let first = reply_rx.recv_timeout(RECV_TIMEOUT).unwrap();
    let second = reply_rx.recv_timeout(RECV_TIMEOUT).unwrap();

    assert!(matches!(first, SearchReply::Hits { request_id: 1, .. }));
    assert!(matches!(second, SearchReply::Hits { request_id: 2, .. }));
}

#[test]
fn empty_query_means_no_filter() {
    let (request_tx, reply_rx) = spawn_builtin_worker();

    request_tx
        .send(SearchRequest::Query {
            query: String::new(),
            request_id: 1,
        })
        .unwrap();

    match reply_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        SearchReply::Hits { names, .. } => assert!(names.len() > 10),
        other => panic!("unexpected reply: {other:?}"),
    }
}
