//! Interactive subject multi-select with live search suggestions.
//!
//! The widget couples a chip-annotated text field with a suggestion surface
//! fed by an external search index. `select` owns the interaction state
//! machine and the selection set, `search` the provider adapter and its
//! worker thread, `checkmark` the confirmation overlay, and `app` a small
//! form application embedding all of it.

pub mod app;
pub mod backend;
pub mod checkmark;
pub mod config;
pub mod error;
pub mod search;
pub mod select;
pub mod widgets;
