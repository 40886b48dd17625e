//! Subject multi-select widget
//!
//! A chip-annotated text field with a suggestion surface fed by the search
//! provider. The state machine owns the surface visibility (including the
//! deferred close that debounces focus/blur races), the selection set, and
//! the staleness guard for suggestion replies.

mod display_value;
mod select_events;
mod select_render;
mod select_state;

pub use display_value::{FILLED_PLACEHOLDER, derive_value};
pub use select_events::{handle_field_key, handle_surface_key};
pub use select_render::{FIELD_HEIGHT, render_field, render_surface};
pub use select_state::{CLOSE_GRACE, SelectState, Surface};
