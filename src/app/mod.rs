mod events;
mod render;
mod state;

// Re-export public types
pub use events::TICK_RATE;
pub use state::{App, Focus};
