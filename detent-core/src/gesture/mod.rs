//! Gesture fusion
//!
//! Combines rotation and button into one gesture state and routes the
//! resulting events to registered handlers.

pub mod events;
pub mod handlers;
pub mod machine;

pub use events::{GestureEvent, PassEvents, MAX_EVENTS_PER_PASS};
pub use handlers::{ButtonHandler, Handlers, RotaryHandler};
pub use machine::GestureState;
