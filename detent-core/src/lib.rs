//! Board-agnostic rotary encoder decoding
//!
//! Turns the three raw inputs of a mechanical quadrature encoder with a
//! push-button into gesture events, rejecting contact bounce:
//!
//! - Signal sampler (rate-limited pin reads)
//! - Rotation decoder (full Gray-code cycle matching)
//! - Button decoder (settle window + long-press threshold)
//! - Gesture state machine and handler registry
//! - Timing configuration
//!
//! ```
//! use detent_core::{Rotary, RotaryEncoder};
//! use detent_hal::{InputPin, Pull};
//!
//! struct Level(bool);
//!
//! impl InputPin for Level {
//!     fn configure(&mut self, _pull: Pull) {}
//!     fn is_high(&mut self) -> bool {
//!         self.0
//!     }
//! }
//!
//! fn on_rotate(direction: Rotary) {
//!     assert_eq!(direction.delta().abs(), 1);
//! }
//!
//! let mut encoder = RotaryEncoder::new(Level(true), Level(true), Level(true));
//! encoder.handlers_mut().set_handle_rotate(on_rotate);
//!
//! // Idle inputs produce nothing
//! assert!(!encoder.sample(1));
//! assert!(encoder.poll(2).is_empty());
//! assert_eq!(encoder.rotary(), Rotary::Stopped);
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod decode;
pub mod encoder;
pub mod gesture;
pub mod sampler;

pub use config::{ConfigError, EncoderConfig};
pub use decode::{Button, DebouncePhase, Rotary};
pub use encoder::RotaryEncoder;
pub use gesture::{GestureEvent, GestureState, Handlers, PassEvents};
pub use sampler::RawSample;
