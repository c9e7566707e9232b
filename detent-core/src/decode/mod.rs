//! Signal decoders
//!
//! Both decoders consume one raw sample per pass and are independent of
//! each other. Their outputs are fused by [`crate::gesture`].

pub mod button;
pub mod rotary;

pub use button::{Button, ButtonDecoder, DebouncePhase};
pub use rotary::{Rotary, RotaryDecoder};
