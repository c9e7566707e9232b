//! Detent Hardware Abstraction Layer
//!
//! This crate defines the capabilities the encoder decoder consumes from
//! the board: digital input pins and a millisecond clock. Chip-specific
//! crates implement them, so the decoding logic in `detent-core` never
//! touches a register.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (detent-fw, etc.)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  detent-core (sampling + decoding)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  detent-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ detent-hal-   │       │  any embedded │
//! │    rp2040     │       │  -hal 1.0 pin │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input with pull configuration
//! - [`clock::MonotonicClock`] - Wrapping millisecond timestamps

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use clock::{elapsed_ms, MonotonicClock};
pub use gpio::{HalInput, InputPin, Pull};
