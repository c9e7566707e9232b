//! RP2040-specific HAL for the detent encoder decoder
//!
//! This crate provides RP2040 implementations of the shared `detent-hal`
//! traits on top of embassy:
//!
//! - GPIO inputs with runtime pull configuration
//! - Millisecond clock from the embassy time driver

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;

pub use clock::EmbassyClock;
pub use gpio::EncoderInput;

// Re-export shared traits from detent-hal for convenience
pub use detent_hal::{InputPin, MonotonicClock, Pull};
