//! Encoder timing configuration
//!
//! All three knobs can be changed at any time; the new values apply from
//! the next sampling pass.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default minimum time between sampling passes (ms)
pub const DEFAULT_SAMPLE_INTERVAL_MS: u8 = 1;

/// Default settle window for every debounce step (ms)
pub const DEFAULT_SHORT_PRESS_MS: u8 = 50;

/// Default press duration before a long press is declared (ms)
pub const DEFAULT_LONG_PRESS_MS: u16 = 1000;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Long-press threshold must be longer than the settle window
    LongPressNotAfterShortPress,
}

/// Timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EncoderConfig {
    /// Minimum time between sampling passes (ms)
    pub sample_interval_ms: u8,
    /// Settle window a level must hold before debounce advances (ms)
    pub short_press_ms: u8,
    /// Press duration that turns a press into a long press (ms)
    pub long_press_ms: u16,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
            short_press_ms: DEFAULT_SHORT_PRESS_MS,
            long_press_ms: DEFAULT_LONG_PRESS_MS,
        }
    }
}

impl EncoderConfig {
    /// Check the timings are consistent
    ///
    /// Advisory only: the encoder runs with any combination, including the
    /// ones the individual setters can produce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.long_press_ms <= self.short_press_ms as u16 {
            return Err(ConfigError::LongPressNotAfterShortPress);
        }
        Ok(())
    }
}
