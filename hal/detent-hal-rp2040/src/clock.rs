//! Millisecond clock backed by the embassy time driver

use embassy_time::Instant;

use detent_hal::MonotonicClock;

/// Clock reading `embassy_time::Instant`
///
/// The 64-bit tick count is truncated to 32-bit milliseconds; the encoder
/// only ever compares wrapping differences.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
