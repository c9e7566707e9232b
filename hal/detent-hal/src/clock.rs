//! Millisecond clock abstraction
//!
//! Timestamps are 32-bit milliseconds that wrap after ~49.7 days. Only
//! differences are meaningful, and they must be taken with [`elapsed_ms`].

/// Monotonic millisecond time source
pub trait MonotonicClock {
    /// Current time in milliseconds
    ///
    /// Must never go backwards except by wrapping past `u32::MAX`.
    fn now_ms(&self) -> u32;
}

/// Milliseconds from `since` to `now`, tolerating one wraparound
#[inline]
pub fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}
