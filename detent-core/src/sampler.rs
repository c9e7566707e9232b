//! Signal sampler
//!
//! Owns the three encoder inputs and gates how often they are read.
//! Sampling faster than the contacts settle buys nothing, so every
//! downstream decoder runs at most once per sample interval.

use detent_hal::{elapsed_ms, InputPin, Pull};

/// Levels of all three inputs captured in one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// Button level (high = open)
    pub button: bool,
    /// Rotation channel A
    pub clk: bool,
    /// Rotation channel B
    pub dt: bool,
}

impl RawSample {
    /// Sample of an encoder at rest: everything pulled high
    pub const IDLE: Self = Self {
        button: true,
        clk: true,
        dt: true,
    };

    /// Packed as `button << 2 | clk << 1 | dt`
    pub fn bits(&self) -> u8 {
        ((self.button as u8) << 2) | ((self.clk as u8) << 1) | self.dt as u8
    }
}

/// Pins and sample gate
pub struct Sampler<A, B, S> {
    clk: A,
    dt: B,
    sw: S,
    last_sample_ms: u32,
}

impl<A: InputPin, B: InputPin, S: InputPin> Sampler<A, B, S> {
    /// Take ownership of the pins and configure them
    ///
    /// The rotation channels float (encoder boards carry their own
    /// resistors); the button is pulled up and reads low when pressed.
    pub fn new(mut clk: A, mut dt: B, mut sw: S) -> Self {
        clk.configure(Pull::None);
        dt.configure(Pull::None);
        sw.configure(Pull::Up);

        Self {
            clk,
            dt,
            sw,
            last_sample_ms: 0,
        }
    }

    /// Time of the last pass that read the pins (ms)
    pub fn last_sample_ms(&self) -> u32 {
        self.last_sample_ms
    }

    /// Read all pins if at least `interval_ms` passed since the last read
    pub fn sample(&mut self, now_ms: u32, interval_ms: u8) -> Option<RawSample> {
        if elapsed_ms(now_ms, self.last_sample_ms) < interval_ms as u32 {
            return None;
        }
        self.last_sample_ms = now_ms;

        Some(RawSample {
            button: self.sw.is_high(),
            clk: self.clk.is_high(),
            dt: self.dt.is_high(),
        })
    }

    /// Release the pins
    pub fn release(self) -> (A, B, S) {
        (self.clk, self.dt, self.sw)
    }
}
