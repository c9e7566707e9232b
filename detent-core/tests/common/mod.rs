//! Simulated encoder board shared by the integration tests

#![allow(dead_code)]

use std::cell::Cell;

use detent_core::RotaryEncoder;
use detent_hal::{InputPin, Pull};

/// Input pin reading a shared level
pub struct SharedPin<'a>(pub &'a Cell<bool>);

impl InputPin for SharedPin<'_> {
    fn configure(&mut self, _pull: Pull) {}

    fn is_high(&mut self) -> bool {
        self.0.get()
    }
}

pub type TestEncoder<'a> = RotaryEncoder<SharedPin<'a>, SharedPin<'a>, SharedPin<'a>>;

/// Pin levels of one encoder, idle (all high) by default
pub struct Board {
    pub clk: Cell<bool>,
    pub dt: Cell<bool>,
    pub sw: Cell<bool>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            clk: Cell::new(true),
            dt: Cell::new(true),
            sw: Cell::new(true),
        }
    }

    pub fn encoder(&self) -> TestEncoder<'_> {
        RotaryEncoder::new(
            SharedPin(&self.clk),
            SharedPin(&self.dt),
            SharedPin(&self.sw),
        )
    }

    /// Set CLK/DT from a `0b{clk}{dt}` pair
    pub fn set_pair(&self, pair: u8) {
        self.clk.set(pair & 0b10 != 0);
        self.dt.set(pair & 0b01 != 0);
    }

    pub fn press(&self, pressed: bool) {
        self.sw.set(!pressed);
    }

    pub fn idle(&self) {
        self.set_pair(0b11);
        self.press(false);
    }
}

pub const CCW: [u8; 4] = [0b01, 0b00, 0b10, 0b11];
pub const CW: [u8; 4] = [0b10, 0b00, 0b01, 0b11];
