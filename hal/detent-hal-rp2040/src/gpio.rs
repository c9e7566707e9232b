//! GPIO inputs for encoder pins

use embassy_rp::gpio::{self, Input};
use embassy_rp::Peri;

use detent_hal::{InputPin, Pull};

/// Encoder input pin on an RP2040 GPIO
pub struct EncoderInput<'d> {
    pin: Input<'d>,
}

impl<'d> EncoderInput<'d> {
    /// Take a GPIO as a floating input
    ///
    /// The encoder configures the final pull when it takes the pin.
    pub fn new(pin: Peri<'d, impl gpio::Pin>) -> Self {
        Self {
            pin: Input::new(pin, gpio::Pull::None),
        }
    }

    /// Access the underlying embassy input
    pub fn inner(&mut self) -> &mut Input<'d> {
        &mut self.pin
    }
}

fn to_embassy(pull: Pull) -> gpio::Pull {
    match pull {
        Pull::None => gpio::Pull::None,
        Pull::Up => gpio::Pull::Up,
        Pull::Down => gpio::Pull::Down,
    }
}

impl InputPin for EncoderInput<'_> {
    fn configure(&mut self, pull: Pull) {
        self.pin.set_pull(to_embassy(pull));
    }

    fn is_high(&mut self) -> bool {
        self.pin.is_high()
    }
}
