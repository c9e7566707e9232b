//! GPIO pin abstractions
//!
//! Provides the digital input trait the encoder samples through, plus an
//! adapter for pins that only implement `embedded-hal` 1.0.

use embedded_hal::digital::InputPin as HalInputPin;

/// Internal resistor configuration for an input pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// Floating input; the encoder board provides its own resistors
    #[default]
    None,
    /// Pull-up; an open switch reads high
    Up,
    /// Pull-down; an open switch reads low
    Down,
}

/// Digital input pin
///
/// Implementations handle the hardware register access for the specific
/// chip. Reads are infallible: a backend that can fail must decide what
/// level to report instead (see [`HalInput`]).
pub trait InputPin {
    /// Configure the internal pull resistor
    ///
    /// Called once when the pin is handed to an encoder.
    fn configure(&mut self, pull: Pull);

    /// Check if the pin reads high (logic 1)
    ///
    /// Takes `&mut self` because some backends need mutable access to read.
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

/// Adapter from an `embedded-hal` input to [`InputPin`]
///
/// A failed read reports the last level that was read successfully, so
/// the decoders see no change and produce no event. Failures are counted.
pub struct HalInput<P> {
    pin: P,
    last_level: bool,
    faults: u32,
}

impl<P: HalInputPin> HalInput<P> {
    /// Wrap a pin
    ///
    /// `idle_level` is reported until the first successful read. The pull
    /// resistor must already be set when the pin was created.
    pub fn new(pin: P, idle_level: bool) -> Self {
        Self {
            pin,
            last_level: idle_level,
            faults: 0,
        }
    }

    /// Number of reads that failed since construction
    pub fn faults(&self) -> u32 {
        self.faults
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: HalInputPin> InputPin for HalInput<P> {
    fn configure(&mut self, _pull: Pull) {
        // embedded-hal 1.0 has no pull configuration
    }

    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(level) => {
                self.last_level = level;
                level
            }
            Err(_) => {
                self.faults = self.faults.wrapping_add(1);
                #[cfg(feature = "defmt")]
                defmt::warn!("Input read failed ({} total), holding last level", self.faults);
                self.last_level
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    /// Scripted embedded-hal pin: `None` entries fail
    struct ScriptedPin {
        reads: [Option<bool>; 4],
        next: usize,
    }

    impl ErrorType for ScriptedPin {
        type Error = ErrorKind;
    }

    impl HalInputPin for ScriptedPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            let read = self.reads[self.next % self.reads.len()];
            self.next += 1;
            read.ok_or(ErrorKind::Other)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    #[test]
    fn test_successful_reads_pass_through() {
        let pin = ScriptedPin {
            reads: [Some(true), Some(false), Some(true), Some(false)],
            next: 0,
        };
        let mut input = HalInput::new(pin, true);

        assert!(input.is_high());
        assert!(input.is_low());
        assert!(input.is_high());
        assert!(!input.is_high());
        assert_eq!(input.faults(), 0);
    }

    #[test]
    fn test_failed_read_holds_last_level() {
        let pin = ScriptedPin {
            reads: [Some(false), None, None, Some(true)],
            next: 0,
        };
        let mut input = HalInput::new(pin, true);

        assert!(!input.is_high());
        // Two failures keep reporting low
        assert!(!input.is_high());
        assert!(!input.is_high());
        assert_eq!(input.faults(), 2);

        assert!(input.is_high());
    }

    #[test]
    fn test_failure_before_first_read_reports_idle_level() {
        let pin = ScriptedPin {
            reads: [None, None, None, None],
            next: 0,
        };
        let mut input = HalInput::new(pin, true);
        input.configure(Pull::Up);

        assert!(input.is_high());
        assert_eq!(input.faults(), 1);
        assert_eq!(input.into_inner().next, 1);
    }
}
