//! Push-button decoder
//!
//! Debounce and hold detection run on a six-phase chain. Any edge on the
//! raw level snaps the chain to the first phase of the matching family and
//! restarts the settle timer. While the level stays put, the chain advances
//! one phase per pass once the settle window has elapsed:
//!
//! ```text
//!  press:    110 ──▶ 100 ──▶ 000        (switchdown, pressed, holddown/held)
//!  release:  001 ──▶ 011 ──▶ 111        (switchup/holdup, released)
//! ```
//!
//! The low bit of a phase code is the debounced pin level. The button is
//! active low, so the release family ends in 1.

use detent_hal::elapsed_ms;

use crate::config::EncoderConfig;

/// Reported button condition
///
/// Latched: it keeps its value across passes until the decoder moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Press has settled (reported for one pass)
    Switchdown,
    /// Press is held, long-press threshold not reached yet
    Pressed,
    /// Long-press threshold reached (reported for one pass)
    Holddown,
    /// Short press released
    Switchup,
    /// Long press released
    Holdup,
    /// Release has settled
    #[default]
    Released,
    /// Long press still held
    Held,
}

impl Button {
    /// Pressed and settled, but not yet a long press
    pub fn is_pressed_settled(&self) -> bool {
        matches!(self, Button::Pressed)
    }

    /// Anything after the settled press: the long-hold and release family
    pub fn is_past_pressed(&self) -> bool {
        matches!(
            self,
            Button::Holddown | Button::Switchup | Button::Holdup | Button::Released | Button::Held
        )
    }

    /// One of the two values marking the end of a press
    pub fn is_release_edge(&self) -> bool {
        matches!(self, Button::Switchup | Button::Holdup)
    }
}

/// Position in the debounce chain
///
/// The discriminant is the 3-bit phase code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DebouncePhase {
    /// Idle, released and settled
    Released = 0b111,
    /// Level went high, settling
    ReleaseEdge = 0b001,
    /// Release reported, waiting one more step
    ReleaseSettled = 0b011,
    /// Level went low, settling
    PressEdge = 0b110,
    /// Press reported
    PressSettled = 0b100,
    /// Long press reported
    Held = 0b000,
}

impl DebouncePhase {
    /// 3-bit phase code
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Debounced pin level of this phase (true = high = released)
    pub fn level(self) -> bool {
        self.bits() & 0b001 != 0
    }
}

/// Button decoder state
#[derive(Debug, Clone)]
pub struct ButtonDecoder {
    phase: DebouncePhase,
    /// Time of the last raw edge (ms)
    last_transition_ms: u32,
    state: Button,
}

impl Default for ButtonDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonDecoder {
    /// Create a decoder in the released state
    pub fn new() -> Self {
        Self {
            phase: DebouncePhase::Released,
            last_transition_ms: 0,
            state: Button::Released,
        }
    }

    /// Current phase in the debounce chain
    pub fn phase(&self) -> DebouncePhase {
        self.phase
    }

    /// Currently reported condition
    pub fn state(&self) -> Button {
        self.state
    }

    /// Feed one sample of the raw button level
    ///
    /// `level` is the pin level: high when the button is open. Returns the
    /// reported condition, which is unchanged when nothing advanced.
    pub fn decode(&mut self, level: bool, now_ms: u32, config: &EncoderConfig) -> Button {
        if level != self.phase.level() {
            // Raw edge: restart settling in the family of the new level
            self.phase = if self.phase.level() {
                DebouncePhase::PressEdge
            } else {
                DebouncePhase::ReleaseEdge
            };
            self.last_transition_ms = now_ms;
            return self.state;
        }

        let stable_ms = elapsed_ms(now_ms, self.last_transition_ms);
        if stable_ms <= config.short_press_ms as u32 {
            return self.state;
        }

        match self.phase {
            DebouncePhase::PressEdge => {
                self.phase = DebouncePhase::PressSettled;
                self.state = Button::Switchdown;
            }
            DebouncePhase::PressSettled => {
                if self.state == Button::Pressed && stable_ms > config.long_press_ms as u32 {
                    self.phase = DebouncePhase::Held;
                    self.state = Button::Holddown;
                } else {
                    self.state = Button::Pressed;
                }
            }
            DebouncePhase::Held => {
                self.state = Button::Held;
            }
            DebouncePhase::ReleaseEdge => {
                self.phase = DebouncePhase::ReleaseSettled;
                self.state = match self.state {
                    Button::Held | Button::Holddown => Button::Holdup,
                    _ => Button::Switchup,
                };
            }
            DebouncePhase::ReleaseSettled => {
                self.phase = DebouncePhase::Released;
                self.state = Button::Released;
            }
            DebouncePhase::Released => {}
        }

        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRESSED: bool = false;
    const OPEN: bool = true;

    fn config() -> EncoderConfig {
        EncoderConfig {
            sample_interval_ms: 1,
            short_press_ms: 50,
            long_press_ms: 1000,
        }
    }

    #[test]
    fn test_idle_stays_released() {
        let mut decoder = ButtonDecoder::new();
        let cfg = config();

        for t in [0, 10, 100, 5000] {
            assert_eq!(decoder.decode(OPEN, t, &cfg), Button::Released);
        }
        assert_eq!(decoder.phase(), DebouncePhase::Released);
    }

    #[test]
    fn test_short_click() {
        let mut decoder = ButtonDecoder::new();
        let cfg = config();

        // Edge snaps the chain, report unchanged
        assert_eq!(decoder.decode(PRESSED, 10, &cfg), Button::Released);
        assert_eq!(decoder.phase(), DebouncePhase::PressEdge);

        // Still inside the settle window
        assert_eq!(decoder.decode(PRESSED, 60, &cfg), Button::Released);

        assert_eq!(decoder.decode(PRESSED, 61, &cfg), Button::Switchdown);
        assert_eq!(decoder.decode(PRESSED, 62, &cfg), Button::Pressed);
        assert_eq!(decoder.decode(PRESSED, 300, &cfg), Button::Pressed);

        assert_eq!(decoder.decode(OPEN, 310, &cfg), Button::Pressed);
        assert_eq!(decoder.phase(), DebouncePhase::ReleaseEdge);

        assert_eq!(decoder.decode(OPEN, 361, &cfg), Button::Switchup);
        assert_eq!(decoder.decode(OPEN, 362, &cfg), Button::Released);
        assert_eq!(decoder.phase(), DebouncePhase::Released);
    }

    #[test]
    fn test_bounce_never_passes_snap_state() {
        let mut decoder = ButtonDecoder::new();
        let cfg = config();

        let bounces = [
            (PRESSED, 10),
            (OPEN, 20),
            (PRESSED, 30),
            (OPEN, 45),
            (OPEN, 90),
        ];
        for (level, t) in bounces {
            let reported = decoder.decode(level, t, &cfg);
            assert_eq!(reported, Button::Released);
            assert!(matches!(
                decoder.phase(),
                DebouncePhase::PressEdge | DebouncePhase::ReleaseEdge
            ));
        }
    }

    #[test]
    fn test_long_press_single_holddown() {
        let mut decoder = ButtonDecoder::new();
        let cfg = config();

        decoder.decode(PRESSED, 10, &cfg);
        assert_eq!(decoder.decode(PRESSED, 61, &cfg), Button::Switchdown);
        assert_eq!(decoder.decode(PRESSED, 62, &cfg), Button::Pressed);

        let mut holddowns = 0;
        let mut helds = 0;
        for t in 63..3000 {
            match decoder.decode(PRESSED, t, &cfg) {
                Button::Holddown => holddowns += 1,
                Button::Held => helds += 1,
                _ => {}
            }
        }

        assert_eq!(holddowns, 1);
        assert!(helds > 1900);
        assert_eq!(decoder.phase(), DebouncePhase::Held);
    }

    #[test]
    fn test_holddown_needs_pressed_first() {
        let mut decoder = ButtonDecoder::new();
        let cfg = config();

        // First settled sample arrives long after the press
        decoder.decode(PRESSED, 0, &cfg);
        assert_eq!(decoder.decode(PRESSED, 2000, &cfg), Button::Switchdown);
        assert_eq!(decoder.decode(PRESSED, 2001, &cfg), Button::Pressed);
        assert_eq!(decoder.decode(PRESSED, 2002, &cfg), Button::Holddown);
    }

    #[test]
    fn test_long_press_release_reports_holdup() {
        let mut decoder = ButtonDecoder::new();
        let cfg = config();

        decoder.decode(PRESSED, 10, &cfg);
        decoder.decode(PRESSED, 61, &cfg);
        decoder.decode(PRESSED, 62, &cfg);
        assert_eq!(decoder.decode(PRESSED, 1011, &cfg), Button::Holddown);
        assert_eq!(decoder.decode(PRESSED, 1012, &cfg), Button::Held);

        // Held is kept while the release settles
        assert_eq!(decoder.decode(OPEN, 1020, &cfg), Button::Held);
        assert_eq!(decoder.decode(OPEN, 1070, &cfg), Button::Held);
        assert_eq!(decoder.decode(OPEN, 1071, &cfg), Button::Holdup);
        assert_eq!(decoder.decode(OPEN, 1072, &cfg), Button::Released);
    }

    #[test]
    fn test_release_right_after_holddown_is_holdup() {
        let mut decoder = ButtonDecoder::new();
        let cfg = config();

        decoder.decode(PRESSED, 0, &cfg);
        decoder.decode(PRESSED, 51, &cfg);
        decoder.decode(PRESSED, 52, &cfg);
        assert_eq!(decoder.decode(PRESSED, 1001, &cfg), Button::Holddown);

        decoder.decode(OPEN, 1002, &cfg);
        assert_eq!(decoder.decode(OPEN, 1053, &cfg), Button::Holdup);
    }

    #[test]
    fn test_settle_timer_survives_clock_wrap() {
        let mut decoder = ButtonDecoder::new();
        let cfg = config();
        let start = u32::MAX - 20;

        decoder.decode(PRESSED, start, &cfg);
        assert_eq!(decoder.decode(PRESSED, start.wrapping_add(40), &cfg), Button::Released);
        assert_eq!(decoder.decode(PRESSED, start.wrapping_add(51), &cfg), Button::Switchdown);
    }

    #[test]
    fn test_phase_codes() {
        assert_eq!(DebouncePhase::Released.bits(), 0b111);
        assert_eq!(DebouncePhase::PressEdge.bits(), 0b110);
        assert!(DebouncePhase::ReleaseEdge.level());
        assert!(!DebouncePhase::Held.level());
    }

    #[test]
    fn test_membership_helpers() {
        assert!(Button::Pressed.is_pressed_settled());
        assert!(!Button::Switchdown.is_pressed_settled());
        assert!(!Button::Holddown.is_pressed_settled());

        assert!(!Button::Switchdown.is_past_pressed());
        assert!(!Button::Pressed.is_past_pressed());
        for b in [
            Button::Holddown,
            Button::Switchup,
            Button::Holdup,
            Button::Released,
            Button::Held,
        ] {
            assert!(b.is_past_pressed());
        }
    }
}
