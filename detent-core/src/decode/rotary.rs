//! Quadrature rotation decoder
//!
//! The CLK/DT channels are packed into a 2-bit pair per sample. Every time
//! the pair changes it is shifted into an 8-bit history holding the last
//! four distinct pairs. A direction is reported only when the history
//! spells out a complete detent cycle, which a single bouncing edge never
//! does:
//!
//! ```text
//!  step    1    2    3    4    5
//!  CCW    11 | 01 | 00 | 10 | 11    history 0b01_00_10_11
//!  CW     11 | 10 | 00 | 01 | 11    history 0b10_00_01_11
//! ```
//!
//! The leading `11` is the pair already held in the history before the
//! cycle starts; it is shifted out when the final `11` arrives.

/// Complete counter-clockwise cycle
pub const CCW_CYCLE: u8 = 0b0100_1011;

/// Complete clockwise cycle
pub const CW_CYCLE: u8 = 0b1000_0111;

/// Pair both channels rest at between detents (pulled high)
pub const IDLE_PAIR: u8 = 0b11;

/// Rotation decoded during one sampling pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotary {
    /// Counter-clockwise detent completed
    Left,
    /// Clockwise detent completed
    Right,
    /// No complete detent this pass
    #[default]
    Stopped,
}

impl Rotary {
    /// Signed step for this rotation (-1, 0 or +1)
    pub fn delta(&self) -> i8 {
        match self {
            Rotary::Left => -1,
            Rotary::Right => 1,
            Rotary::Stopped => 0,
        }
    }

    /// Returns true if a detent was completed
    pub fn is_moving(&self) -> bool {
        !matches!(self, Rotary::Stopped)
    }
}

/// Pack the two channel levels into a CLK/DT pair
#[inline]
pub fn pair(clk: bool, dt: bool) -> u8 {
    ((clk as u8) << 1) | dt as u8
}

/// Rotation decoder state
#[derive(Debug, Clone)]
pub struct RotaryDecoder {
    /// Last four distinct CLK/DT pairs, newest in the low bits
    history: u8,
}

impl Default for RotaryDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RotaryDecoder {
    /// Create a decoder resting on the idle pair
    pub fn new() -> Self {
        Self { history: IDLE_PAIR }
    }

    /// Raw history register
    pub fn history(&self) -> u8 {
        self.history
    }

    /// Feed one sample of both channels
    ///
    /// An unchanged pair leaves the history untouched. Anything that does
    /// not complete one of the two cycles decodes as [`Rotary::Stopped`].
    pub fn decode(&mut self, clk: bool, dt: bool) -> Rotary {
        let pair = pair(clk, dt);

        if pair == self.history & 0b11 {
            return Rotary::Stopped;
        }

        self.history = (self.history << 2) | pair;

        match self.history {
            CCW_CYCLE => Rotary::Left,
            CW_CYCLE => Rotary::Right,
            _ => Rotary::Stopped,
        }
    }
}
