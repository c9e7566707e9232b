//! Gesture events produced by the fuser

use crate::decode::Rotary;

/// Maximum events one pass can produce: one rotation plus one button transition
pub const MAX_EVENTS_PER_PASS: usize = 2;

/// Events fired during one sampling pass, in firing order
pub type PassEvents = heapless::Vec<GestureEvent, MAX_EVENTS_PER_PASS>;

/// Gesture transitions, one per registrable handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureEvent {
    // Rotation events
    /// Detent turned with the button released
    Rotate(Rotary),
    /// Detent turned while the press is settled
    PressRotate(Rotary),
    /// Detent turned during a long press
    HeldRotate(Rotary),

    // Button events
    /// Press settled from idle
    Press,
    /// Short press released
    PressRelease,
    /// Press became a long press
    LongPress,
    /// Long press released
    LongPressRelease,
    /// Button released after press-and-rotate
    PressRotateRelease,
    /// Button released after held-rotate
    HeldRotateRelease,
}

impl GestureEvent {
    /// Direction carried by rotation events
    pub fn rotation(&self) -> Option<Rotary> {
        match self {
            GestureEvent::Rotate(r) | GestureEvent::PressRotate(r) | GestureEvent::HeldRotate(r) => {
                Some(*r)
            }
            _ => None,
        }
    }

    /// Returns true if this event ends a button interaction
    pub fn is_release(&self) -> bool {
        matches!(
            self,
            GestureEvent::PressRelease
                | GestureEvent::LongPressRelease
                | GestureEvent::PressRotateRelease
                | GestureEvent::HeldRotateRelease
        )
    }
}
