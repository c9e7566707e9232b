//! Gesture state machine
//!
//! Fuses the rotation and button decoder outputs of one pass into a single
//! gesture state. Each transition that fires yields exactly one
//! [`GestureEvent`].

use super::events::{GestureEvent, PassEvents};
use crate::decode::{Button, Rotary};

/// Gesture states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureState {
    /// Nothing happening: not rotating, button released
    #[default]
    Inactive,
    /// Short press in progress
    Press,
    /// A press just ended; waiting for everything to go idle
    Release,
    /// Rotating with the button released
    Rotate,
    /// Rotating while the press is settled
    PressRotate,
    /// Rotating during a long press
    HeldRotate,
    /// Long press in progress
    Hold,
}

impl GestureState {
    /// Check if this is the idle state
    pub fn is_inactive(&self) -> bool {
        matches!(self, GestureState::Inactive)
    }

    /// Check if rotation is part of the current gesture
    pub fn is_rotating(&self) -> bool {
        matches!(
            self,
            GestureState::Rotate | GestureState::PressRotate | GestureState::HeldRotate
        )
    }

    /// Process one pass and return the next state with the events it fired
    ///
    /// Rotation is resolved first; the button transitions are then keyed on
    /// the state rotation left behind.
    pub fn transition(self, rotary: Rotary, button: Button) -> (Self, PassEvents) {
        use GestureState::*;

        let mut state = self;
        let mut events = PassEvents::new();

        if rotary == Rotary::Stopped && button == Button::Released {
            state = Inactive;
        }

        if rotary.is_moving() {
            let fired = if button == Button::Released {
                state = Rotate;
                Some(GestureEvent::Rotate(rotary))
            } else if button.is_pressed_settled() || state == PressRotate {
                state = PressRotate;
                Some(GestureEvent::PressRotate(rotary))
            } else if button.is_past_pressed() {
                state = HeldRotate;
                Some(GestureEvent::HeldRotate(rotary))
            } else {
                // Press not settled yet
                None
            };

            if let Some(event) = fired {
                let _ = events.push(event);
            }
        }

        let fired = match (state, button) {
            (Inactive, Button::Switchdown) => Some((Press, GestureEvent::Press)),
            (Press, Button::Switchup) => Some((Release, GestureEvent::PressRelease)),
            (Press, Button::Holddown) => Some((Hold, GestureEvent::LongPress)),
            (Hold, Button::Holdup) => Some((Release, GestureEvent::LongPressRelease)),
            (PressRotate, b) if b.is_release_edge() => {
                Some((Release, GestureEvent::PressRotateRelease))
            }
            (HeldRotate, b) if b.is_release_edge() => {
                Some((Release, GestureEvent::HeldRotateRelease))
            }
            _ => None,
        };

        if let Some((next, event)) = fired {
            state = next;
            let _ = events.push(event);
        }

        (state, events)
    }
}
