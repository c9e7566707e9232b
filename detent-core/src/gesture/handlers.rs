//! Handler registry
//!
//! One optional function per gesture event. Unregistered events are
//! skipped silently.

use super::events::GestureEvent;
use crate::decode::Rotary;

/// Handler for rotation events
pub type RotaryHandler = fn(Rotary);

/// Handler for button and release events
pub type ButtonHandler = fn();

/// Registered gesture handlers
#[derive(Debug, Clone, Copy, Default)]
pub struct Handlers {
    rotate: Option<RotaryHandler>,
    press_rotate: Option<RotaryHandler>,
    held_rotate: Option<RotaryHandler>,
    press: Option<ButtonHandler>,
    press_release: Option<ButtonHandler>,
    long_press: Option<ButtonHandler>,
    long_press_release: Option<ButtonHandler>,
    press_rotate_release: Option<ButtonHandler>,
    held_rotate_release: Option<ButtonHandler>,
}

impl Handlers {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self {
            rotate: None,
            press_rotate: None,
            held_rotate: None,
            press: None,
            press_release: None,
            long_press: None,
            long_press_release: None,
            press_rotate_release: None,
            held_rotate_release: None,
        }
    }

    /// Called for each detent turned with the button released
    pub fn set_handle_rotate(&mut self, handler: RotaryHandler) {
        self.rotate = Some(handler);
    }

    /// Called for each detent turned while a short press is held
    pub fn set_handle_press_rotate(&mut self, handler: RotaryHandler) {
        self.press_rotate = Some(handler);
    }

    /// Called for each detent turned during a long press
    pub fn set_handle_held_rotate(&mut self, handler: RotaryHandler) {
        self.held_rotate = Some(handler);
    }

    /// Called when a press starts
    pub fn set_handle_press(&mut self, handler: ButtonHandler) {
        self.press = Some(handler);
    }

    /// Called when a short press is released without rotation
    pub fn set_handle_press_release(&mut self, handler: ButtonHandler) {
        self.press_release = Some(handler);
    }

    /// Called once when a press crosses the long-press threshold
    pub fn set_handle_long_press(&mut self, handler: ButtonHandler) {
        self.long_press = Some(handler);
    }

    /// Called when a long press is released without rotation
    pub fn set_handle_long_press_release(&mut self, handler: ButtonHandler) {
        self.long_press_release = Some(handler);
    }

    /// Called when the button is released after press + rotate
    pub fn set_handle_press_rotate_release(&mut self, handler: ButtonHandler) {
        self.press_rotate_release = Some(handler);
    }

    /// Called when the button is released after long press + rotate
    pub fn set_handle_held_rotate_release(&mut self, handler: ButtonHandler) {
        self.held_rotate_release = Some(handler);
    }

    /// Unregister every handler
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Invoke the handler registered for `event`
    ///
    /// Returns true if a handler ran.
    pub fn dispatch(&self, event: &GestureEvent) -> bool {
        let rotary = match *event {
            GestureEvent::Rotate(r) => self.rotate.map(|h| (h, r)),
            GestureEvent::PressRotate(r) => self.press_rotate.map(|h| (h, r)),
            GestureEvent::HeldRotate(r) => self.held_rotate.map(|h| (h, r)),
            _ => None,
        };
        if let Some((handler, direction)) = rotary {
            handler(direction);
            return true;
        }

        let button = match event {
            GestureEvent::Press => self.press,
            GestureEvent::PressRelease => self.press_release,
            GestureEvent::LongPress => self.long_press,
            GestureEvent::LongPressRelease => self.long_press_release,
            GestureEvent::PressRotateRelease => self.press_rotate_release,
            GestureEvent::HeldRotateRelease => self.held_rotate_release,
            _ => None,
        };
        match button {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}
