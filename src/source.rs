//! The seam between the host platform and the resolution layer.
//!
//! An [`InputSource`] answers "what does this control read right now". Every
//! probe queries it fresh on each call; nothing above this trait caches values
//! across frames.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::binding::{ControlPath, MouseButton};

/// Digital state of one control for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    /// Went down this frame.
    pub pressed: bool,
    /// Is down.
    pub held: bool,
    /// Went up this frame.
    pub released: bool,
}

impl ButtonState {
    pub const RELEASED: ButtonState = ButtonState {
        pressed: false,
        held: false,
        released: false,
    };

    /// Pressed and held in the same poll.
    #[inline]
    pub fn pressed_and_held(&self) -> bool {
        self.pressed && self.held
    }

    /// Pressed and released in the same poll. Rarely true on hosts that report
    /// the two edges on separate frames.
    #[inline]
    pub fn clicked(&self) -> bool {
        self.pressed && self.released
    }

    /// Any of the digital states is active.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.pressed || self.held || self.released
    }
}

/// Live readings keyed by [`ControlPath`]. Unknown controls read as released/zero.
pub trait InputSource {
    fn button(&self, control: &ControlPath) -> ButtonState;
    fn axis(&self, control: &ControlPath) -> f32;
    fn raw_axis(&self, control: &ControlPath) -> f32;
    fn axis_2d(&self, control: &ControlPath) -> Vec2;
    fn raw_axis_2d(&self, control: &ControlPath) -> Vec2;

    fn is_key_pressed(&self, key: &str) -> bool {
        self.button(&ControlPath::key(key)).pressed
    }

    fn is_key_held(&self, key: &str) -> bool {
        self.button(&ControlPath::key(key)).held
    }

    fn is_key_released(&self, key: &str) -> bool {
        self.button(&ControlPath::key(key)).released
    }

    fn is_key_pressed_and_held(&self, key: &str) -> bool {
        self.button(&ControlPath::key(key)).pressed_and_held()
    }

    fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.button(&ControlPath::mouse(button)).pressed
    }

    fn is_mouse_held(&self, button: MouseButton) -> bool {
        self.button(&ControlPath::mouse(button)).held
    }

    fn is_mouse_released(&self, button: MouseButton) -> bool {
        self.button(&ControlPath::mouse(button)).released
    }

    fn is_gamepad_pressed(&self, name: &str) -> bool {
        self.button(&ControlPath::gamepad(name)).pressed
    }

    fn is_gamepad_held(&self, name: &str) -> bool {
        self.button(&ControlPath::gamepad(name)).held
    }

    fn is_gamepad_released(&self, name: &str) -> bool {
        self.button(&ControlPath::gamepad(name)).released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_frame_compound_states() {
        let down = ButtonState {
            pressed: true,
            held: true,
            released: false,
        };
        assert!(down.pressed_and_held());
        assert!(!down.clicked());

        let tap = ButtonState {
            pressed: true,
            held: false,
            released: true,
        };
        assert!(tap.clicked());
        assert!(!tap.pressed_and_held());

        assert!(!ButtonState::RELEASED.is_active());
    }
}
