//! Stock actions for a VR scene with desktop fallbacks.
//!
//! Each factory builds a complete action, buttons and axes included, ready to
//! register:
//!
//! | Action       | Keyboard / mouse      | Gamepad            | VR                                  |
//! |--------------|-----------------------|--------------------|-------------------------------------|
//! | `Move`       | WASD, arrow keys      | `Horizontal`, `Vertical` | left touchpad / thumbstick    |
//! | `Rotate`     | Q / E, `Mouse X`      | `RightStickX`      | right touchpad / thumbstick         |
//! | `ToggleMenu` | Escape                | `Start`            | menu buttons, Oculus Remote `Back`  |

use log::debug;

use crate::action::{AxisRole, ButtonPhase, InputAction};
use crate::axis::InputAxis;
use crate::binding::{ControlPath, Hand, OculusController};
use crate::button::{ButtonProbe, InputButton};
use crate::registry::ActionRegistry;

pub const MOVE: &str = "Move";
pub const ROTATE: &str = "Rotate";
pub const TOGGLE_MENU: &str = "ToggleMenu";

fn key_pair(name: &str, negative: &str, positive: &str) -> InputAxis {
    InputAxis::buttons(
        name,
        ButtonProbe::Key(negative.into()),
        ButtonProbe::Key(positive.into()),
    )
}

fn left_touchpad() -> InputAxis {
    InputAxis::vector("Left Touchpad", ControlPath::steamvr(Hand::Left, "touchpad"))
}

fn right_touchpad() -> InputAxis {
    InputAxis::vector(
        "Right Touchpad",
        ControlPath::steamvr(Hand::Right, "touchpad"),
    )
}

fn left_thumbstick() -> InputAxis {
    InputAxis::vector(
        "Left Thumbstick",
        ControlPath::oculus(OculusController::LeftTouch, "PrimaryThumbstick"),
    )
}

fn right_thumbstick() -> InputAxis {
    InputAxis::vector(
        "Right Thumbstick",
        ControlPath::oculus(OculusController::RightTouch, "SecondaryThumbstick"),
    )
}

/// Planar movement: strafe on X, forward/back on Y.
pub fn move_action() -> InputAction {
    InputAction::new(MOVE)
        .with_description("Translate the avatar across the play area")
        .with_axis(AxisRole::X, key_pair("Strafe Keys", "A", "D"))
        .with_axis(AxisRole::X, key_pair("Strafe Arrows", "LeftArrow", "RightArrow"))
        .with_axis(
            AxisRole::X,
            InputAxis::scalar("Horizontal", ControlPath::gamepad("Horizontal")),
        )
        .with_axis(AxisRole::X, left_touchpad())
        .with_axis(AxisRole::X, left_thumbstick())
        .with_axis(AxisRole::Y, key_pair("Walk Keys", "S", "W"))
        .with_axis(AxisRole::Y, key_pair("Walk Arrows", "DownArrow", "UpArrow"))
        .with_axis(
            AxisRole::Y,
            InputAxis::scalar("Vertical", ControlPath::gamepad("Vertical")),
        )
        .with_axis(AxisRole::Y, left_touchpad())
        .with_axis(AxisRole::Y, left_thumbstick())
}

/// Turning on the yaw axis.
pub fn rotate_action() -> InputAction {
    InputAction::new(ROTATE)
        .with_description("Turn the avatar around its vertical axis")
        .with_axis(AxisRole::Yaw, key_pair("Turn Keys", "Q", "E"))
        .with_axis(
            AxisRole::Yaw,
            InputAxis::scalar("Mouse X", ControlPath::mouse_axis("Mouse X")),
        )
        .with_axis(
            AxisRole::Yaw,
            InputAxis::scalar("Right Stick X", ControlPath::gamepad("RightStickX")),
        )
        .with_axis(AxisRole::Yaw, right_touchpad())
        .with_axis(AxisRole::Yaw, right_thumbstick())
}

/// Opens or closes the in-scene menu.
pub fn toggle_menu_action() -> InputAction {
    InputAction::new(TOGGLE_MENU)
        .with_description("Show or hide the menu")
        .with_key(ButtonPhase::Pressed, "Escape")
        .with_button(ButtonPhase::Pressed, InputButton::gamepad("Start"))
        .with_button(ButtonPhase::Pressed, InputButton::steamvr(Hand::Left, "menu"))
        .with_button(ButtonPhase::Pressed, InputButton::steamvr(Hand::Right, "menu"))
        .with_button(
            ButtonPhase::Pressed,
            InputButton::oculus(OculusController::LeftTouch, "Start"),
        )
        .with_button(
            ButtonPhase::Pressed,
            InputButton::oculus(OculusController::Remote, "Back"),
        )
}

/// Registers every stock action whose name is free. Returns how many were added.
pub fn register_defaults(registry: &mut ActionRegistry) -> usize {
    let mut added = 0;
    for action in [move_action(), rotate_action(), toggle_menu_action()] {
        if !registry.is_action_registered(action.name()) && registry.add_input_action(action) {
            added += 1;
        }
    }
    debug!("registered {added} default action(s)");
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::FrameState;
    use glam::Vec2;

    #[test]
    fn move_prefers_the_strongest_source() {
        let mut frame = FrameState::new();
        frame.press(&ControlPath::key("D"));
        frame.set_axis_2d(
            ControlPath::steamvr(Hand::Left, "touchpad"),
            Vec2::new(-0.3, 0.8),
        );

        let action = move_action();
        assert!(action.has_fired(&frame));
        assert_eq!(action.x_axis_value(&frame), 1.0);
        assert_eq!(action.y_axis_value(&frame), 0.8);
    }

    #[test]
    fn rotate_reads_mouse_motion() {
        let mut frame = FrameState::new();
        frame.set_axis(ControlPath::mouse_axis("Mouse X"), -4.5);
        assert_eq!(rotate_action().yaw_axis_value(&frame), -4.5);
    }

    #[test]
    fn menu_fires_from_any_controller() {
        let action = toggle_menu_action();
        for control in [
            ControlPath::key("Escape"),
            ControlPath::gamepad("Start"),
            ControlPath::steamvr(Hand::Right, "menu"),
            ControlPath::oculus(OculusController::Remote, "Back"),
        ] {
            let mut frame = FrameState::new();
            assert!(!action.has_fired(&frame));
            frame.press(&control);
            assert!(action.has_fired(&frame), "{control} should toggle the menu");
        }
    }

    #[test]
    fn defaults_register_once() {
        let mut registry = ActionRegistry::new();
        assert_eq!(register_defaults(&mut registry), 3);
        assert_eq!(register_defaults(&mut registry), 0);
        assert!(registry.is_action_registered(MOVE));
        assert!(registry.is_action_registered(ROTATE));
        assert!(registry.is_action_registered(TOGGLE_MENU));
    }
}
