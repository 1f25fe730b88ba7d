//! Logical buttons.
//!
//! An [`InputButton`] normalizes one physical control into the canonical digital
//! states and a signed `value`. The physical side is a [`ButtonProbe`], a closed
//! set of device variants chosen at construction.

use serde::{Deserialize, Serialize};

use crate::binding::{Contact, ControlPath, Hand, MouseButton, OculusController};
use crate::source::{ButtonState, InputSource};

/// Physical control a button reads.
///
/// Serialized as `{ device = "Key", control = "Space" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "device", content = "control")]
pub enum ButtonProbe {
    /// Keyboard key by name.
    Key(String),
    Mouse(MouseButton),
    /// Gamepad button by its host-configured name.
    Gamepad(String),
    /// SteamVR controller button; `touch` reads the capacitive sensor instead.
    SteamVr {
        hand: Hand,
        button: String,
        #[serde(default)]
        touch: bool,
    },
    Oculus {
        controller: OculusController,
        button: String,
        #[serde(default)]
        contact: Contact,
    },
}

impl ButtonProbe {
    /// Path this probe reads from.
    pub fn control(&self) -> ControlPath {
        match self {
            ButtonProbe::Key(name) => ControlPath::key(name.as_str()),
            ButtonProbe::Mouse(button) => ControlPath::mouse(*button),
            ButtonProbe::Gamepad(name) => ControlPath::gamepad(name.as_str()),
            ButtonProbe::SteamVr {
                hand,
                button,
                touch,
            } => {
                let path = ControlPath::steamvr(*hand, button.as_str());
                if *touch {
                    path.with_contact(Contact::Touch)
                } else {
                    path
                }
            }
            ButtonProbe::Oculus {
                controller,
                button,
                contact,
            } => ControlPath::oculus(*controller, button.as_str()).with_contact(*contact),
        }
    }

    /// Reads the probe's control from `source`.
    #[inline]
    pub fn state(&self, source: &dyn InputSource) -> ButtonState {
        source.button(&self.control())
    }
}

/// A named digital input with a direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputButton {
    pub name: String,
    pub probe: ButtonProbe,
    /// Report `-1` instead of `+1` while active.
    #[serde(default)]
    pub negative: bool,
}

impl InputButton {
    pub fn new(name: impl Into<String>, probe: ButtonProbe) -> Self {
        Self {
            name: name.into(),
            probe,
            negative: false,
        }
    }

    pub fn key(key: impl Into<String>) -> Self {
        let key = key.into();
        Self::new(format!("Key {key}"), ButtonProbe::Key(key))
    }

    pub fn mouse(button: MouseButton) -> Self {
        Self::new(format!("Mouse {button:?}"), ButtonProbe::Mouse(button))
    }

    pub fn gamepad(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(name.clone(), ButtonProbe::Gamepad(name))
    }

    pub fn steamvr(hand: Hand, button: impl Into<String>) -> Self {
        Self::steamvr_probe(hand, button.into(), false)
    }

    pub fn steamvr_touch(hand: Hand, button: impl Into<String>) -> Self {
        Self::steamvr_probe(hand, button.into(), true)
    }

    fn steamvr_probe(hand: Hand, button: String, touch: bool) -> Self {
        let suffix = if touch { " Touch" } else { "" };
        Self::new(
            format!("SteamVR {hand:?} {button}{suffix}"),
            ButtonProbe::SteamVr {
                hand,
                button,
                touch,
            },
        )
    }

    pub fn oculus(controller: OculusController, button: impl Into<String>) -> Self {
        Self::oculus_probe(controller, button.into(), Contact::Press)
    }

    pub fn oculus_touch(controller: OculusController, button: impl Into<String>) -> Self {
        Self::oculus_probe(controller, button.into(), Contact::Touch)
    }

    pub fn oculus_near_touch(controller: OculusController, button: impl Into<String>) -> Self {
        Self::oculus_probe(controller, button.into(), Contact::NearTouch)
    }

    fn oculus_probe(controller: OculusController, button: String, contact: Contact) -> Self {
        Self::new(
            format!("Oculus {controller:?} {button} {contact:?}"),
            ButtonProbe::Oculus {
                controller,
                button,
                contact,
            },
        )
    }

    /// Flips the sign of [`value`](Self::value).
    pub fn negative(mut self) -> Self {
        self.negative = true;
        self
    }

    pub fn is_pressed(&self, source: &dyn InputSource) -> bool {
        self.probe.state(source).pressed
    }

    pub fn is_held(&self, source: &dyn InputSource) -> bool {
        self.probe.state(source).held
    }

    pub fn is_released(&self, source: &dyn InputSource) -> bool {
        self.probe.state(source).released
    }

    /// Pressed and held in the same poll.
    pub fn is_pressed_and_held(&self, source: &dyn InputSource) -> bool {
        self.probe.state(source).pressed_and_held()
    }

    /// Pressed and released in the same poll.
    pub fn is_clicked(&self, source: &dyn InputSource) -> bool {
        self.probe.state(source).clicked()
    }

    /// `±1` while any digital state is active, otherwise `0`.
    pub fn value(&self, source: &dyn InputSource) -> f32 {
        // pressed-and-held and clicked are subsets of pressed
        match (self.probe.state(source).is_active(), self.negative) {
            (false, _) => 0.0,
            (true, false) => 1.0,
            (true, true) => -1.0,
        }
    }
}

/// Logical OR over `buttons` for the state picked by `read`.
pub(crate) fn any_button(
    buttons: &[InputButton],
    source: &dyn InputSource,
    read: impl Fn(&InputButton, &dyn InputSource) -> bool,
) -> bool {
    buttons.iter().any(|button| read(button, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::FrameState;

    #[test]
    fn value_sign_follows_negative_flag() {
        let mut frame = FrameState::new();
        frame.press(&ControlPath::key("Q"));

        assert_eq!(InputButton::key("Q").value(&frame), 1.0);
        assert_eq!(InputButton::key("Q").negative().value(&frame), -1.0);
        assert_eq!(InputButton::key("E").value(&frame), 0.0);
    }

    #[test]
    fn released_state_still_counts_for_value() {
        let mut frame = FrameState::new();
        let grip = InputButton::steamvr(Hand::Left, "grip");
        frame.press(&grip.probe.control());
        frame.begin_frame();
        frame.release(&grip.probe.control());

        assert!(grip.is_released(&frame));
        assert!(!grip.is_held(&frame));
        assert_eq!(grip.value(&frame), 1.0);
    }

    #[test]
    fn touch_probes_read_their_own_contact() {
        let mut frame = FrameState::new();
        frame.press(
            &ControlPath::oculus(OculusController::RightTouch, "A")
                .with_contact(Contact::NearTouch),
        );

        let press = InputButton::oculus(OculusController::RightTouch, "A");
        let touch = InputButton::oculus_touch(OculusController::RightTouch, "A");
        let near = InputButton::oculus_near_touch(OculusController::RightTouch, "A");
        assert!(!press.is_pressed(&frame));
        assert!(!touch.is_pressed(&frame));
        assert!(near.is_pressed(&frame));
        assert!(near.is_pressed_and_held(&frame));
    }

    #[test]
    fn steamvr_touch_maps_to_touch_contact() {
        let button = InputButton::steamvr_touch(Hand::Right, "touchpad");
        assert_eq!(
            button.probe.control(),
            ControlPath::steamvr(Hand::Right, "touchpad").with_contact(Contact::Touch)
        );
    }

    #[test]
    fn any_button_is_a_logical_or() {
        let mut frame = FrameState::new();
        let buttons = vec![
            InputButton::key("A"),
            InputButton::mouse(MouseButton::Left),
            InputButton::gamepad("Fire1"),
        ];
        assert!(!any_button(&buttons, &frame, InputButton::is_pressed));

        frame.press(&ControlPath::gamepad("Fire1"));
        assert!(any_button(&buttons, &frame, InputButton::is_pressed));
    }
}
