//! Physical control addressing.
//!
//! A [`ControlPath`] names one control on one device together with the signal
//! read from it. Hosts report readings under these paths and probes look them up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which hand a tracked controller is held in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

/// Oculus controller families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OculusController {
    LeftTouch,
    RightTouch,
    Remote,
}

/// Device class a control belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    Keyboard,
    Mouse,
    Gamepad,
    SteamVr(Hand),
    Oculus(OculusController),
}

impl DeviceKind {
    /// Whether controls on this device can report `contact`.
    pub fn supports(&self, contact: Contact) -> bool {
        match (self, contact) {
            (_, Contact::Press) => true,
            (DeviceKind::SteamVr(_), Contact::Touch) => true,
            (DeviceKind::Oculus(_), Contact::Touch | Contact::NearTouch) => true,
            _ => false,
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceKind::Keyboard => f.write_str("keyboard"),
            DeviceKind::Mouse => f.write_str("mouse"),
            DeviceKind::Gamepad => f.write_str("gamepad"),
            DeviceKind::SteamVr(Hand::Left) => f.write_str("steamvr.left"),
            DeviceKind::SteamVr(Hand::Right) => f.write_str("steamvr.right"),
            DeviceKind::Oculus(OculusController::LeftTouch) => f.write_str("oculus.ltouch"),
            DeviceKind::Oculus(OculusController::RightTouch) => f.write_str("oculus.rtouch"),
            DeviceKind::Oculus(OculusController::Remote) => f.write_str("oculus.remote"),
        }
    }
}

/// Signal read from a control: a physical press, capacitive touch, or proximity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Contact {
    #[default]
    Press,
    Touch,
    NearTouch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u8),
}

impl MouseButton {
    fn control_id(&self) -> String {
        match self {
            MouseButton::Left => "0".into(),
            MouseButton::Right => "1".into(),
            MouseButton::Middle => "2".into(),
            MouseButton::Other(n) => n.to_string(),
        }
    }
}

/// Identifies a control on a device.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlPath {
    pub device: DeviceKind,
    pub control_id: String,
    #[serde(default)]
    pub contact: Contact,
}

impl ControlPath {
    pub fn new(device: DeviceKind, control_id: impl Into<String>) -> Self {
        Self {
            device,
            control_id: control_id.into(),
            contact: Contact::Press,
        }
    }

    /// Keyboard key by name (`"W"`, `"Space"`, `"Escape"`).
    pub fn key(name: impl Into<String>) -> Self {
        Self::new(DeviceKind::Keyboard, name)
    }

    pub fn mouse(button: MouseButton) -> Self {
        Self::new(DeviceKind::Mouse, button.control_id())
    }

    /// Mouse motion or wheel axis by name (`"Mouse X"`, `"Mouse ScrollWheel"`).
    pub fn mouse_axis(name: impl Into<String>) -> Self {
        Self::new(DeviceKind::Mouse, name)
    }

    /// Gamepad button or virtual axis by its host-configured name.
    pub fn gamepad(name: impl Into<String>) -> Self {
        Self::new(DeviceKind::Gamepad, name)
    }

    pub fn steamvr(hand: Hand, control_id: impl Into<String>) -> Self {
        Self::new(DeviceKind::SteamVr(hand), control_id)
    }

    pub fn oculus(controller: OculusController, control_id: impl Into<String>) -> Self {
        Self::new(DeviceKind::Oculus(controller), control_id)
    }

    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contact = contact;
        self
    }
}

impl fmt::Display for ControlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.device, self.control_id)?;
        match self.contact {
            Contact::Press => Ok(()),
            Contact::Touch => f.write_str("#touch"),
            Contact::NearTouch => f.write_str("#neartouch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_device_and_contact() {
        let path = ControlPath::steamvr(Hand::Left, "trigger").with_contact(Contact::Touch);
        assert_eq!(path.to_string(), "steamvr.left/trigger#touch");
        assert_eq!(ControlPath::key("W").to_string(), "keyboard/W");
        assert_eq!(ControlPath::mouse(MouseButton::Right).to_string(), "mouse/1");
    }

    #[test]
    fn contact_support_by_device() {
        assert!(DeviceKind::Keyboard.supports(Contact::Press));
        assert!(!DeviceKind::Keyboard.supports(Contact::Touch));
        assert!(DeviceKind::SteamVr(Hand::Right).supports(Contact::Touch));
        assert!(!DeviceKind::SteamVr(Hand::Right).supports(Contact::NearTouch));
        assert!(DeviceKind::Oculus(OculusController::LeftTouch).supports(Contact::NearTouch));
    }

    #[test]
    fn contact_defaults_to_press_when_deserialized() {
        let path: ControlPath =
            serde_json::from_str(r#"{"device":"Gamepad","control_id":"Submit"}"#).unwrap();
        assert_eq!(path, ControlPath::gamepad("Submit"));
    }
}
