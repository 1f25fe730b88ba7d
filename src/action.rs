//! Named input actions.
//!
//! An [`InputAction`] aggregates keys, buttons and axes behind one semantic
//! name ("Move", "ToggleMenu"). It keeps no per-frame state: every query is
//! recomputed from the [`InputSource`] passed in.
//!
//! Resolution rules:
//! - Digital lists combine with logical OR.
//! - Axis roles resolve to the reading with the largest magnitude
//!   ([`max_magnitude`]). Clean and raw readings resolve independently.
//! - [`InputAction::button_value`] is the first non-zero button value found
//!   scanning the pressed, held, pressed-and-held, then released lists.
//!
//! Equality and hashing use the name only.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::axis::InputAxis;
use crate::button::{any_button, InputButton};
use crate::error::{Error, Result};
use crate::registry::ActionRegistry;
use crate::resolve::{max_magnitude, max_magnitude_2d};
use crate::source::InputSource;

/// Digital state a key or button list listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonPhase {
    Pressed,
    Held,
    Released,
    PressedAndHeld,
}

impl ButtonPhase {
    pub const ALL: [ButtonPhase; 4] = [
        ButtonPhase::Pressed,
        ButtonPhase::Held,
        ButtonPhase::Released,
        ButtonPhase::PressedAndHeld,
    ];
}

/// Semantic slot an axis list feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisRole {
    X,
    Y,
    Z,
    Pitch,
    Yaw,
    LeftTrigger,
    RightTrigger,
}

impl AxisRole {
    pub const ALL: [AxisRole; 7] = [
        AxisRole::X,
        AxisRole::Y,
        AxisRole::Z,
        AxisRole::Pitch,
        AxisRole::Yaw,
        AxisRole::LeftTrigger,
        AxisRole::RightTrigger,
    ];

    /// Component a 2D axis contributes when this role is read as a scalar.
    pub fn reads_x(&self) -> bool {
        !matches!(self, AxisRole::Y | AxisRole::Pitch)
    }
}

/// One list per [`ButtonPhase`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseLists<T> {
    pub pressed: Vec<T>,
    pub held: Vec<T>,
    pub released: Vec<T>,
    pub pressed_and_held: Vec<T>,
}

impl<T> Default for PhaseLists<T> {
    fn default() -> Self {
        Self {
            pressed: Vec::new(),
            held: Vec::new(),
            released: Vec::new(),
            pressed_and_held: Vec::new(),
        }
    }
}

impl<T> PhaseLists<T> {
    pub fn get(&self, phase: ButtonPhase) -> &[T] {
        match phase {
            ButtonPhase::Pressed => &self.pressed,
            ButtonPhase::Held => &self.held,
            ButtonPhase::Released => &self.released,
            ButtonPhase::PressedAndHeld => &self.pressed_and_held,
        }
    }

    pub fn get_mut(&mut self, phase: ButtonPhase) -> &mut Vec<T> {
        match phase {
            ButtonPhase::Pressed => &mut self.pressed,
            ButtonPhase::Held => &mut self.held,
            ButtonPhase::Released => &mut self.released,
            ButtonPhase::PressedAndHeld => &mut self.pressed_and_held,
        }
    }

    pub fn is_empty(&self) -> bool {
        ButtonPhase::ALL.iter().all(|&p| self.get(p).is_empty())
    }
}

/// One axis list per [`AxisRole`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleLists {
    pub x: Vec<InputAxis>,
    pub y: Vec<InputAxis>,
    pub z: Vec<InputAxis>,
    pub pitch: Vec<InputAxis>,
    pub yaw: Vec<InputAxis>,
    pub left_trigger: Vec<InputAxis>,
    pub right_trigger: Vec<InputAxis>,
}

impl RoleLists {
    pub fn get(&self, role: AxisRole) -> &[InputAxis] {
        match role {
            AxisRole::X => &self.x,
            AxisRole::Y => &self.y,
            AxisRole::Z => &self.z,
            AxisRole::Pitch => &self.pitch,
            AxisRole::Yaw => &self.yaw,
            AxisRole::LeftTrigger => &self.left_trigger,
            AxisRole::RightTrigger => &self.right_trigger,
        }
    }

    pub fn get_mut(&mut self, role: AxisRole) -> &mut Vec<InputAxis> {
        match role {
            AxisRole::X => &mut self.x,
            AxisRole::Y => &mut self.y,
            AxisRole::Z => &mut self.z,
            AxisRole::Pitch => &mut self.pitch,
            AxisRole::Yaw => &mut self.yaw,
            AxisRole::LeftTrigger => &mut self.left_trigger,
            AxisRole::RightTrigger => &mut self.right_trigger,
        }
    }
}

fn key_in_phase(source: &dyn InputSource, key: &str, phase: ButtonPhase) -> bool {
    match phase {
        ButtonPhase::Pressed => source.is_key_pressed(key),
        ButtonPhase::Held => source.is_key_held(key),
        ButtonPhase::Released => source.is_key_released(key),
        ButtonPhase::PressedAndHeld => source.is_key_pressed_and_held(key),
    }
}

fn button_in_phase(button: &InputButton, source: &dyn InputSource, phase: ButtonPhase) -> bool {
    match phase {
        ButtonPhase::Pressed => button.is_pressed(source),
        ButtonPhase::Held => button.is_held(source),
        ButtonPhase::Released => button.is_released(source),
        ButtonPhase::PressedAndHeld => button.is_pressed_and_held(source),
    }
}

/// A named logical user intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputAction {
    name: String,
    #[serde(default)]
    pub description: String,
    /// Keyboard keys by name, per phase.
    #[serde(default)]
    pub keys: PhaseLists<String>,
    #[serde(default)]
    pub buttons: PhaseLists<InputButton>,
    #[serde(default)]
    pub axes: RoleLists,
}

impl InputAction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            keys: PhaseLists::default(),
            buttons: PhaseLists::default(),
            axes: RoleLists::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_key(mut self, phase: ButtonPhase, key: impl Into<String>) -> Self {
        self.keys.get_mut(phase).push(key.into());
        self
    }

    pub fn with_button(mut self, phase: ButtonPhase, button: InputButton) -> Self {
        self.buttons.get_mut(phase).push(button);
        self
    }

    pub fn with_axis(mut self, role: AxisRole, axis: InputAxis) -> Self {
        self.axes.get_mut(role).push(axis);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the action, refusing any name already held by `registry`.
    ///
    /// For an action that already lives in the registry use
    /// [`ActionRegistry::rename_input_action`].
    pub fn set_name(&mut self, name: impl Into<String>, registry: &ActionRegistry) -> Result<()> {
        let name = name.into();
        if registry.is_action_registered(&name) {
            return Err(Error::DuplicateName(name));
        }
        self.name = name;
        Ok(())
    }

    /// Renames without a uniqueness check. The registry calls this after
    /// doing its own check.
    pub(crate) fn rename_unchecked(&mut self, name: String) {
        self.name = name;
    }

    /// Moves the action into `registry`. Returns `false` on a name collision.
    pub fn register(self, registry: &mut ActionRegistry) -> bool {
        registry.add_input_action(self)
    }

    /// Removes the registered action with this name. Returns `false` if absent.
    pub fn deregister(&self, registry: &mut ActionRegistry) -> bool {
        registry.remove_input_action(self)
    }

    // -- keys ---------------------------------------------------------------

    fn any_key(&self, source: &dyn InputSource, phase: ButtonPhase) -> bool {
        self.keys
            .get(phase)
            .iter()
            .any(|key| key_in_phase(source, key, phase))
    }

    pub fn is_key_pressed(&self, source: &dyn InputSource) -> bool {
        self.any_key(source, ButtonPhase::Pressed)
    }

    pub fn is_key_held(&self, source: &dyn InputSource) -> bool {
        self.any_key(source, ButtonPhase::Held)
    }

    pub fn is_key_released(&self, source: &dyn InputSource) -> bool {
        self.any_key(source, ButtonPhase::Released)
    }

    pub fn is_key_pressed_and_held(&self, source: &dyn InputSource) -> bool {
        self.any_key(source, ButtonPhase::PressedAndHeld)
    }

    pub fn has_key_fired(&self, source: &dyn InputSource) -> bool {
        ButtonPhase::ALL
            .iter()
            .any(|&phase| self.any_key(source, phase))
    }

    // -- buttons ------------------------------------------------------------

    fn any_button(&self, source: &dyn InputSource, phase: ButtonPhase) -> bool {
        any_button(self.buttons.get(phase), source, |button, source| {
            button_in_phase(button, source, phase)
        })
    }

    pub fn is_button_pressed(&self, source: &dyn InputSource) -> bool {
        self.any_button(source, ButtonPhase::Pressed)
    }

    pub fn is_button_held(&self, source: &dyn InputSource) -> bool {
        self.any_button(source, ButtonPhase::Held)
    }

    pub fn is_button_released(&self, source: &dyn InputSource) -> bool {
        self.any_button(source, ButtonPhase::Released)
    }

    pub fn is_button_pressed_and_held(&self, source: &dyn InputSource) -> bool {
        self.any_button(source, ButtonPhase::PressedAndHeld)
    }

    pub fn has_button_fired(&self, source: &dyn InputSource) -> bool {
        ButtonPhase::ALL
            .iter()
            .any(|&phase| self.any_button(source, phase))
    }

    /// Some configured button, in any phase list, was pressed and released
    /// within this poll.
    pub fn is_button_clicked(&self, source: &dyn InputSource) -> bool {
        ButtonPhase::ALL
            .iter()
            .any(|&phase| any_button(self.buttons.get(phase), source, InputButton::is_clicked))
    }

    /// First non-zero button value, scanning pressed, held, pressed-and-held,
    /// then released. `0` when no button has fired.
    pub fn button_value(&self, source: &dyn InputSource) -> f32 {
        if !self.has_button_fired(source) {
            return 0.0;
        }
        [
            ButtonPhase::Pressed,
            ButtonPhase::Held,
            ButtonPhase::PressedAndHeld,
            ButtonPhase::Released,
        ]
        .iter()
        .flat_map(|&phase| self.buttons.get(phase))
        .map(|button| button.value(source))
        .find(|&v| v != 0.0)
        .unwrap_or(0.0)
    }

    // -- axes ---------------------------------------------------------------

    /// At least one axis is configured in any role.
    pub fn has_axis(&self) -> bool {
        AxisRole::ALL
            .iter()
            .any(|&role| !self.axes.get(role).is_empty())
    }

    /// Every axis in `role` is at rest. An empty role is at rest.
    pub fn is_axis_at_rest(&self, role: AxisRole, source: &dyn InputSource) -> bool {
        self.axes
            .get(role)
            .iter()
            .all(|axis| axis.is_at_rest(source))
    }

    pub fn has_axis_fired(&self, source: &dyn InputSource) -> bool {
        self.has_axis()
            && AxisRole::ALL
                .iter()
                .any(|&role| !self.is_axis_at_rest(role, source))
    }

    /// Largest-magnitude scalar across the role's axes.
    pub fn axis_value(&self, role: AxisRole, source: &dyn InputSource) -> f32 {
        let reads_x = role.reads_x();
        max_magnitude(
            self.axes
                .get(role)
                .iter()
                .map(|axis| axis.value_for(source, reads_x)),
        )
    }

    pub fn raw_axis_value(&self, role: AxisRole, source: &dyn InputSource) -> f32 {
        let reads_x = role.reads_x();
        max_magnitude(
            self.axes
                .get(role)
                .iter()
                .map(|axis| axis.raw_value_for(source, reads_x)),
        )
    }

    /// Longest vector across the role's 2D axes; 1D axes do not take part.
    pub fn axis_value_2d(&self, role: AxisRole, source: &dyn InputSource) -> Vec2 {
        max_magnitude_2d(
            self.axes
                .get(role)
                .iter()
                .filter_map(|axis| axis.value_2d(source).ok()),
        )
    }

    pub fn raw_axis_value_2d(&self, role: AxisRole, source: &dyn InputSource) -> Vec2 {
        max_magnitude_2d(
            self.axes
                .get(role)
                .iter()
                .filter_map(|axis| axis.raw_value_2d(source).ok()),
        )
    }

    pub fn x_axis_value(&self, source: &dyn InputSource) -> f32 {
        self.axis_value(AxisRole::X, source)
    }

    pub fn y_axis_value(&self, source: &dyn InputSource) -> f32 {
        self.axis_value(AxisRole::Y, source)
    }

    pub fn z_axis_value(&self, source: &dyn InputSource) -> f32 {
        self.axis_value(AxisRole::Z, source)
    }

    pub fn pitch_axis_value(&self, source: &dyn InputSource) -> f32 {
        self.axis_value(AxisRole::Pitch, source)
    }

    pub fn yaw_axis_value(&self, source: &dyn InputSource) -> f32 {
        self.axis_value(AxisRole::Yaw, source)
    }

    pub fn left_trigger_value(&self, source: &dyn InputSource) -> f32 {
        self.axis_value(AxisRole::LeftTrigger, source)
    }

    pub fn right_trigger_value(&self, source: &dyn InputSource) -> f32 {
        self.axis_value(AxisRole::RightTrigger, source)
    }

    // -- aggregate ----------------------------------------------------------

    /// Any key, button or axis is active this frame.
    pub fn has_fired(&self, source: &dyn InputSource) -> bool {
        self.has_key_fired(source) || self.has_button_fired(source) || self.has_axis_fired(source)
    }
}

impl PartialEq for InputAction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for InputAction {}

impl Hash for InputAction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
