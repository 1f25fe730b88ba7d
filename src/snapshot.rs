//! Per-frame view of every reported control.
//!
//! [`FrameState`] is the stock [`InputSource`]: devices feed it [`InputEvent`]s
//! (or the host writes readings directly) and probes read from it.
//!
//! # Semantics
//! - [`FrameState::begin_frame`] clears the `pressed`/`released` edges. `held`
//!   and axis readings persist until the next event for that control.
//! - A press sets `pressed` and `held`; a release sets `released` and clears `held`.
//!   Both edges can land in one frame, which is the only way `clicked` is seen.
//! - Unknown controls read as released and zero.
//!
//! ```
//! use actionrig::{ControlPath, FrameState, InputSource};
//!
//! let mut frame = FrameState::default();
//! frame.press(&ControlPath::key("Space"));
//! assert!(frame.is_key_pressed("Space"));
//!
//! frame.begin_frame();
//! assert!(!frame.is_key_pressed("Space"));
//! assert!(frame.is_key_held("Space"));
//! ```

use glam::Vec2;
use std::collections::HashMap;

use crate::binding::ControlPath;
use crate::event::{InputEvent, InputKind};
use crate::source::{ButtonState, InputSource};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct AxisReading<T> {
    value: T,
    raw: T,
}

/// Last-known state of all controls (`ControlPath → reading`).
#[derive(Clone, Debug, Default)]
pub struct FrameState {
    buttons: HashMap<ControlPath, ButtonState>,
    axes: HashMap<ControlPath, AxisReading<f32>>,
    axes_2d: HashMap<ControlPath, AxisReading<Vec2>>,
}

impl FrameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new frame: drops per-frame edges, keeps held buttons and axes.
    pub fn begin_frame(&mut self) {
        self.buttons.retain(|_, state| {
            state.pressed = false;
            state.released = false;
            state.held
        });
    }

    /// Folds one event into the current frame.
    pub fn apply(&mut self, event: &InputEvent) {
        match &event.kind {
            InputKind::ButtonPressed { control } => self.press(control),
            InputKind::ButtonReleased { control } => self.release(control),
            InputKind::AxisMoved {
                control,
                value,
                raw,
            } => self.set_axis_raw(control.clone(), *value, *raw),
            InputKind::Axis2dMoved {
                control,
                value,
                raw,
            } => self.set_axis_2d_raw(control.clone(), *value, *raw),
        }
    }

    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a InputEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    pub fn press(&mut self, control: &ControlPath) {
        let state = self.buttons.entry(control.clone()).or_default();
        state.pressed = true;
        state.held = true;
    }

    pub fn release(&mut self, control: &ControlPath) {
        let state = self.buttons.entry(control.clone()).or_default();
        state.released = true;
        state.held = false;
    }

    /// Overwrites a button's state for this frame.
    pub fn set_button(&mut self, control: ControlPath, state: ButtonState) {
        self.buttons.insert(control, state);
    }

    /// Sets a 1D axis whose smoothed and raw readings agree.
    pub fn set_axis(&mut self, control: ControlPath, value: f32) {
        self.set_axis_raw(control, value, value);
    }

    pub fn set_axis_raw(&mut self, control: ControlPath, value: f32, raw: f32) {
        self.axes.insert(control, AxisReading { value, raw });
    }

    pub fn set_axis_2d(&mut self, control: ControlPath, value: Vec2) {
        self.set_axis_2d_raw(control, value, value);
    }

    pub fn set_axis_2d_raw(&mut self, control: ControlPath, value: Vec2, raw: Vec2) {
        self.axes_2d.insert(control, AxisReading { value, raw });
    }

    /// Forgets every reading (scene teardown).
    pub fn clear(&mut self) {
        self.buttons.clear();
        self.axes.clear();
        self.axes_2d.clear();
    }

    /// Number of controls with a live reading.
    pub fn len(&self) -> usize {
        self.buttons.len() + self.axes.len() + self.axes_2d.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl InputSource for FrameState {
    fn button(&self, control: &ControlPath) -> ButtonState {
        self.buttons.get(control).copied().unwrap_or_default()
    }

    fn axis(&self, control: &ControlPath) -> f32 {
        self.axes.get(control).map(|r| r.value).unwrap_or(0.0)
    }

    fn raw_axis(&self, control: &ControlPath) -> f32 {
        self.axes.get(control).map(|r| r.raw).unwrap_or(0.0)
    }

    fn axis_2d(&self, control: &ControlPath) -> Vec2 {
        self.axes_2d.get(control).map(|r| r.value).unwrap_or(Vec2::ZERO)
    }

    fn raw_axis_2d(&self, control: &ControlPath) -> Vec2 {
        self.axes_2d.get(control).map(|r| r.raw).unwrap_or(Vec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{Hand, MouseButton};

    #[test]
    fn press_then_release_across_frames() {
        let mut frame = FrameState::new();
        let trigger = ControlPath::steamvr(Hand::Right, "trigger");

        frame.apply(&InputEvent::now(InputKind::ButtonPressed {
            control: trigger.clone(),
        }));
        assert_eq!(
            frame.button(&trigger),
            ButtonState {
                pressed: true,
                held: true,
                released: false
            }
        );

        frame.begin_frame();
        assert_eq!(
            frame.button(&trigger),
            ButtonState {
                pressed: false,
                held: true,
                released: false
            }
        );

        frame.begin_frame();
        frame.apply(&InputEvent::now(InputKind::ButtonReleased {
            control: trigger.clone(),
        }));
        assert!(frame.button(&trigger).released);
        assert!(!frame.button(&trigger).held);

        frame.begin_frame();
        assert_eq!(frame.button(&trigger), ButtonState::RELEASED);
    }

    #[test]
    fn press_and_release_in_one_frame_is_a_click() {
        let mut frame = FrameState::new();
        let left = ControlPath::mouse(MouseButton::Left);
        frame.press(&left);
        frame.release(&left);
        assert!(frame.button(&left).clicked());
        assert!(frame.is_mouse_released(MouseButton::Left));
        assert!(!frame.is_mouse_held(MouseButton::Left));
    }

    #[test]
    fn axes_persist_across_frames() {
        let mut frame = FrameState::new();
        let stick = ControlPath::gamepad("Horizontal");
        frame.set_axis_raw(stick.clone(), 0.4, 0.5);
        frame.begin_frame();
        assert_eq!(frame.axis(&stick), 0.4);
        assert_eq!(frame.raw_axis(&stick), 0.5);

        let pad = ControlPath::steamvr(Hand::Left, "touchpad");
        frame.set_axis_2d(pad.clone(), Vec2::new(0.1, -0.2));
        assert_eq!(frame.axis_2d(&pad), Vec2::new(0.1, -0.2));
        assert_eq!(frame.raw_axis_2d(&pad), Vec2::new(0.1, -0.2));
    }

    #[test]
    fn unknown_controls_read_neutral() {
        let frame = FrameState::new();
        assert_eq!(frame.button(&ControlPath::key("Q")), ButtonState::RELEASED);
        assert_eq!(frame.axis(&ControlPath::mouse_axis("Mouse X")), 0.0);
        assert_eq!(frame.axis_2d(&ControlPath::gamepad("Stick")), Vec2::ZERO);
        assert!(frame.is_empty());
    }

    #[test]
    fn clear_forgets_everything() {
        let mut frame = FrameState::new();
        frame.press(&ControlPath::key("W"));
        frame.set_axis(ControlPath::gamepad("Vertical"), 1.0);
        assert_eq!(frame.len(), 2);
        frame.clear();
        assert!(frame.is_empty());
    }
}
