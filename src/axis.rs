//! Logical axes.
//!
//! An [`InputAxis`] is a named analog source of one or two dimensions. It owns
//! only configuration (rest values, optional bounds); readings come from the
//! [`InputSource`] on every call.
//!
//! The scalar accessors ([`InputAxis::value`], [`InputAxis::raw_value`]) only
//! accept 1D axes and the vector accessors only accept 2D ones. Anything else
//! is a [`Error::DimensionMismatch`]. [`InputAxis::value_for`] reads either kind
//! as a scalar.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::binding::ControlPath;
use crate::button::ButtonProbe;
use crate::error::{Error, Result};
use crate::source::InputSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimensions {
    One,
    Two,
}

/// Where an axis reads from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "source")]
pub enum AxisProbe {
    /// A host-reported analog control (stick, trigger, touchpad, mouse motion).
    Control(ControlPath),
    /// A 1D axis built from two buttons. Reads `1` while only `positive` is
    /// held, `-1` while only `negative` is held, `0` otherwise.
    Buttons {
        negative: ButtonProbe,
        positive: ButtonProbe,
    },
}

impl AxisProbe {
    fn from_buttons(
        source: &dyn InputSource,
        negative: &ButtonProbe,
        positive: &ButtonProbe,
    ) -> f32 {
        match (negative.state(source).held, positive.state(source).held) {
            (false, true) => 1.0,
            (true, false) => -1.0,
            _ => 0.0,
        }
    }
}

fn default_rest_values() -> Vec<f32> {
    vec![0.0]
}

/// A named analog input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputAxis {
    pub name: String,
    pub probe: AxisProbe,
    pub dimensions: Dimensions,
    /// Readings treated as "no input". For 2D axes both components must match.
    #[serde(default = "default_rest_values")]
    pub rest_values: Vec<f32>,
    #[serde(default)]
    pub min: Option<f32>,
    #[serde(default)]
    pub max: Option<f32>,
}

impl InputAxis {
    pub fn new(name: impl Into<String>, probe: AxisProbe, dimensions: Dimensions) -> Self {
        Self {
            name: name.into(),
            probe,
            dimensions,
            rest_values: default_rest_values(),
            min: None,
            max: None,
        }
    }

    /// 1D axis over a host control.
    pub fn scalar(name: impl Into<String>, control: ControlPath) -> Self {
        Self::new(name, AxisProbe::Control(control), Dimensions::One)
    }

    /// 2D axis over a host control.
    pub fn vector(name: impl Into<String>, control: ControlPath) -> Self {
        Self::new(name, AxisProbe::Control(control), Dimensions::Two)
    }

    /// 1D axis driven by a negative/positive button pair.
    pub fn buttons(
        name: impl Into<String>,
        negative: ButtonProbe,
        positive: ButtonProbe,
    ) -> Self {
        Self::new(
            name,
            AxisProbe::Buttons { negative, positive },
            Dimensions::One,
        )
    }

    pub fn with_rest_values(mut self, rest_values: impl Into<Vec<f32>>) -> Self {
        self.rest_values = rest_values.into();
        self
    }

    pub fn with_min(mut self, min: f32) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f32) -> Self {
        self.max = Some(max);
        self
    }

    #[inline]
    pub fn has_min(&self) -> bool {
        self.min.is_some()
    }

    #[inline]
    pub fn has_max(&self) -> bool {
        self.max.is_some()
    }

    fn require(&self, expected: Dimensions) -> Result<()> {
        if self.dimensions == expected {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                axis: self.name.clone(),
                expected,
                found: self.dimensions,
            })
        }
    }

    fn read_1d(&self, source: &dyn InputSource, raw: bool) -> f32 {
        match &self.probe {
            AxisProbe::Control(control) if raw => source.raw_axis(control),
            AxisProbe::Control(control) => source.axis(control),
            AxisProbe::Buttons { negative, positive } => {
                AxisProbe::from_buttons(source, negative, positive)
            }
        }
    }

    fn read_2d(&self, source: &dyn InputSource, raw: bool) -> Vec2 {
        match &self.probe {
            AxisProbe::Control(control) if raw => source.raw_axis_2d(control),
            AxisProbe::Control(control) => source.axis_2d(control),
            AxisProbe::Buttons { negative, positive } => {
                Vec2::new(AxisProbe::from_buttons(source, negative, positive), 0.0)
            }
        }
    }

    /// Current reading of a 1D axis.
    pub fn value(&self, source: &dyn InputSource) -> Result<f32> {
        self.require(Dimensions::One)?;
        Ok(self.read_1d(source, false))
    }

    pub fn raw_value(&self, source: &dyn InputSource) -> Result<f32> {
        self.require(Dimensions::One)?;
        Ok(self.read_1d(source, true))
    }

    /// Current reading of a 2D axis.
    pub fn value_2d(&self, source: &dyn InputSource) -> Result<Vec2> {
        self.require(Dimensions::Two)?;
        Ok(self.read_2d(source, false))
    }

    pub fn raw_value_2d(&self, source: &dyn InputSource) -> Result<Vec2> {
        self.require(Dimensions::Two)?;
        Ok(self.read_2d(source, true))
    }

    /// Scalar reading of either kind: the value of a 1D axis, or the `x`
    /// (`return_x`) or `y` component of a 2D axis.
    pub fn value_for(&self, source: &dyn InputSource, return_x: bool) -> f32 {
        self.component(source, return_x, false)
    }

    pub fn raw_value_for(&self, source: &dyn InputSource, return_x: bool) -> f32 {
        self.component(source, return_x, true)
    }

    fn component(&self, source: &dyn InputSource, return_x: bool, raw: bool) -> f32 {
        match self.dimensions {
            Dimensions::One => self.read_1d(source, raw),
            Dimensions::Two => {
                let v = self.read_2d(source, raw);
                if return_x {
                    v.x
                } else {
                    v.y
                }
            }
        }
    }

    fn is_rest_value(&self, v: f32) -> bool {
        self.rest_values
            .iter()
            .any(|rest| (rest - v).abs() <= f32::EPSILON)
    }

    pub fn is_at_rest(&self, source: &dyn InputSource) -> bool {
        match self.dimensions {
            Dimensions::One => self.is_rest_value(self.read_1d(source, false)),
            Dimensions::Two => {
                let v = self.read_2d(source, false);
                self.is_rest_value(v.x) && self.is_rest_value(v.y)
            }
        }
    }

    /// Whether any component of the current reading satisfies `hit`.
    fn any_component(&self, source: &dyn InputSource, hit: impl Fn(f32) -> bool) -> bool {
        match self.dimensions {
            Dimensions::One => hit(self.read_1d(source, false)),
            Dimensions::Two => {
                let v = self.read_2d(source, false);
                hit(v.x) || hit(v.y)
            }
        }
    }

    /// At or below the configured minimum. A 2D axis is there once either
    /// component is. Always `false` without a minimum.
    pub fn is_at_min(&self, source: &dyn InputSource) -> bool {
        self.min
            .is_some_and(|min| self.any_component(source, |v| v <= min))
    }

    /// At or above the configured maximum, per component like
    /// [`is_at_min`](Self::is_at_min).
    pub fn is_at_max(&self, source: &dyn InputSource) -> bool {
        self.max
            .is_some_and(|max| self.any_component(source, |v| v >= max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::Hand;
    use crate::snapshot::FrameState;

    #[test]
    fn scalar_accessor_on_1d_axis() {
        let mut frame = FrameState::new();
        let control = ControlPath::gamepad("Horizontal");
        frame.set_axis_raw(control.clone(), 0.25, 0.3);

        let axis = InputAxis::scalar("Horizontal", control);
        assert_eq!(axis.value(&frame).unwrap(), 0.25);
        assert_eq!(axis.raw_value(&frame).unwrap(), 0.3);
    }

    #[test]
    fn vector_accessor_on_1d_axis_is_a_dimension_error() {
        let axis = InputAxis::scalar("Horizontal", ControlPath::gamepad("Horizontal"));
        let frame = FrameState::new();
        let err = axis.value_2d(&frame).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: Dimensions::Two,
                found: Dimensions::One,
                ..
            }
        ));
        assert!(axis.raw_value_2d(&frame).is_err());
    }

    #[test]
    fn scalar_accessor_on_2d_axis_is_a_dimension_error() {
        let axis = InputAxis::vector("Pad", ControlPath::steamvr(Hand::Left, "touchpad"));
        let frame = FrameState::new();
        assert!(matches!(
            axis.value(&frame),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn dimension_aware_wrapper_picks_component() {
        let mut frame = FrameState::new();
        let pad = ControlPath::steamvr(Hand::Left, "touchpad");
        frame.set_axis_2d(pad.clone(), Vec2::new(0.6, -0.4));

        let axis = InputAxis::vector("Pad", pad);
        assert_eq!(axis.value_for(&frame, true), 0.6);
        assert_eq!(axis.value_for(&frame, false), -0.4);
        assert_eq!(axis.raw_value_for(&frame, false), -0.4);
    }

    #[test]
    fn button_pair_axis() {
        let mut frame = FrameState::new();
        let axis = InputAxis::buttons(
            "Strafe",
            ButtonProbe::Key("A".into()),
            ButtonProbe::Key("D".into()),
        );
        assert_eq!(axis.value(&frame).unwrap(), 0.0);

        frame.press(&ControlPath::key("D"));
        assert_eq!(axis.value(&frame).unwrap(), 1.0);

        frame.press(&ControlPath::key("A"));
        assert_eq!(axis.value(&frame).unwrap(), 0.0);

        frame.release(&ControlPath::key("D"));
        assert_eq!(axis.value(&frame).unwrap(), -1.0);
    }

    #[test]
    fn rest_and_bounds() {
        let mut frame = FrameState::new();
        let trigger = ControlPath::gamepad("Trigger");
        let axis = InputAxis::scalar("Trigger", trigger.clone())
            .with_rest_values([-1.0, 0.0])
            .with_min(-1.0)
            .with_max(1.0);

        assert!(axis.is_at_rest(&frame));
        frame.set_axis(trigger.clone(), -1.0);
        assert!(axis.is_at_rest(&frame));
        assert!(axis.is_at_min(&frame));
        assert!(!axis.is_at_max(&frame));

        frame.set_axis(trigger, 1.0);
        assert!(!axis.is_at_rest(&frame));
        assert!(axis.is_at_max(&frame));
    }

    #[test]
    fn unbounded_axis_is_never_at_a_bound() {
        let mut frame = FrameState::new();
        let control = ControlPath::mouse_axis("Mouse X");
        frame.set_axis(control.clone(), 100.0);
        let axis = InputAxis::scalar("Mouse X", control);
        assert!(!axis.has_min() && !axis.has_max());
        assert!(!axis.is_at_min(&frame));
        assert!(!axis.is_at_max(&frame));
    }

    #[test]
    fn vector_rest_needs_both_components() {
        let mut frame = FrameState::new();
        let stick = ControlPath::gamepad("LeftStick");
        let axis = InputAxis::vector("Stick", stick.clone());
        frame.set_axis_2d(stick.clone(), Vec2::new(0.0, 0.5));
        assert!(!axis.is_at_rest(&frame));
        frame.set_axis_2d(stick, Vec2::ZERO);
        assert!(axis.is_at_rest(&frame));
    }

    #[test]
    fn vector_bounds_check_each_component() {
        let mut frame = FrameState::new();
        let pad = ControlPath::steamvr(Hand::Left, "touchpad");
        let axis = InputAxis::vector("Pad", pad.clone())
            .with_min(-1.0)
            .with_max(1.0);

        frame.set_axis_2d(pad.clone(), Vec2::new(0.0, 1.0));
        assert!(axis.is_at_max(&frame));
        assert!(!axis.is_at_min(&frame));

        frame.set_axis_2d(pad.clone(), Vec2::new(-1.0, 0.3));
        assert!(axis.is_at_min(&frame));
        assert!(!axis.is_at_max(&frame));

        frame.set_axis_2d(pad, Vec2::new(0.4, -0.4));
        assert!(!axis.is_at_min(&frame) && !axis.is_at_max(&frame));
    }
}
