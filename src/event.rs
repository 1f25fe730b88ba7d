//! Raw input deltas.
//!
//! Devices describe changes as small deltas ([`InputKind`]) keyed by
//! [`ControlPath`], timestamped into an [`InputEvent`] when captured.
//!
//! ## Value conventions
//! - **Sticks and triggers:** normalized to `[-1.0, 1.0]` (triggers `[0.0, 1.0]`).
//! - **Buttons:** boolean state expressed as press/release edges.
//! - **Mouse motion:** host units per frame; not normalized.
//!
//! Axis events carry both a `value` (host-smoothed) and a `raw` reading. Hosts
//! without smoothing report the same number twice.

use glam::Vec2;
use std::time::Instant;

use crate::binding::ControlPath;

/// Per-control input change.
#[derive(Clone, Debug, PartialEq)]
pub enum InputKind {
    /// A button transitioned to pressed.
    ButtonPressed { control: ControlPath },

    /// A button transitioned to released.
    ButtonReleased { control: ControlPath },

    /// A one-dimensional channel changed.
    AxisMoved {
        control: ControlPath,
        value: f32,
        raw: f32,
    },

    /// A two-dimensional channel (thumbstick, touchpad) changed.
    Axis2dMoved {
        control: ControlPath,
        value: Vec2,
        raw: Vec2,
    },
}

impl InputKind {
    pub fn control(&self) -> &ControlPath {
        match self {
            InputKind::ButtonPressed { control }
            | InputKind::ButtonReleased { control }
            | InputKind::AxisMoved { control, .. }
            | InputKind::Axis2dMoved { control, .. } => control,
        }
    }
}

/// Timestamped input event captured from a device.
#[derive(Clone, Debug)]
pub struct InputEvent {
    /// Capture time (monotonic).
    pub at: Instant,
    pub kind: InputKind,
}

impl InputEvent {
    /// Stamps `kind` with the current instant.
    pub fn now(kind: InputKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }
}
