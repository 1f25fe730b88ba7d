//! Scripted input device.

use glam::Vec2;

use crate::binding::ControlPath;
use crate::device::Device;
use crate::event::{InputEvent, InputKind};

/// Device whose events are queued by the caller and drained on [`Device::poll`].
#[derive(Debug, Default)]
pub struct VirtualDevice {
    id: String,
    name: String,
    events: Vec<InputEvent>,
}

impl VirtualDevice {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            events: Vec::new(),
        }
    }

    /// Queues a raw event.
    pub fn feed(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn press(&mut self, control: ControlPath) {
        self.feed(InputEvent::now(InputKind::ButtonPressed { control }));
    }

    pub fn release(&mut self, control: ControlPath) {
        self.feed(InputEvent::now(InputKind::ButtonReleased { control }));
    }

    pub fn set_axis(&mut self, control: ControlPath, value: f32) {
        self.set_axis_raw(control, value, value);
    }

    pub fn set_axis_raw(&mut self, control: ControlPath, value: f32, raw: f32) {
        self.feed(InputEvent::now(InputKind::AxisMoved {
            control,
            value,
            raw,
        }));
    }

    pub fn set_axis_2d(&mut self, control: ControlPath, value: Vec2) {
        self.feed(InputEvent::now(InputKind::Axis2dMoved {
            control,
            value,
            raw: value,
        }));
    }

    /// Events queued since the last poll.
    pub fn pending(&self) -> usize {
        self.events.len()
    }
}

impl Device for VirtualDevice {
    fn poll(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}
