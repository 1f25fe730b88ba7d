//! Per-frame driver.
//!
//! [`InputManager`] ties the pieces together for hosts that want one call per
//! frame: it polls devices into a [`FrameState`], scans the [`ActionRegistry`]
//! and dispatches an [`ActionEvent`] for every fired action through the
//! [`ActionEventBus`]. Everything runs on the caller's thread.
//!
//! ```
//! use actionrig::backends::virtual_input::VirtualDevice;
//! use actionrig::{ButtonPhase, ControlPath, InputAction, InputManager};
//!
//! let mut mgr = InputManager::new();
//! mgr.registry_mut()
//!     .add_input_action(InputAction::new("Jump").with_key(ButtonPhase::Pressed, "Space"));
//! mgr.initialize();
//!
//! let mut pad = VirtualDevice::new("virtual:0", "Scripted");
//! pad.press(ControlPath::key("Space"));
//! mgr.add_device(pad);
//!
//! let fired = mgr.tick();
//! assert_eq!(fired[0].action, "Jump");
//! ```

use log::debug;

use crate::device::Device;
use crate::eventbus::{ActionEvent, ActionEventBus};
use crate::registry::ActionRegistry;
use crate::snapshot::FrameState;

pub struct InputManager {
    devices: Vec<Box<dyn Device>>,
    frame: FrameState,
    registry: ActionRegistry,
    bus: ActionEventBus,
}

impl InputManager {
    /// A manager with no devices, an empty registry and no listeners.
    pub fn new() -> Self {
        Self::with_parts(ActionRegistry::new(), ActionEventBus::new())
    }

    /// A manager over an existing registry and bus.
    pub fn with_parts(registry: ActionRegistry, bus: ActionEventBus) -> Self {
        Self {
            devices: Vec::new(),
            frame: FrameState::new(),
            registry,
            bus,
        }
    }

    pub fn add_device<D: Device + 'static>(&mut self, device: D) {
        debug!("added device {} ({})", device.name(), device.id());
        self.devices.push(Box::new(device));
    }

    pub fn devices(&self) -> &[Box<dyn Device>] {
        &self.devices
    }

    pub fn initialize(&mut self) {
        self.registry.initialize();
    }

    /// Tears down the registry and forgets all readings.
    pub fn shutdown(&mut self) {
        self.registry.shutdown();
        self.frame.clear();
    }

    /// Runs one frame and returns the events it dispatched, in registry order.
    ///
    /// Nothing is dispatched until [`initialize`](Self::initialize) has been called.
    pub fn tick(&mut self) -> Vec<ActionEvent> {
        self.frame.begin_frame();
        for device in self.devices.iter_mut() {
            for event in device.poll() {
                self.frame.apply(&event);
            }
        }

        if !self.registry.is_initialized() {
            return Vec::new();
        }

        let fired: Vec<ActionEvent> = self
            .registry
            .fired(&self.frame)
            .map(|action| ActionEvent::started(action.name()))
            .collect();
        for event in &fired {
            debug!("action `{}` started", event.action);
        }
        self.bus.emit_all(&fired);
        fired
    }

    pub fn frame(&self) -> &FrameState {
        &self.frame
    }

    /// Direct access for hosts that write readings themselves.
    pub fn frame_mut(&mut self) -> &mut FrameState {
        &mut self.frame
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ActionRegistry {
        &mut self.registry
    }

    pub fn bus(&self) -> &ActionEventBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut ActionEventBus {
        &mut self.bus
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ButtonPhase, InputAction};
    use crate::binding::ControlPath;
    use crate::source::InputSource;

    #[test]
    fn tick_before_initialize_dispatches_nothing() {
        let mut mgr = InputManager::new();
        mgr.registry_mut()
            .add_input_action(InputAction::new("Hold").with_key(ButtonPhase::Held, "H"));
        mgr.frame_mut().press(&ControlPath::key("H"));

        assert!(mgr.tick().is_empty());
        assert!(mgr.frame().is_key_held("H"));

        mgr.initialize();
        let fired = mgr.tick();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].action, "Hold");
    }

    #[test]
    fn shutdown_clears_registry_and_frame() {
        let mut mgr = InputManager::new();
        mgr.registry_mut().add_input_action(InputAction::new("a"));
        mgr.frame_mut().press(&ControlPath::key("A"));
        mgr.initialize();

        mgr.shutdown();
        assert!(mgr.registry().is_empty());
        assert!(mgr.frame().is_empty());
        assert!(!mgr.registry().is_initialized());
    }
}
