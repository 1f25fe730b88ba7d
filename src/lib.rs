//! Named input actions for VR and desktop scenes.
//!
//! Raw readings from keyboards, mice, gamepads and VR controllers are collected
//! into a [`FrameState`], normalized by logical [`InputButton`]s and
//! [`InputAxis`]es, and aggregated into named [`InputAction`]s held by an
//! [`ActionRegistry`]. An [`InputManager`] runs the whole pipeline once per
//! frame and notifies [`ActionListener`]s of fired actions.

pub mod action;
pub mod axis;
pub mod backends;
pub mod binding;
pub mod button;
pub mod device;
pub mod error;
pub mod event;
pub mod eventbus;
pub mod filtered_listener;
pub mod logger;
pub mod manager;
pub mod presets;
pub mod profile;
pub mod registry;
pub mod resolve;
pub mod snapshot;
pub mod source;

pub use action::*;
pub use axis::*;
pub use binding::*;
pub use button::*;
pub use device::*;
pub use error::{Error, Result};
pub use event::*;
pub use eventbus::*;
pub use manager::*;
pub use profile::*;
pub use registry::*;
pub use snapshot::*;
pub use source::*;
