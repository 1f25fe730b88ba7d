//! Input backends for `actionrig`.
//!
//! Implementations of [`Device`](crate::device::Device) that produce raw
//! [`InputEvent`](crate::event::InputEvent)s.
//!
//! # Feature flags
//! - **`virtual`** (default): a scripted device for tests, replays and hosts
//!   that translate their own windowing or VR runtime events.
//!
//! Platform and VR runtime readers live in the host application; it either
//! implements [`Device`](crate::device::Device) or writes readings straight
//! into a [`FrameState`](crate::snapshot::FrameState).

#[cfg(feature = "virtual")]
#[cfg_attr(docsrs, doc(cfg(feature = "virtual")))]
pub mod virtual_input;
