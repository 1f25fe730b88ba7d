use crate::event::InputEvent;

/// Producer of raw input events, polled once per frame.
pub trait Device {
    /// Drains the events observed since the last poll.
    fn poll(&mut self) -> Vec<InputEvent>;
    fn name(&self) -> &str;
    fn id(&self) -> &str;
}
