use log::info;

use crate::eventbus::{ActionEvent, ActionListener};

/// A listener that logs every action event at `info` level.
#[derive(Debug, Default)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Logger
    }
}

impl ActionListener for Logger {
    fn on_action(&mut self, event: &ActionEvent) {
        info!("[Action] {} {:?}", event.action, event.kind);
    }
}
