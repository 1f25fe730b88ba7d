use crate::eventbus::{ActionEvent, ActionListener};

/// Wraps a listener and filters events based on a user-supplied predicate.
pub struct FilteredListener {
    predicate: Box<dyn Fn(&ActionEvent) -> bool>,
    inner: Box<dyn ActionListener>,
}

impl FilteredListener {
    pub fn new(
        predicate: impl Fn(&ActionEvent) -> bool + 'static,
        inner: impl ActionListener + 'static,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            inner: Box::new(inner),
        }
    }
}

impl ActionListener for FilteredListener {
    fn on_action(&mut self, event: &ActionEvent) {
        if (self.predicate)(event) {
            self.inner.on_action(event);
        }
    }
}
