//! Typed notifications for fired actions.
//!
//! The frame driver emits one [`ActionEvent`] per fired action; subscribers
//! implement [`ActionListener`] and are registered with an [`ActionEventBus`].
//! Listener lifetime is explicit: `add_listener` hands back an id that
//! `remove_listener` takes.

use std::collections::BTreeMap;
use std::time::Instant;

/// What happened to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionEventKind {
    /// The action fired this frame.
    Started,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionEvent {
    /// Name of the action.
    pub action: String,
    pub kind: ActionEventKind,
    pub at: Instant,
}

impl ActionEvent {
    pub fn started(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            kind: ActionEventKind::Started,
            at: Instant::now(),
        }
    }
}

/// Reacts to action notifications.
pub trait ActionListener {
    fn on_action(&mut self, event: &ActionEvent);
}

/// Determines which events a listener receives.
#[derive(Debug, Clone, Copy)]
pub enum EventFilter {
    All,
    StartedOnly,
    Custom(fn(&ActionEvent) -> bool),
}

impl EventFilter {
    fn accepts(&self, event: &ActionEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::StartedOnly => event.kind == ActionEventKind::Started,
            EventFilter::Custom(f) => f(event),
        }
    }
}

/// Handle returned by [`ActionEventBus::add_listener`].
pub type ListenerId = u64;

struct ListenerEntry {
    listener: Box<dyn ActionListener>,
    enabled: bool,
    filter: EventFilter,
    /// Only deliver events for this action name.
    tag: Option<String>,
}

/// Dispatches action events to listeners in registration order.
#[derive(Default)]
pub struct ActionEventBus {
    next_id: ListenerId,
    listeners: BTreeMap<ListenerId, ListenerEntry>,
}

impl ActionEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener with a filter and optional action-name tag.
    pub fn add_listener(
        &mut self,
        listener: impl ActionListener + 'static,
        filter: EventFilter,
        tag: Option<String>,
    ) -> ListenerId {
        let id = self.next_id;
        self.listeners.insert(
            id,
            ListenerEntry {
                listener: Box::new(listener),
                enabled: true,
                filter,
                tag,
            },
        );
        self.next_id += 1;
        id
    }

    pub fn enable(&mut self, id: ListenerId) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = true;
        }
    }

    /// Mutes a listener without removing it.
    pub fn disable(&mut self, id: ListenerId) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = false;
        }
    }

    /// Returns `false` if the id was unknown.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Delivers one event to every enabled, matching listener.
    pub fn emit(&mut self, event: &ActionEvent) {
        for entry in self.listeners.values_mut() {
            if !entry.enabled {
                continue;
            }
            if let Some(ref wanted) = entry.tag {
                if event.action != *wanted {
                    continue;
                }
            }
            if entry.filter.accepts(event) {
                entry.listener.on_action(event);
            }
        }
    }

    pub fn emit_all(&mut self, events: &[ActionEvent]) {
        for event in events {
            self.emit(event);
        }
    }
}

/// Any closure over an event is a listener.
impl<F> ActionListener for F
where
    F: FnMut(&ActionEvent),
{
    fn on_action(&mut self, event: &ActionEvent) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&ActionEvent) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |e: &ActionEvent| {
            sink.borrow_mut().push(e.action.clone())
        })
    }

    #[test]
    fn tagged_listener_only_sees_its_action() {
        let mut bus = ActionEventBus::new();
        let (all, all_listener) = recorder();
        let (menu, menu_listener) = recorder();
        bus.add_listener(all_listener, EventFilter::All, None);
        bus.add_listener(menu_listener, EventFilter::StartedOnly, Some("Menu".into()));

        bus.emit_all(&[ActionEvent::started("Move"), ActionEvent::started("Menu")]);

        assert_eq!(*all.borrow(), ["Move", "Menu"]);
        assert_eq!(*menu.borrow(), ["Menu"]);
    }

    #[test]
    fn disabled_and_removed_listeners_are_skipped() {
        let mut bus = ActionEventBus::new();
        let (seen, listener) = recorder();
        let id = bus.add_listener(listener, EventFilter::All, None);

        bus.disable(id);
        bus.emit(&ActionEvent::started("Move"));
        assert!(seen.borrow().is_empty());

        bus.enable(id);
        bus.emit(&ActionEvent::started("Move"));
        assert_eq!(seen.borrow().len(), 1);

        assert!(bus.remove_listener(id));
        assert!(!bus.remove_listener(id));
        bus.emit(&ActionEvent::started("Move"));
        assert_eq!(seen.borrow().len(), 1);
        assert!(bus.is_empty());
    }

    #[test]
    fn custom_filter() {
        fn only_rotate(e: &ActionEvent) -> bool {
            e.action.starts_with("Rotate")
        }

        let mut bus = ActionEventBus::new();
        let (seen, listener) = recorder();
        bus.add_listener(listener, EventFilter::Custom(only_rotate), None);
        bus.emit_all(&[
            ActionEvent::started("RotateLeft"),
            ActionEvent::started("Move"),
        ]);
        assert_eq!(*seen.borrow(), ["RotateLeft"]);
    }
}
