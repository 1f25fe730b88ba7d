//! The action registry.
//!
//! [`ActionRegistry`] holds the currently live [`InputAction`]s in insertion
//! order. Names are unique; the check happens when an action is added or
//! renamed, never at lookup time. Lookups are linear scans, which is fine for
//! the tens of actions a scene defines.
//!
//! The registry is an ordinary value owned by whoever drives the frame loop
//! (usually [`InputManager`](crate::manager::InputManager)). `initialize` and
//! `shutdown` bracket a scene.

use log::{debug, info, warn};

use crate::action::InputAction;
use crate::error::{Error, Result};
use crate::source::InputSource;

#[derive(Debug, Default)]
pub struct ActionRegistry {
    actions: Vec<InputAction>,
    initialized: bool,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a scene. Actions added beforehand are kept.
    pub fn initialize(&mut self) {
        self.initialized = true;
        info!(
            "action registry initialized with {} action(s)",
            self.actions.len()
        );
    }

    /// Tears the scene down, dropping every registered action.
    pub fn shutdown(&mut self) {
        info!(
            "action registry shut down, dropping {} action(s)",
            self.actions.len()
        );
        self.actions.clear();
        self.initialized = false;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Appends `action`. Returns `false` and leaves the registry untouched if
    /// the name is taken.
    pub fn add_input_action(&mut self, action: InputAction) -> bool {
        if self.is_action_registered(action.name()) {
            warn!("input action `{}` is already registered", action.name());
            return false;
        }
        debug!("registered input action `{}`", action.name());
        self.actions.push(action);
        true
    }

    /// Removes the registered action equal to `action` (same name).
    pub fn remove_input_action(&mut self, action: &InputAction) -> bool {
        self.remove_input_action_named(action.name())
    }

    pub fn remove_input_action_named(&mut self, name: &str) -> bool {
        match self.actions.iter().position(|a| a.name() == name) {
            Some(index) => {
                self.actions.remove(index);
                debug!("removed input action `{name}`");
                true
            }
            None => false,
        }
    }

    /// Removes by position.
    ///
    /// The bound check is against the list's capacity, not its length, so an
    /// index between the two passes the check and then fails with
    /// [`Error::IndexOutOfRange`]. Indices at or past the capacity return
    /// `Ok(false)`.
    pub fn remove_input_action_at(&mut self, index: usize) -> Result<bool> {
        if index >= self.actions.capacity() {
            return Ok(false);
        }
        if index >= self.actions.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.actions.len(),
            });
        }
        let removed = self.actions.remove(index);
        debug!("removed input action `{}` at {index}", removed.name());
        Ok(true)
    }

    /// Renames a registered action. Fails if `new_name` is taken; a missing
    /// `old_name` is `Ok(false)`.
    pub fn rename_input_action(&mut self, old_name: &str, new_name: &str) -> Result<bool> {
        if self.is_action_registered(new_name) {
            return Err(Error::DuplicateName(new_name.to_string()));
        }
        match self.find_mut(old_name) {
            Some(action) => {
                action.rename_unchecked(new_name.to_string());
                debug!("renamed input action `{old_name}` to `{new_name}`");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn get_input_action(&self, name: &str) -> Option<&InputAction> {
        self.actions.iter().find(|a| a.name() == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut InputAction> {
        self.actions.iter_mut().find(|a| a.name() == name)
    }

    /// Runs `edit` on the registered action called `name`, returning its
    /// result, or `None` if no such action exists.
    ///
    /// The action keeps its name: if `edit` renames or replaces it, the old
    /// name is put back. Renaming goes through
    /// [`rename_input_action`](Self::rename_input_action).
    pub fn edit_input_action<R>(
        &mut self,
        name: &str,
        edit: impl FnOnce(&mut InputAction) -> R,
    ) -> Option<R> {
        let action = self.find_mut(name)?;
        let result = edit(action);
        if action.name() != name {
            warn!(
                "edit renamed input action `{name}` to `{}`; name restored",
                action.name()
            );
            action.rename_unchecked(name.to_string());
        }
        Some(result)
    }

    pub fn is_action_registered(&self, name: &str) -> bool {
        self.get_input_action(name).is_some()
    }

    /// Registered actions in insertion order.
    pub fn input_action_list(&self) -> &[InputAction] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Actions that fired this frame, in registry order.
    pub fn fired<'a>(
        &'a self,
        source: &'a dyn InputSource,
    ) -> impl Iterator<Item = &'a InputAction> + 'a {
        self.actions.iter().filter(move |a| a.has_fired(source))
    }
}
