//! Serializable action profiles.
//!
//! An [`ActionProfile`] is a named set of [`InputAction`]s stored as TOML or
//! JSON, installed into a registry at scene start.
//!
//! ```toml
//! name = "desktop"
//!
//! [[actions]]
//! name = "Jump"
//! description = "Leave the ground"
//! keys = { pressed = ["Space"] }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::action::InputAction;
use crate::error::{Error, Result};
use crate::registry::ActionRegistry;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub actions: Vec<InputAction>,
}

impl ActionProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            actions: Vec::new(),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Reads a profile, picking the format from the extension (`.toml` or `.json`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let read = || {
            fs::read_to_string(path).map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })
        };
        let profile = match ext.as_deref() {
            Some("toml") => Self::from_toml_str(&read()?)?,
            Some("json") => Self::from_json_str(&read()?)?,
            _ => return Err(Error::UnsupportedFormat(path.to_path_buf())),
        };
        log::info!(
            "loaded profile `{}` ({} action(s)) from {}",
            profile.name,
            profile.actions.len(),
            path.display()
        );
        Ok(profile)
    }

    /// Registers every action in order. Stops at the first name collision;
    /// actions installed before it stay registered.
    pub fn install(&self, registry: &mut ActionRegistry) -> Result<usize> {
        for action in &self.actions {
            if !registry.add_input_action(action.clone()) {
                return Err(Error::DuplicateName(action.name().to_string()));
            }
        }
        Ok(self.actions.len())
    }
}
