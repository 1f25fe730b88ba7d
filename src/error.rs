//! Error type shared by the crate.
//!
//! Misconfiguration (a duplicate action name, reading a 2D axis as a scalar) is
//! reported as an [`Error`]. Lookup misses are `Option`/`bool`, and registration
//! conflicts are a plain `bool` from the registry.

use std::path::PathBuf;
use thiserror::Error;

use crate::axis::Dimensions;

#[derive(Error, Debug)]
pub enum Error {
    /// An axis accessor was used against the wrong dimensionality.
    #[error("axis `{axis}` is {found:?}, accessor expects {expected:?}")]
    DimensionMismatch {
        axis: String,
        expected: Dimensions,
        found: Dimensions,
    },

    /// An action with this name is already registered.
    #[error("an input action named `{0}` is already registered")]
    DuplicateName(String),

    /// Index passed the capacity check but is past the live entries.
    #[error("index {index} is out of range for {len} registered action(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("failed to read profile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML profile: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to serialize profile: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("invalid JSON profile: {0}")]
    Json(#[from] serde_json::Error),

    /// Profile path has an extension other than `.toml` or `.json`.
    #[error("unsupported profile format: {0}")]
    UnsupportedFormat(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
