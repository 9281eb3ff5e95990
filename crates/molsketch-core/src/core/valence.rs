//! Bonding capacity per element label.
//!
//! Capacity decides how many slots an atom gets. The built-in table only knows
//! carbon; further labels can be supplied from TOML:
//!
//! ```toml
//! [capacities]
//! N = 3
//! O = 2
//! ```

use phf::{Map, phf_map};
use serde::Deserialize;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::path::Path;
use thiserror::Error;

static BUILTIN_CAPACITIES: Map<&'static str, usize> = phf_map! {
    "C" => 4,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ValenceFile {
    #[serde(default)]
    capacities: HashMap<String, usize>,
}

/// Label to slot-capacity lookup.
///
/// Extensions take precedence over the built-in entries, so a file may also
/// override the capacity of a built-in label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValenceTable {
    extensions: HashMap<String, NonZeroUsize>,
}

impl ValenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, ValenceLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ValenceLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ValenceLoadError> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ValenceLoadError> {
        let file: ValenceFile = toml::from_str(content).map_err(|e| ValenceLoadError::Toml {
            path: origin.to_string(),
            source: e,
        })?;

        let mut table = Self::new();
        for (label, capacity) in file.capacities {
            let capacity = NonZeroUsize::new(capacity)
                .ok_or_else(|| ValenceLoadError::InvalidCapacity { label: label.clone() })?;
            table.insert(&label, capacity);
        }
        Ok(table)
    }

    /// Registers (or overrides) the capacity for `label`, returning the
    /// previous extension entry if there was one.
    pub fn insert(&mut self, label: &str, capacity: NonZeroUsize) -> Option<NonZeroUsize> {
        self.extensions.insert(label.to_string(), capacity)
    }

    pub fn capacity(&self, label: &str) -> Option<usize> {
        self.extensions
            .get(label)
            .map(|c| c.get())
            .or_else(|| BUILTIN_CAPACITIES.get(label).copied())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.capacity(label).is_some()
    }
}

#[derive(Debug, Error)]
pub enum ValenceLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Capacity for label '{label}' must be at least 1")]
    InvalidCapacity { label: String },
}
