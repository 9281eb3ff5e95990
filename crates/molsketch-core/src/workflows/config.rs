use super::error::SketchError;
use serde::Deserialize;

pub const DEFAULT_BOND_LENGTH: f64 = 40.0;
pub const DEFAULT_GROW_LABEL: &str = "C";

/// Settings for a [`SketchSession`](super::sketch::SketchSession).
///
/// Deserializes from kebab-case TOML keys; missing keys fall back to the
/// defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case", default)]
pub struct SketchConfig {
    /// Length of a drawn bond, in screen units.
    pub bond_length: f64,
    /// Element label given to atoms created by growing a bond.
    pub grow_label: String,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            bond_length: DEFAULT_BOND_LENGTH,
            grow_label: DEFAULT_GROW_LABEL.to_string(),
        }
    }
}

impl SketchConfig {
    pub fn validate(&self) -> Result<(), SketchError> {
        if !self.bond_length.is_finite() || self.bond_length <= 0.0 {
            return Err(SketchError::InvalidBondLength(self.bond_length));
        }
        Ok(())
    }
}
