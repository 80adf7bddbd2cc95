//! Scanner configuration.
//!
//! Options deserialize from a camelCase JSON object so they can live next
//! to the rest of a project's configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Extra columns a tab costs on top of the usual one per character.
pub const DEFAULT_TAB_EXTRA_COLUMNS: u32 = 4;

/// Options controlling how the scanner reports positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ScannerOptions {
    /// Flat number of columns added for each tab, before the per-character
    /// increment. This is not a tab-stop model: a tab always costs
    /// `tab_extra_columns + 1` columns wherever it appears.
    pub tab_extra_columns: u32,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            tab_extra_columns: DEFAULT_TAB_EXTRA_COLUMNS,
        }
    }
}

impl ScannerOptions {
    /// Parse options from JSON. Missing keys take their defaults.
    pub fn from_json(text: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, OptionsError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Errors raised while loading [`ScannerOptions`].
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid scanner options: {0}")]
    Json(#[from] serde_json::Error),
}
