//! Flow layout configuration.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, check_parameter};

/// Default gap between chips, both within a row and between rows.
pub const DEFAULT_CHIP_GAP: f32 = 6.0;

/// Spacing parameters for a reaction block.
///
/// `row_margin` is the horizontal gap between neighbouring chips in the same
/// row; `column_margin` is the vertical gap added below every row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub row_margin: f32,
    pub column_margin: f32,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            row_margin: DEFAULT_CHIP_GAP,
            column_margin: DEFAULT_CHIP_GAP,
        }
    }
}

impl FlowConfig {
    pub fn new(row_margin: f32, column_margin: f32) -> Self {
        Self {
            row_margin,
            column_margin,
        }
    }

    /// Parse a config from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: FlowConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject negative or non-finite margins.
    pub fn validate(&self) -> Result<(), LayoutError> {
        check_parameter("row_margin", self.row_margin)?;
        check_parameter("column_margin", self.column_margin)?;
        Ok(())
    }
}
