//! Cut-list generation configuration.

use crate::units::LengthUnit;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default ordering: thickest, longest, widest, most numerous parts first,
/// then by name, then densest edge banding first.
pub const DEFAULT_PART_ORDER_STRATEGY: &str =
    "-thickness>-length>-width>-count>name>-edge_pattern";

/// Configuration for scanning, ordering and numbering parts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CutListConfig {
    /// Sort strategy, `key[>key...]` with optional `-` prefix per key.
    pub part_order_strategy: String,

    /// Attribute used to resolve a dynamic instance name.
    /// `None` disables dynamic naming in fingerprints.
    pub dynamic_attributes_name: Option<String>,

    /// Number parts with letters (A, B, ...) instead of digits.
    pub part_number_with_letters: bool,

    /// First fallback number. `None` uses `A` or `1`.
    pub part_number_start: Option<String>,

    /// Unit used to display areas.
    pub area_unit: LengthUnit,
}

impl Default for CutListConfig {
    fn default() -> Self {
        Self {
            part_order_strategy: DEFAULT_PART_ORDER_STRATEGY.to_string(),
            dynamic_attributes_name: None,
            part_number_with_letters: true,
            part_number_start: None,
            area_unit: LengthUnit::default(),
        }
    }
}

impl CutListConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the part order strategy.
    pub fn with_part_order_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.part_order_strategy = strategy.into();
        self
    }

    /// Sets the dynamic attributes name.
    pub fn with_dynamic_attributes_name(mut self, name: impl Into<String>) -> Self {
        self.dynamic_attributes_name = Some(name.into());
        self
    }

    /// Switches between letter and digit numbering.
    pub fn with_part_number_with_letters(mut self, letters: bool) -> Self {
        self.part_number_with_letters = letters;
        self
    }

    /// Sets the first fallback number.
    pub fn with_part_number_start(mut self, start: impl Into<String>) -> Self {
        self.part_number_start = Some(start.into());
        self
    }

    /// Sets the area display unit.
    pub fn with_area_unit(mut self, unit: LengthUnit) -> Self {
        self.area_unit = unit;
        self
    }

    /// Effective first fallback number.
    pub fn effective_part_number_start(&self) -> &str {
        match &self.part_number_start {
            Some(start) => start,
            None if self.part_number_with_letters => "A",
            None => "1",
        }
    }

    /// Checks that the numbering start matches the numbering mode.
    pub fn validate(&self) -> Result<()> {
        let start = self.effective_part_number_start();
        let valid = if self.part_number_with_letters {
            !start.is_empty() && start.bytes().all(|b| b.is_ascii_uppercase())
        } else {
            !start.is_empty() && start.bytes().all(|b| b.is_ascii_digit())
        };
        if valid {
            Ok(())
        } else {
            Err(Error::ConfigError(format!(
                "part number start '{}' does not match {} numbering",
                start,
                if self.part_number_with_letters { "letter" } else { "digit" }
            )))
        }
    }

    /// Loads and validates a configuration from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CutListConfig =
            serde_json::from_str(json).map_err(|e| Error::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
