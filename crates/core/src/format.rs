//! Display formatting for dimensions.

use crate::units::LengthUnit;

/// Formats areas for presentation.
pub trait AreaFormatter {
    /// Formats an area given in mm².
    fn format_area(&self, area_mm2: f64) -> String;
}

/// Unit-aware formatter.
///
/// Metric units render areas in m², imperial units in ft², both with two
/// decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct DimensionFormatter {
    unit: LengthUnit,
}

impl DimensionFormatter {
    /// Creates a formatter for the given display unit.
    pub fn new(unit: LengthUnit) -> Self {
        Self { unit }
    }

    /// The display unit.
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }
}

impl AreaFormatter for DimensionFormatter {
    fn format_area(&self, area_mm2: f64) -> String {
        let (side, symbol) = if self.unit.is_imperial() {
            (LengthUnit::Foot.to_mm(), "ft²")
        } else {
            (LengthUnit::Meter.to_mm(), "m²")
        };
        format!("{:.2} {}", area_mm2 / (side * side), symbol)
    }
}
