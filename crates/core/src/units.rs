//! Lengths and length units.
//!
//! All lengths are stored in millimetres. The canonical textual form produced
//! by [`Length`]'s `Display` implementation is stable across runs and is what
//! part fingerprints are built from, so it must not depend on locale or on the
//! display unit chosen by the user.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Units a length can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LengthUnit {
    /// Millimetres.
    Millimeter,
    /// Centimetres.
    Centimeter,
    /// Metres.
    #[default]
    Meter,
    /// Inches.
    Inch,
    /// Feet.
    Foot,
}

impl LengthUnit {
    /// Number of millimetres in one unit.
    pub fn to_mm(self) -> f64 {
        match self {
            Self::Millimeter => 1.0,
            Self::Centimeter => 10.0,
            Self::Meter => 1000.0,
            Self::Inch => 25.4,
            Self::Foot => 304.8,
        }
    }

    /// Short unit symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Meter => "m",
            Self::Inch => "in",
            Self::Foot => "ft",
        }
    }

    /// Returns true for inch and foot.
    pub fn is_imperial(self) -> bool {
        matches!(self, Self::Inch | Self::Foot)
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "" | "mm" => Some(Self::Millimeter),
            "cm" => Some(Self::Centimeter),
            "m" => Some(Self::Meter),
            "in" | "\"" => Some(Self::Inch),
            "ft" | "'" => Some(Self::Foot),
            _ => None,
        }
    }
}

/// A length in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Length(f64);

impl Length {
    /// The zero length.
    pub const ZERO: Length = Length(0.0);

    /// Creates a length from millimetres.
    pub const fn mm(value: f64) -> Self {
        Self(value)
    }

    /// Creates a length from a value in the given unit.
    pub fn from_unit(value: f64, unit: LengthUnit) -> Self {
        Self(value * unit.to_mm())
    }

    /// Returns the value in millimetres.
    pub fn to_mm(self) -> f64 {
        self.0
    }

    /// Returns the value converted to `unit`.
    pub fn to_unit(self, unit: LengthUnit) -> f64 {
        self.0 / unit.to_mm()
    }

    /// Returns the larger of two lengths.
    pub fn max(self, other: Length) -> Length {
        if self.total_cmp(&other) == Ordering::Less {
            other
        } else {
            self
        }
    }

    /// Floors the length at zero.
    pub fn clamp_zero(self) -> Length {
        if self.0 > 0.0 {
            self
        } else {
            Length::ZERO
        }
    }

    /// Returns true if the length is strictly positive.
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    /// Total ordering over lengths (NaN sorts last).
    pub fn total_cmp(&self, other: &Length) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding 0.0 normalizes -0.0 so both zeros render identically.
        write!(f, "{}mm", self.0 + 0.0)
    }
}

impl FromStr for Length {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_alphabetic() || c == '"' || c == '\'')
            .unwrap_or(trimmed.len());
        let (number, symbol) = trimmed.split_at(split);

        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| Error::ParseError(format!("length '{}'", s)))?;
        let unit = LengthUnit::from_symbol(symbol.trim())
            .ok_or_else(|| Error::ParseError(format!("length unit '{}'", symbol.trim())))?;

        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidDimension(format!("length '{}'", s)));
        }
        Ok(Length::from_unit(value, unit))
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}
