//! Part sizes, scales and axis alignment.

use crate::units::Length;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A model axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    /// Model X axis.
    X,
    /// Model Y axis.
    Y,
    /// Model Z axis.
    Z,
}

/// One of the three part dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Dimension {
    /// Longest face dimension.
    Length,
    /// Shortest face dimension.
    Width,
    /// Depth of the board.
    Thickness,
}

/// For each model axis, the part dimension it is aligned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NormalsToDimensions {
    /// Dimension aligned with X.
    pub x_axis: Dimension,
    /// Dimension aligned with Y.
    pub y_axis: Dimension,
    /// Dimension aligned with Z.
    pub z_axis: Dimension,
}

impl NormalsToDimensions {
    /// Returns the dimension aligned with `axis`.
    pub fn get(&self, axis: Axis) -> Dimension {
        match axis {
            Axis::X => self.x_axis,
            Axis::Y => self.y_axis,
            Axis::Z => self.z_axis,
        }
    }
}

/// Resolved 3-axis size of a part.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size3d {
    /// Length.
    pub length: Length,
    /// Width.
    pub width: Length,
    /// Thickness.
    pub thickness: Length,
    /// Model axes carrying length, width and thickness, in that order.
    pub axes: [Axis; 3],
}

impl Default for Size3d {
    fn default() -> Self {
        Self {
            length: Length::ZERO,
            width: Length::ZERO,
            thickness: Length::ZERO,
            axes: [Axis::X, Axis::Y, Axis::Z],
        }
    }
}

impl Size3d {
    /// Creates a size aligned on the default axes.
    pub fn new(length: Length, width: Length, thickness: Length) -> Self {
        Self {
            length,
            width,
            thickness,
            ..Self::default()
        }
    }

    /// Creates a size from millimetre values.
    pub fn from_mm(length: f64, width: f64, thickness: f64) -> Self {
        Self::new(Length::mm(length), Length::mm(width), Length::mm(thickness))
    }

    /// Sets the model axes carrying length, width and thickness.
    pub fn with_axes(mut self, length_axis: Axis, width_axis: Axis, thickness_axis: Axis) -> Self {
        self.axes = [length_axis, width_axis, thickness_axis];
        self
    }

    /// Answers which dimension each model axis is normal-aligned with.
    pub fn normals_to_dimensions(&self) -> NormalsToDimensions {
        let dimension_of = |axis: Axis| {
            if self.axes[0] == axis {
                Dimension::Length
            } else if self.axes[1] == axis {
                Dimension::Width
            } else {
                Dimension::Thickness
            }
        };
        NormalsToDimensions {
            x_axis: dimension_of(Axis::X),
            y_axis: dimension_of(Axis::Y),
            z_axis: dimension_of(Axis::Z),
        }
    }

    /// Face area (length × width) in mm².
    pub fn area(&self) -> f64 {
        self.length.to_mm() * self.width.to_mm()
    }
}

/// Per-axis scale applied to a part instance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scale3d {
    /// X factor.
    pub x: f64,
    /// Y factor.
    pub y: f64,
    /// Z factor.
    pub z: f64,
}

impl Default for Scale3d {
    fn default() -> Self {
        Self::identity()
    }
}

impl Scale3d {
    const EPSILON: f64 = 1e-9;

    /// The identity scale.
    pub const fn identity() -> Self {
        Self {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        }
    }

    /// Creates a scale.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns true if no axis is scaled.
    pub fn is_identity(&self) -> bool {
        [self.x, self.y, self.z]
            .iter()
            .all(|factor| (factor - 1.0).abs() < Self::EPSILON)
    }
}
