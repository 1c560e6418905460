//! Materials and grouping definitions.
//!
//! Materials and group definitions are owned by the model scan and shared by
//! identity: part definitions hold `Arc`s to them and never copy their data
//! beyond the few display values they cache.

use std::fmt;

use crate::units::Length;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of material assigned to a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MaterialType {
    /// No known material type.
    #[default]
    Unknown,
    /// Solid wood, cut from rough boards.
    SolidWood,
    /// Sheet goods (plywood, MDF, particle board).
    SheetGood,
    /// Dimensional lumber sold in standard sections.
    DimensionalLumber,
    /// Edge banding tape.
    EdgeBanding,
    /// Hardware (not cut).
    Hardware,
    /// Veneer sheets.
    Veneer,
}

/// How a part acquired its material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MaterialOrigin {
    /// Painted directly on the instance.
    Owned,
    /// Inherited from a parent instance.
    Inherited,
    /// Found on child faces.
    Child,
}

/// A material.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Material {
    /// Display name.
    pub name: String,
    /// Material type tag.
    pub material_type: MaterialType,
}

impl Material {
    /// Creates a material.
    pub fn new(name: impl Into<String>, material_type: MaterialType) -> Self {
        Self {
            name: name.into(),
            material_type,
        }
    }

    /// Creates an edge banding material.
    pub fn edge_banding(name: impl Into<String>) -> Self {
        Self::new(name, MaterialType::EdgeBanding)
    }
}

/// A grouping record that can act as the source of an edge.
///
/// Edge bandings are grouped by material and standard dimension; a part edge
/// keeps a reference to the group it belongs to and caches its standard
/// dimension for display.
pub trait GroupDefinition: fmt::Debug {
    /// Identity of the group.
    fn id(&self) -> &str;

    /// Standard dimension of the group (banding thickness × width, etc.).
    fn std_dimension(&self) -> Length;
}

/// Plain grouping record.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDef {
    id: String,
    material_name: String,
    std_dimension: Length,
}

impl GroupDef {
    /// Creates a group definition.
    pub fn new(id: impl Into<String>, material_name: impl Into<String>, std_dimension: Length) -> Self {
        Self {
            id: id.into(),
            material_name: material_name.into(),
            std_dimension,
        }
    }

    /// Name of the material shared by the group.
    pub fn material_name(&self) -> &str {
        &self.material_name
    }
}

impl GroupDefinition for GroupDef {
    fn id(&self) -> &str {
        &self.id
    }

    fn std_dimension(&self) -> Length {
        self.std_dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_defaults() {
        assert_eq!(MaterialType::default(), MaterialType::Unknown);
        let m = Material::edge_banding("Oak tape");
        assert_eq!(m.material_type, MaterialType::EdgeBanding);
        assert_eq!(m.name, "Oak tape");
    }

    #[test]
    fn test_group_def() {
        let g = GroupDef::new("g1", "Oak tape", Length::mm(22.0));
        assert_eq!(g.id(), "g1");
        assert_eq!(g.material_name(), "Oak tape");
        assert_eq!(g.std_dimension(), Length::mm(22.0));
    }
}
