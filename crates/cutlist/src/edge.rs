//! Edge banding model.
//!
//! A part carries four oriented edge slots. Each slot may be associated with a
//! banding material, the entities that contributed the banding, and the group
//! definition the banding belongs to.
//!
//! # Pattern bit order
//!
//! The edge pattern is a 4-character `0`/`1` string. Its bits follow the
//! perimeter order `YMin, XMax, YMax, XMin`, which is *not* the enumeration
//! order of [`EdgeSide`]. Reports and saved sort orders depend on it.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use u_cutlist_core::{GroupDefinition, Length, Material};

/// One of the four oriented edge positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSide {
    /// Front edge.
    YMin,
    /// Back edge.
    YMax,
    /// Left edge.
    XMin,
    /// Right edge.
    XMax,
}

impl EdgeSide {
    /// All sides in enumeration order.
    pub const ALL: [EdgeSide; 4] = [Self::YMin, Self::YMax, Self::XMin, Self::XMax];

    /// Sides in pattern bit order.
    pub const PATTERN_ORDER: [EdgeSide; 4] = [Self::YMin, Self::XMax, Self::YMax, Self::XMin];

    fn index(self) -> usize {
        match self {
            Self::YMin => 0,
            Self::YMax => 1,
            Self::XMin => 2,
            Self::XMax => 3,
        }
    }

    /// Returns true for the two sides running along the part length.
    pub fn is_y(self) -> bool {
        matches!(self, Self::YMin | Self::YMax)
    }
}

/// State of one edge slot.
#[derive(Debug, Clone, Default)]
pub struct EdgeSlot {
    material: Option<Arc<Material>>,
    entity_ids: Option<Vec<String>>,
    group_def: Option<Arc<dyn GroupDefinition>>,
    std_dimension: Option<Length>,
}

impl EdgeSlot {
    /// Banding material, if any.
    pub fn material(&self) -> Option<&Arc<Material>> {
        self.material.as_ref()
    }

    /// Entities that contributed the banding.
    pub fn entity_ids(&self) -> Option<&[String]> {
        self.entity_ids.as_deref()
    }

    /// Source group definition.
    pub fn group_def(&self) -> Option<&Arc<dyn GroupDefinition>> {
        self.group_def.as_ref()
    }

    /// Standard dimension cached from the group definition.
    pub fn std_dimension(&self) -> Option<Length> {
        self.std_dimension
    }

    /// Returns true if a material is set.
    pub fn is_banded(&self) -> bool {
        self.material.is_some()
    }
}

/// The four edge slots of a part, with the derived count and pattern.
///
/// Setters take one optional value per side, in `YMin, YMax, XMin, XMax`
/// order. `None` leaves the slot untouched.
#[derive(Debug, Clone, Default)]
pub struct Edges {
    slots: [EdgeSlot; 4],
    count: usize,
    pattern: Option<String>,
}

impl Edges {
    /// Creates an empty edge model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot for a side.
    pub fn slot(&self, side: EdgeSide) -> &EdgeSlot {
        &self.slots[side.index()]
    }

    /// Number of banded slots.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Pattern string, `None` until materials have been set once.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Sets banding materials and recomputes the count and pattern.
    pub fn set_materials(
        &mut self,
        ymin: Option<Arc<Material>>,
        ymax: Option<Arc<Material>>,
        xmin: Option<Arc<Material>>,
        xmax: Option<Arc<Material>>,
    ) {
        for (side, material) in EdgeSide::ALL.into_iter().zip([ymin, ymax, xmin, xmax]) {
            if material.is_some() {
                self.slots[side.index()].material = material;
            }
        }

        self.count = self.slots.iter().filter(|slot| slot.is_banded()).count();
        self.pattern = Some(
            EdgeSide::PATTERN_ORDER
                .iter()
                .map(|side| if self.slot(*side).is_banded() { '1' } else { '0' })
                .collect(),
        );
    }

    /// Sets the entity ids that contributed each edge.
    pub fn set_entity_ids(
        &mut self,
        ymin: Option<Vec<String>>,
        ymax: Option<Vec<String>>,
        xmin: Option<Vec<String>>,
        xmax: Option<Vec<String>>,
    ) {
        for (side, ids) in EdgeSide::ALL.into_iter().zip([ymin, ymax, xmin, xmax]) {
            if ids.is_some() {
                self.slots[side.index()].entity_ids = ids;
            }
        }
    }

    /// Sets the source group definitions and caches their standard dimensions.
    pub fn set_group_defs(
        &mut self,
        ymin: Option<Arc<dyn GroupDefinition>>,
        ymax: Option<Arc<dyn GroupDefinition>>,
        xmin: Option<Arc<dyn GroupDefinition>>,
        xmax: Option<Arc<dyn GroupDefinition>>,
    ) {
        for (side, group_def) in EdgeSide::ALL.into_iter().zip([ymin, ymax, xmin, xmax]) {
            if let Some(group_def) = group_def {
                let slot = &mut self.slots[side.index()];
                slot.std_dimension = Some(group_def.std_dimension());
                slot.group_def = Some(group_def);
            }
        }
    }

    /// Material names of banded slots.
    pub fn material_names(&self) -> BTreeMap<EdgeSide, String> {
        self.collect(|slot| slot.material.as_ref().map(|m| m.name.clone()))
    }

    /// Cached standard dimensions of slots with a group definition.
    pub fn std_dimensions(&self) -> BTreeMap<EdgeSide, Length> {
        self.collect(|slot| slot.std_dimension)
    }

    /// Contributing entity ids of slots that have them.
    pub fn entity_ids(&self) -> BTreeMap<EdgeSide, Vec<String>> {
        self.collect(|slot| slot.entity_ids.clone())
    }

    fn collect<T>(&self, f: impl Fn(&EdgeSlot) -> Option<T>) -> BTreeMap<EdgeSide, T> {
        EdgeSide::ALL
            .iter()
            .filter_map(|side| f(self.slot(*side)).map(|value| (*side, value)))
            .collect()
    }
}
