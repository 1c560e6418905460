//! Presentation records.
//!
//! [`to_record`] flattens a [`PartDef`] into the record consumed by report
//! renderers. Leaf parts export the full field set. Parts with children export
//! a reduced set and an empty `children` list; filling that list is up to the
//! caller (see [`crate::report`]).
//!
//! Renderers treat presence as a signal: a `null` decrement means no decrement
//! was applied, a `null` final area means none was computed.

use std::collections::BTreeMap;

use serde::Serialize;
use u_cutlist_core::{AreaFormatter, Length, MaterialOrigin, MaterialType, NormalsToDimensions};

use crate::edge::EdgeSide;
use crate::part_def::{Cumulable, PartDef};

/// Banding decrements, `None` when not applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeDecrements {
    /// Length decrement.
    pub length: Option<String>,
    /// Width decrement.
    pub width: Option<String>,
}

impl EdgeDecrements {
    fn of(part: &PartDef) -> Self {
        let positive = |l: Length| l.is_positive().then(|| l.to_string());
        Self {
            length: positive(part.edge_length_decrement()),
            width: positive(part.edge_width_decrement()),
        }
    }
}

/// Exported leaf part.
#[derive(Debug, Clone, Serialize)]
pub struct LeafPartRecord {
    /// Fingerprint.
    pub id: String,
    /// Underlying shape definition identity.
    pub definition_id: String,
    /// Display name.
    pub name: String,
    /// True when the name came from dynamic attributes.
    pub is_dynamic_attributes_name: bool,
    /// True when the instance scale is not identity.
    pub resized: bool,
    /// Nominal length.
    pub length: String,
    /// Nominal width.
    pub width: String,
    /// Nominal thickness.
    pub thickness: String,
    /// Number of instances.
    pub count: usize,
    /// Cutting length.
    pub cutting_length: String,
    /// Cutting width.
    pub cutting_width: String,
    /// Cutting thickness.
    pub cutting_thickness: String,
    /// Cutting length, summed over instances when lengths cumulate.
    pub cumulative_cutting_length: String,
    /// Cutting width, summed over instances when widths cumulate.
    pub cumulative_cutting_width: String,
    /// Display number, explicit or assigned.
    pub number: String,
    /// Number saved by a previous run.
    pub saved_number: Option<String>,
    /// Material name.
    pub material_name: String,
    /// Material category.
    pub material_type: MaterialType,
    /// How the material was reached, deduplicated.
    pub material_origins: Vec<MaterialOrigin>,
    /// Cumulation policy.
    pub cumulable: Cumulable,
    /// True when orientation is locked to the model axes.
    pub orientation_locked_on_axis: bool,
    /// Labels.
    pub labels: Vec<String>,
    /// Unique instance ids.
    pub entity_ids: Vec<String>,
    /// One path per instance.
    pub entity_serialized_paths: Vec<String>,
    /// `(name, count)` pairs sorted by name.
    pub entity_names: Vec<(String, usize)>,
    /// True when some instance had no name.
    pub contains_blank_entity_names: bool,
    /// True when dimensions were reordered automatically.
    pub auto_oriented: bool,
    /// True when the instance is not aligned on the model axes.
    pub not_aligned_on_axes: bool,
    /// Distinct layers.
    pub layers: Vec<String>,
    /// True when instances span several layers.
    pub multiple_layers: bool,
    /// Number of banded edges.
    pub edge_count: usize,
    /// Banding pattern in `ymin`, `xmax`, `ymax`, `xmin` order.
    pub edge_pattern: Option<String>,
    /// Banding material per populated edge.
    pub edge_material_names: BTreeMap<EdgeSide, String>,
    /// Banding standard dimension per populated edge.
    pub edge_std_dimensions: BTreeMap<EdgeSide, String>,
    /// Banded face ids per populated edge.
    pub edge_entity_ids: BTreeMap<EdgeSide, Vec<String>>,
    /// Banding decrements.
    pub edge_decrements: EdgeDecrements,
    /// Formatted final area, `None` when zero.
    pub final_area: Option<String>,
    /// Which dimension each model axis maps to.
    pub normals_to_dimensions: NormalsToDimensions,
    /// Length over the larger face dimension.
    pub l_ratio: f64,
    /// Width over the larger face dimension.
    pub w_ratio: f64,
}

/// Exported parent part.
#[derive(Debug, Clone, Serialize)]
pub struct ParentPartRecord {
    /// Fingerprint.
    pub id: String,
    /// Nominal length.
    pub length: String,
    /// Nominal width.
    pub width: String,
    /// Nominal thickness.
    pub thickness: String,
    /// Number of instances.
    pub count: usize,
    /// Cutting length.
    pub cutting_length: String,
    /// Cutting width.
    pub cutting_width: String,
    /// Cutting thickness.
    pub cutting_thickness: String,
    /// Number saved by a previous run.
    pub saved_number: Option<String>,
    /// Material name.
    pub material_name: String,
    /// Labels.
    pub labels: Vec<String>,
    /// Banding pattern in `ymin`, `xmax`, `ymax`, `xmin` order.
    pub edge_pattern: Option<String>,
    /// Banding material per populated edge.
    pub edge_material_names: BTreeMap<EdgeSide, String>,
    /// Banding standard dimension per populated edge.
    pub edge_std_dimensions: BTreeMap<EdgeSide, String>,
    /// Banding decrements.
    pub edge_decrements: EdgeDecrements,
    /// Formatted final area, `None` when zero.
    pub final_area: Option<String>,
    /// Warnings raised while scanning children.
    pub children_warning_count: usize,
    /// Exported children.
    pub children: Vec<PartRecord>,
}

/// Exported part, leaf or parent.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PartRecord {
    /// Part without children.
    Leaf(Box<LeafPartRecord>),
    /// Part grouping child parts.
    Parent(ParentPartRecord),
}

impl PartRecord {
    /// Part fingerprint.
    pub fn id(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.id,
            Self::Parent(parent) => &parent.id,
        }
    }

    /// Returns the leaf record, if this is one.
    pub fn as_leaf(&self) -> Option<&LeafPartRecord> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Parent(_) => None,
        }
    }

    /// Returns the parent record, if this is one.
    pub fn as_parent(&self) -> Option<&ParentPartRecord> {
        match self {
            Self::Leaf(_) => None,
            Self::Parent(parent) => Some(parent),
        }
    }

    /// Mutable access to a parent record.
    pub fn as_parent_mut(&mut self) -> Option<&mut ParentPartRecord> {
        match self {
            Self::Leaf(_) => None,
            Self::Parent(parent) => Some(parent),
        }
    }
}

fn std_dimensions(part: &PartDef) -> BTreeMap<EdgeSide, String> {
    part.edge_std_dimensions()
        .into_iter()
        .map(|(side, dimension)| (side, dimension.to_string()))
        .collect()
}

fn final_area(part: &PartDef, formatter: &dyn AreaFormatter) -> Option<String> {
    (part.final_area() != 0.0).then(|| formatter.format_area(part.final_area()))
}

// Larger axis gets 1; a degenerate zero-sized face gets 0 on both.
fn ratios(length: Length, width: Length) -> (f64, f64) {
    let max = length.max(width).to_mm();
    if max > 0.0 {
        (length.to_mm() / max, width.to_mm() / max)
    } else {
        (0.0, 0.0)
    }
}

/// Exports a part. `part_number` is used when no explicit number is set.
pub fn to_record(part: &PartDef, part_number: &str, formatter: &dyn AreaFormatter) -> PartRecord {
    if part.is_parent() {
        return PartRecord::Parent(ParentPartRecord {
            id: part.id().to_string(),
            length: part.net_length().to_string(),
            width: part.net_width().to_string(),
            thickness: part.size().thickness.to_string(),
            count: part.count(),
            cutting_length: part.net_cutting_length().to_string(),
            cutting_width: part.net_cutting_width().to_string(),
            cutting_thickness: part.cutting_size().thickness.to_string(),
            saved_number: None,
            material_name: part.material_name().to_string(),
            labels: part.labels().to_vec(),
            edge_pattern: part.edge_pattern().map(str::to_string),
            edge_material_names: part.edge_material_names(),
            edge_std_dimensions: std_dimensions(part),
            edge_decrements: EdgeDecrements::of(part),
            final_area: final_area(part, formatter),
            children_warning_count: part.children_warning_count(),
            children: Vec::new(),
        });
    }

    let size = part.size();
    let (l_ratio, w_ratio) = ratios(size.length, size.width);
    PartRecord::Leaf(Box::new(LeafPartRecord {
        id: part.id().to_string(),
        definition_id: part.definition_id().to_string(),
        name: part.name().to_string(),
        is_dynamic_attributes_name: part.is_dynamic_attributes_name(),
        resized: !part.scale().is_identity(),
        length: part.net_length().to_string(),
        width: part.net_width().to_string(),
        thickness: size.thickness.to_string(),
        count: part.count(),
        cutting_length: part.net_cutting_length().to_string(),
        cutting_width: part.net_cutting_width().to_string(),
        cutting_thickness: part.cutting_size().thickness.to_string(),
        cumulative_cutting_length: part.cumulative_cutting_length().to_string(),
        cumulative_cutting_width: part.cumulative_cutting_width().to_string(),
        number: part.number().unwrap_or(part_number).to_string(),
        saved_number: part.saved_number().map(str::to_string),
        material_name: part.material_name().to_string(),
        material_type: part.material_type(),
        material_origins: part.material_origins().to_vec(),
        cumulable: part.cumulable(),
        orientation_locked_on_axis: part.orientation_locked_on_axis(),
        labels: part.labels().to_vec(),
        entity_ids: part.entity_ids().to_vec(),
        entity_serialized_paths: part.entity_serialized_paths().to_vec(),
        entity_names: part
            .entity_names()
            .iter()
            .map(|(name, count)| (name.clone(), *count))
            .collect(),
        contains_blank_entity_names: part.contains_blank_entity_names(),
        auto_oriented: part.auto_oriented(),
        not_aligned_on_axes: part.not_aligned_on_axes(),
        layers: part.layers().to_vec(),
        multiple_layers: part.multiple_layers(),
        edge_count: part.edge_count(),
        edge_pattern: part.edge_pattern().map(str::to_string),
        edge_material_names: part.edge_material_names(),
        edge_std_dimensions: std_dimensions(part),
        edge_entity_ids: part.edge_entity_ids(),
        edge_decrements: EdgeDecrements::of(part),
        final_area: final_area(part, formatter),
        normals_to_dimensions: size.normals_to_dimensions(),
        l_ratio,
        w_ratio,
    }))
}
