//! Part definitions.
//!
//! A [`PartDef`] is the dedup bucket for every scanned instance sharing one
//! fingerprint. The scan creates it the first time a fingerprint is seen and
//! then only adds to it: counts grow, id and name collections fill up, and
//! edge slots get populated. Nothing is removed during a run.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use serde::Serialize;
use u_cutlist_core::{
    GroupDefinition, Length, Material, MaterialOrigin, MaterialType, Scale3d, Size3d,
};

use crate::edge::{EdgeSide, Edges};

/// Which cutting dimensions are summed over identical instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cumulable {
    /// Each instance is cut separately.
    #[default]
    None,
    /// Instances are cut end to end from one length.
    Length,
    /// Instances are cut side by side from one width.
    Width,
    /// Both axes cumulate.
    All,
}

impl Cumulable {
    /// Returns true if cutting lengths are summed.
    pub fn cumulates_length(self) -> bool {
        matches!(self, Self::Length | Self::All)
    }

    /// Returns true if cutting widths are summed.
    pub fn cumulates_width(self) -> bool {
        matches!(self, Self::Width | Self::All)
    }
}

/// Aggregated facts about a group of identical parts.
#[derive(Debug, Clone)]
pub struct PartDef {
    id: String,
    definition_id: String,
    number: Option<String>,
    saved_number: Option<String>,
    name: String,
    is_dynamic_attributes_name: bool,
    count: usize,
    scale: Scale3d,
    cutting_size: Size3d,
    size: Size3d,
    material_name: String,
    material_type: MaterialType,
    material_origins: Vec<MaterialOrigin>,
    cumulable: Cumulable,
    orientation_locked_on_axis: bool,
    labels: Vec<String>,
    edges: Edges,
    edge_length_decrement: Length,
    edge_width_decrement: Length,
    edge_errors: Vec<String>,
    // Unique ids; one instance may be reached through several paths.
    entity_ids: Vec<String>,
    entity_id_index: HashSet<String>,
    // One path per occurrence, so its length tracks `count`.
    entity_serialized_paths: Vec<String>,
    entity_names: BTreeMap<String, usize>,
    contains_blank_entity_names: bool,
    auto_oriented: bool,
    not_aligned_on_axes: bool,
    layers: Vec<String>,
    layer_index: HashSet<String>,
    final_area: f64,
    children_warning_count: usize,
    children: Vec<PartDef>,
}

impl PartDef {
    /// Creates an empty part definition for a fingerprint.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            definition_id: String::new(),
            number: None,
            saved_number: None,
            name: String::new(),
            is_dynamic_attributes_name: false,
            count: 0,
            scale: Scale3d::identity(),
            cutting_size: Size3d::default(),
            size: Size3d::default(),
            material_name: String::new(),
            material_type: MaterialType::Unknown,
            material_origins: Vec::new(),
            cumulable: Cumulable::None,
            orientation_locked_on_axis: false,
            labels: Vec::new(),
            edges: Edges::new(),
            edge_length_decrement: Length::ZERO,
            edge_width_decrement: Length::ZERO,
            edge_errors: Vec::new(),
            entity_ids: Vec::new(),
            entity_id_index: HashSet::new(),
            entity_serialized_paths: Vec::new(),
            entity_names: BTreeMap::new(),
            contains_blank_entity_names: false,
            auto_oriented: false,
            not_aligned_on_axes: false,
            layers: Vec::new(),
            layer_index: HashSet::new(),
            final_area: 0.0,
            children_warning_count: 0,
            children: Vec::new(),
        }
    }

    // -- Identity and presentation ------------------------------------------

    /// Fingerprint.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Underlying shape definition identity.
    pub fn definition_id(&self) -> &str {
        &self.definition_id
    }

    /// Sets the underlying shape definition identity.
    pub fn set_definition_id(&mut self, definition_id: impl Into<String>) {
        self.definition_id = definition_id.into();
    }

    /// Explicit display number.
    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    /// Overrides the display number.
    pub fn set_number(&mut self, number: impl Into<String>) {
        self.number = Some(number.into());
    }

    /// Number saved by a previous run.
    pub fn saved_number(&self) -> Option<&str> {
        self.saved_number.as_deref()
    }

    /// Records the number saved by a previous run.
    pub fn set_saved_number(&mut self, number: impl Into<String>) {
        self.saved_number = Some(number.into());
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when the name came from dynamic attributes.
    pub fn is_dynamic_attributes_name(&self) -> bool {
        self.is_dynamic_attributes_name
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: impl Into<String>, is_dynamic_attributes_name: bool) {
        self.name = name.into();
        self.is_dynamic_attributes_name = is_dynamic_attributes_name;
    }

    /// Labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Sets the labels.
    pub fn set_labels(&mut self, labels: Vec<String>) {
        self.labels = labels;
    }

    // -- Quantities and geometry --------------------------------------------

    /// Number of instances folded into this part.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Folds `n` more instances into this part.
    pub fn add_count(&mut self, n: usize) {
        self.count += n;
    }

    /// Nominal size.
    pub fn size(&self) -> &Size3d {
        &self.size
    }

    /// Sets the nominal size.
    pub fn set_size(&mut self, size: Size3d) {
        self.size = size;
    }

    /// Size before edge banding decrement.
    pub fn cutting_size(&self) -> &Size3d {
        &self.cutting_size
    }

    /// Sets the cutting size.
    pub fn set_cutting_size(&mut self, cutting_size: Size3d) {
        self.cutting_size = cutting_size;
    }

    /// Instance scale.
    pub fn scale(&self) -> &Scale3d {
        &self.scale
    }

    /// Sets the instance scale.
    pub fn set_scale(&mut self, scale: Scale3d) {
        self.scale = scale;
    }

    /// Cumulation policy.
    pub fn cumulable(&self) -> Cumulable {
        self.cumulable
    }

    /// Sets the cumulation policy.
    pub fn set_cumulable(&mut self, cumulable: Cumulable) {
        self.cumulable = cumulable;
    }

    /// Accumulated final area in mm².
    pub fn final_area(&self) -> f64 {
        self.final_area
    }

    /// Adds to the final area (mm²).
    pub fn add_final_area(&mut self, area: f64) {
        self.final_area += area;
    }

    /// Cutting length, summed over instances when lengths cumulate.
    pub fn cumulative_cutting_length(&self) -> Length {
        if self.count > 1 && self.cumulable.cumulates_length() {
            self.cutting_size.length * self.count as f64
        } else {
            self.cutting_size.length
        }
    }

    /// Cutting width, summed over instances when widths cumulate.
    pub fn cumulative_cutting_width(&self) -> Length {
        if self.count > 1 && self.cumulable.cumulates_width() {
            self.cutting_size.width * self.count as f64
        } else {
            self.cutting_size.width
        }
    }

    // -- Material ------------------------------------------------------------

    /// Material name.
    pub fn material_name(&self) -> &str {
        &self.material_name
    }

    /// Material type.
    pub fn material_type(&self) -> MaterialType {
        self.material_type
    }

    /// Copies name and type from a material.
    pub fn set_material(&mut self, material: &Material) {
        self.material_name = material.name.clone();
        self.material_type = material.material_type;
    }

    /// Distinct material origins in first-seen order.
    pub fn material_origins(&self) -> &[MaterialOrigin] {
        &self.material_origins
    }

    /// Records a material origin once.
    pub fn add_material_origin(&mut self, origin: MaterialOrigin) {
        if !self.material_origins.contains(&origin) {
            self.material_origins.push(origin);
        }
    }

    // -- Entities ------------------------------------------------------------

    /// Distinct contributing entity ids.
    pub fn entity_ids(&self) -> &[String] {
        &self.entity_ids
    }

    /// Records a contributing entity id once.
    pub fn add_entity_id(&mut self, entity_id: impl Into<String>) {
        let entity_id = entity_id.into();
        if self.entity_id_index.insert(entity_id.clone()) {
            self.entity_ids.push(entity_id);
        }
    }

    /// Serialized path of every occurrence.
    pub fn entity_serialized_paths(&self) -> &[String] {
        &self.entity_serialized_paths
    }

    /// Records the serialized path of one occurrence.
    pub fn add_entity_serialized_path(&mut self, path: impl Into<String>) {
        self.entity_serialized_paths.push(path.into());
    }

    /// Occurrence count of each non-blank instance name.
    pub fn entity_names(&self) -> &BTreeMap<String, usize> {
        &self.entity_names
    }

    /// True if an occurrence had a blank name.
    pub fn contains_blank_entity_names(&self) -> bool {
        self.contains_blank_entity_names
    }

    /// Records the instance name of one occurrence.
    pub fn add_entity_name(&mut self, name: &str) {
        if name.is_empty() {
            self.contains_blank_entity_names = true;
        } else {
            *self.entity_names.entry(name.to_string()).or_insert(0) += 1;
        }
    }

    // -- Orientation and layers ---------------------------------------------

    /// True if the part was re-oriented automatically.
    pub fn auto_oriented(&self) -> bool {
        self.auto_oriented
    }

    /// Sets the auto-oriented flag.
    pub fn set_auto_oriented(&mut self, value: bool) {
        self.auto_oriented = value;
    }

    /// True if the part is not aligned on model axes.
    pub fn not_aligned_on_axes(&self) -> bool {
        self.not_aligned_on_axes
    }

    /// Sets the not-aligned flag.
    pub fn set_not_aligned_on_axes(&mut self, value: bool) {
        self.not_aligned_on_axes = value;
    }

    /// True if the orientation is locked on model axes.
    pub fn orientation_locked_on_axis(&self) -> bool {
        self.orientation_locked_on_axis
    }

    /// Sets the orientation lock.
    pub fn set_orientation_locked_on_axis(&mut self, value: bool) {
        self.orientation_locked_on_axis = value;
    }

    /// Distinct layer names in first-seen order.
    pub fn layers(&self) -> &[String] {
        &self.layers
    }

    /// Records a layer once.
    pub fn add_layer(&mut self, layer: impl Into<String>) {
        let layer = layer.into();
        if self.layer_index.insert(layer.clone()) {
            self.layers.push(layer);
        }
    }

    /// True if instances span more than one layer.
    pub fn multiple_layers(&self) -> bool {
        self.layers.len() > 1
    }

    // -- Edges ---------------------------------------------------------------

    /// Edge model.
    pub fn edges(&self) -> &Edges {
        &self.edges
    }

    /// Number of banded edges.
    pub fn edge_count(&self) -> usize {
        self.edges.count()
    }

    /// Edge pattern in `YMin, XMax, YMax, XMin` bit order.
    pub fn edge_pattern(&self) -> Option<&str> {
        self.edges.pattern()
    }

    /// Material names per banded edge.
    pub fn edge_material_names(&self) -> BTreeMap<EdgeSide, String> {
        self.edges.material_names()
    }

    /// Standard dimensions per edge with a group definition.
    pub fn edge_std_dimensions(&self) -> BTreeMap<EdgeSide, Length> {
        self.edges.std_dimensions()
    }

    /// Contributing entity ids per edge.
    pub fn edge_entity_ids(&self) -> BTreeMap<EdgeSide, Vec<String>> {
        self.edges.entity_ids()
    }

    /// Sets edge materials, see [`Edges::set_materials`].
    pub fn set_edge_materials(
        &mut self,
        ymin: Option<Arc<Material>>,
        ymax: Option<Arc<Material>>,
        xmin: Option<Arc<Material>>,
        xmax: Option<Arc<Material>>,
    ) {
        self.edges.set_materials(ymin, ymax, xmin, xmax);
    }

    /// Sets edge entity ids, see [`Edges::set_entity_ids`].
    pub fn set_edge_entity_ids(
        &mut self,
        ymin: Option<Vec<String>>,
        ymax: Option<Vec<String>>,
        xmin: Option<Vec<String>>,
        xmax: Option<Vec<String>>,
    ) {
        self.edges.set_entity_ids(ymin, ymax, xmin, xmax);
    }

    /// Sets edge group definitions, see [`Edges::set_group_defs`].
    pub fn set_edge_group_defs(
        &mut self,
        ymin: Option<Arc<dyn GroupDefinition>>,
        ymax: Option<Arc<dyn GroupDefinition>>,
        xmin: Option<Arc<dyn GroupDefinition>>,
        xmax: Option<Arc<dyn GroupDefinition>>,
    ) {
        self.edges.set_group_defs(ymin, ymax, xmin, xmax);
    }

    /// Length removed by banding on the X edges.
    pub fn edge_length_decrement(&self) -> Length {
        self.edge_length_decrement
    }

    /// Width removed by banding on the Y edges.
    pub fn edge_width_decrement(&self) -> Length {
        self.edge_width_decrement
    }

    /// Sets the banding decrements.
    pub fn set_edge_decrements(&mut self, length: Length, width: Length) {
        self.edge_length_decrement = length;
        self.edge_width_decrement = width;
    }

    /// Edge validation errors in report order.
    pub fn edge_errors(&self) -> &[String] {
        &self.edge_errors
    }

    /// Records an edge validation error.
    pub fn add_edge_error(&mut self, error: impl Into<String>) {
        let error = error.into();
        log::warn!("Part {}: edge error: {}", self.id, error);
        self.edge_errors.push(error);
    }

    // -- Children ------------------------------------------------------------

    /// Nested part definitions.
    pub fn children(&self) -> &[PartDef] {
        &self.children
    }

    /// Mutable access to the nested part definitions.
    pub fn children_mut(&mut self) -> &mut Vec<PartDef> {
        &mut self.children
    }

    /// Nests a child part definition.
    pub fn add_child(&mut self, child: PartDef) {
        self.children.push(child);
    }

    /// True if this part groups children.
    pub fn is_parent(&self) -> bool {
        !self.children.is_empty()
    }

    /// Warnings raised by children.
    pub fn children_warning_count(&self) -> usize {
        self.children_warning_count
    }

    /// Adds child warnings.
    pub fn add_children_warnings(&mut self, n: usize) {
        self.children_warning_count += n;
    }

    /// Net length after banding decrement, floored at zero.
    pub fn net_length(&self) -> Length {
        (self.size.length - self.edge_length_decrement).clamp_zero()
    }

    /// Net width after banding decrement, floored at zero.
    pub fn net_width(&self) -> Length {
        (self.size.width - self.edge_width_decrement).clamp_zero()
    }

    /// Cutting length after banding decrement, floored at zero.
    pub fn net_cutting_length(&self) -> Length {
        (self.cutting_size.length - self.edge_length_decrement).clamp_zero()
    }

    /// Cutting width after banding decrement, floored at zero.
    pub fn net_cutting_width(&self) -> Length {
        (self.cutting_size.width - self.edge_width_decrement).clamp_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let part = PartDef::new("abc");
        assert_eq!(part.id(), "abc");
        assert_eq!(part.count(), 0);
        assert_eq!(part.final_area(), 0.0);
        assert_eq!(part.material_type(), MaterialType::Unknown);
        assert_eq!(part.cumulable(), Cumulable::None);
        assert!(part.scale().is_identity());
        assert_eq!(part.edge_pattern(), None);
        assert!(!part.is_parent());
    }

    #[test]
    fn test_cumulative_length_only() {
        let mut part = PartDef::new("p");
        part.add_count(3);
        part.set_cumulable(Cumulable::Length);
        part.set_cutting_size(Size3d::from_mm(10.0, 4.0, 2.0));

        assert_eq!(part.cumulative_cutting_length(), Length::mm(30.0));
        assert_eq!(part.cumulative_cutting_width(), Length::mm(4.0));
    }

    #[test]
    fn test_cumulative_width_only() {
        let mut part = PartDef::new("p");
        part.add_count(3);
        part.set_cumulable(Cumulable::Width);
        part.set_cutting_size(Size3d::from_mm(10.0, 4.0, 2.0));

        assert_eq!(part.cumulative_cutting_width(), Length::mm(12.0));
        assert_eq!(part.cumulative_cutting_length(), Length::mm(10.0));
    }

    #[test]
    fn test_cumulative_all_and_single() {
        let mut part = PartDef::new("p");
        part.set_cumulable(Cumulable::All);
        part.set_cutting_size(Size3d::from_mm(10.0, 4.0, 2.0));
        part.add_count(1);
        assert_eq!(part.cumulative_cutting_length(), Length::mm(10.0));

        part.add_count(1);
        assert_eq!(part.cumulative_cutting_length(), Length::mm(20.0));
        assert_eq!(part.cumulative_cutting_width(), Length::mm(8.0));
    }

    #[test]
    fn test_idempotent_accumulation() {
        let mut part = PartDef::new("p");
        part.add_entity_id("e1");
        part.add_entity_id("e1");
        part.add_material_origin(MaterialOrigin::Owned);
        part.add_material_origin(MaterialOrigin::Owned);
        part.add_material_origin(MaterialOrigin::Inherited);

        assert_eq!(part.entity_ids().len(), 1);
        part.add_entity_id("e0");
        part.add_entity_id("e1");
        assert_eq!(part.entity_ids(), &["e1".to_string(), "e0".to_string()]);
        assert_eq!(
            part.material_origins(),
            &[MaterialOrigin::Owned, MaterialOrigin::Inherited]
        );
    }

    #[test]
    fn test_serialized_paths_not_deduplicated() {
        let mut part = PartDef::new("p");
        part.add_entity_serialized_path("1.2");
        part.add_entity_serialized_path("1.2");
        assert_eq!(part.entity_serialized_paths().len(), 2);
    }

    #[test]
    fn test_entity_names() {
        let mut part = PartDef::new("p");
        part.add_entity_name("Leg");
        part.add_entity_name("Leg");
        part.add_entity_name("");

        assert_eq!(part.entity_names().len(), 1);
        assert_eq!(part.entity_names()["Leg"], 2);
        assert!(part.contains_blank_entity_names());
    }

    #[test]
    fn test_layers() {
        let mut part = PartDef::new("p");
        part.add_layer("Layer0");
        part.add_layer("Layer0");
        assert!(!part.multiple_layers());
        part.add_layer("Doors");
        assert!(part.multiple_layers());
        assert_eq!(part.layers(), &["Layer0".to_string(), "Doors".to_string()]);
    }

    #[test]
    fn test_net_dimensions_clamp() {
        let mut part = PartDef::new("p");
        part.set_size(Size3d::from_mm(5.0, 20.0, 18.0));
        part.set_cutting_size(Size3d::from_mm(7.0, 1.0, 18.0));
        part.set_edge_decrements(Length::mm(8.0), Length::mm(2.0));

        assert_eq!(part.net_length(), Length::ZERO);
        assert_eq!(part.net_width(), Length::mm(18.0));
        assert_eq!(part.net_cutting_length(), Length::ZERO);
        assert_eq!(part.net_cutting_width(), Length::ZERO);
    }

    #[test]
    fn test_edge_delegation() {
        let mut part = PartDef::new("p");
        let tape = Arc::new(Material::edge_banding("Oak"));
        part.set_edge_materials(Some(tape.clone()), None, None, Some(tape));
        assert_eq!(part.edge_count(), 2);
        assert_eq!(part.edge_pattern(), Some("1100"));
        assert_eq!(part.edge_material_names().len(), 2);
    }

    #[test]
    fn test_edge_errors_and_children() {
        let mut parent = PartDef::new("parent");
        parent.add_edge_error("missing banding material");
        parent.add_child(PartDef::new("child"));
        parent.add_children_warnings(2);

        assert_eq!(parent.edge_errors().len(), 1);
        assert!(parent.is_parent());
        assert_eq!(parent.children()[0].id(), "child");
        assert_eq!(parent.children_warning_count(), 2);
    }

    #[test]
    fn test_final_area_accumulates() {
        let mut part = PartDef::new("p");
        part.add_final_area(1000.0);
        part.add_final_area(500.0);
        assert_eq!(part.final_area(), 1500.0);
    }
}
