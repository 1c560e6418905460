//! Integration tests for u-cutlist.

use std::cmp::Ordering;
use std::sync::Arc;

use serde_json::Value;
use u_cutlist::{
    build_report, generate_part_id, part_order, to_record, Cumulable, CutListConfig,
    DimensionFormatter, DynamicName, GroupDef, GroupDefinition, Length, LengthUnit, Material,
    MaterialOrigin, MaterialType, PartDef, PartDefs, PartOrderStrategy, ResolvedName, Size3d,
};

fn formatter() -> DimensionFormatter {
    DimensionFormatter::new(LengthUnit::Millimeter)
}

fn export_json(part: &PartDef) -> Value {
    serde_json::to_value(to_record(part, "A", &formatter())).unwrap()
}

mod fingerprint_tests {
    use super::*;

    #[test]
    fn test_scan_folds_identical_instances() {
        let mut parts = PartDefs::new();
        let instances = [
            ("def-shelf", 600.0, "e1"),
            ("def-shelf", 600.0, "e2"),
            ("def-shelf", 600.0, "e2"),
            ("def-shelf", 800.0, "e3"),
        ];
        for (definition, length, entity) in instances {
            let size = Size3d::from_mm(length, 300.0, 18.0);
            let id = generate_part_id("solid-oak", definition, &size, None);
            let part = parts.get_or_create(&id);
            part.add_count(1);
            part.add_entity_id(entity);
            part.add_entity_serialized_path(format!("0.{}", entity));
        }

        assert_eq!(parts.len(), 2);
        let first = parts.iter().next().unwrap();
        assert_eq!(first.count(), 3);
        assert_eq!(first.entity_ids().len(), 2);
        assert_eq!(first.entity_serialized_paths().len(), 3);
        assert!(first.entity_ids().len() <= first.count());
    }

    #[test]
    fn test_dynamic_names_split_one_definition() {
        let size = Size3d::from_mm(600.0, 300.0, 18.0);
        let left = |_: &str| ResolvedName::new("Left door", true);
        let right = |_: &str| ResolvedName::new("Right door", true);

        let left_id = generate_part_id(
            "g",
            "door",
            &size,
            Some(DynamicName {
                attribute: "name",
                resolver: &left,
            }),
        );
        let right_id = generate_part_id(
            "g",
            "door",
            &size,
            Some(DynamicName {
                attribute: "name",
                resolver: &right,
            }),
        );
        assert_ne!(left_id, right_id);
        assert_ne!(left_id, generate_part_id("g", "door", &size, None));
    }
}

mod accumulation_tests {
    use super::*;

    #[test]
    fn test_name_counts_and_blank_flag() {
        let mut part = PartDef::new("p");
        part.add_entity_name("Leg");
        part.add_entity_name("Leg");
        part.add_entity_name("");

        assert_eq!(part.entity_names().get("Leg"), Some(&2));
        assert_eq!(part.entity_names().len(), 1);
        assert!(part.contains_blank_entity_names());

        let json = export_json(&part);
        assert_eq!(json["entity_names"], serde_json::json!([["Leg", 2]]));
        assert_eq!(json["contains_blank_entity_names"], true);
    }

    #[test]
    fn test_cumulative_cutting_length() {
        let mut part = PartDef::new("p");
        part.add_count(3);
        part.set_cumulable(Cumulable::Length);
        part.set_cutting_size(Size3d::from_mm(10.0, 7.0, 2.0));

        assert_eq!(part.cumulative_cutting_length(), Length::mm(30.0));
        assert_eq!(part.cumulative_cutting_width(), Length::mm(7.0));
    }

    #[test]
    fn test_cumulative_cutting_width() {
        let mut part = PartDef::new("p");
        part.add_count(3);
        part.set_cumulable(Cumulable::Width);
        part.set_cutting_size(Size3d::from_mm(10.0, 4.0, 2.0));

        assert_eq!(part.cumulative_cutting_width(), Length::mm(12.0));
        assert_eq!(part.cumulative_cutting_length(), Length::mm(10.0));

        let json = export_json(&part);
        assert_eq!(json["cumulative_cutting_width"], "12mm");
        assert_eq!(json["cumulative_cutting_length"], "10mm");
    }

    #[test]
    fn test_material_and_origins() {
        let mut part = PartDef::new("p");
        part.set_material(&Material::new("Birch plywood", MaterialType::SheetGood));
        part.add_material_origin(MaterialOrigin::Inherited);
        part.add_material_origin(MaterialOrigin::Inherited);

        let json = export_json(&part);
        assert_eq!(json["material_name"], "Birch plywood");
        assert_eq!(json["material_type"], "sheet_good");
        assert_eq!(json["material_origins"], serde_json::json!(["inherited"]));
    }
}

mod edge_tests {
    use super::*;

    fn tape() -> Option<Arc<Material>> {
        Some(Arc::new(Material::edge_banding("Oak 22mm")))
    }

    #[test]
    fn test_pattern_examples() {
        let mut part = PartDef::new("xmax");
        part.set_edge_materials(None, None, None, tape());
        assert_eq!(part.edge_pattern(), Some("0100"));

        let mut part = PartDef::new("ymin");
        part.set_edge_materials(tape(), None, None, None);
        assert_eq!(part.edge_pattern(), Some("1000"));

        let mut part = PartDef::new("all");
        part.set_edge_materials(tape(), tape(), tape(), tape());
        assert_eq!(part.edge_pattern(), Some("1111"));
        assert_eq!(part.edge_count(), 4);
    }

    #[test]
    fn test_edge_maps_export() {
        let mut part = PartDef::new("p");
        let group: Arc<dyn GroupDefinition> =
            Arc::new(GroupDef::new("oak-tape", "Oak 22mm", Length::mm(22.0)));
        part.set_edge_materials(None, None, None, tape());
        part.set_edge_group_defs(None, None, None, Some(group));
        part.set_edge_entity_ids(None, None, None, Some(vec!["face-9".to_string()]));

        let json = export_json(&part);
        assert_eq!(json["edge_material_names"], serde_json::json!({ "xmax": "Oak 22mm" }));
        assert_eq!(json["edge_std_dimensions"], serde_json::json!({ "xmax": "22mm" }));
        assert_eq!(json["edge_entity_ids"], serde_json::json!({ "xmax": ["face-9"] }));
        assert_eq!(json["edge_count"], 1);
    }
}

mod order_tests {
    use super::*;

    fn part(id: &str, name: &str, count: usize) -> PartDef {
        let mut p = PartDef::new(id);
        p.set_name(name, false);
        p.add_count(count);
        p
    }

    #[test]
    fn test_count_then_reverse_name() {
        let a = part("a", "alpha", 1);
        let b = part("b", "Beta", 1);
        let c = part("c", "gamma", 2);

        assert_eq!(part_order(&b, &a, "count>-name"), Ordering::Less);
        assert_eq!(part_order(&a, &c, "count>-name"), Ordering::Less);
        assert_eq!(part_order(&a, &a, "count>-name"), Ordering::Equal);
    }

    #[test]
    fn test_edge_pattern_sparse_first() {
        let banding = || Some(Arc::new(Material::edge_banding("tape")));
        let mut sparse = part("s", "", 1);
        sparse.set_edge_materials(None, None, banding(), None);
        let mut dense = part("d", "", 1);
        dense.set_edge_materials(banding(), banding(), None, None);

        assert_eq!(part_order(&sparse, &dense, "edge_pattern"), Ordering::Less);
    }

    #[test]
    fn test_malformed_strategy_tolerated() {
        let a = part("a", "b", 1);
        let b = part("b", "a", 1);
        assert_eq!(part_order(&a, &b, ">>nonsense>-"), Ordering::Equal);
        assert_eq!(part_order(&a, &b, "nonsense>name>"), Ordering::Greater);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut parts = vec![part("1", "x", 1), part("2", "x", 1), part("3", "x", 1)];
        PartOrderStrategy::parse("name").sort(&mut parts);
        let ids: Vec<_> = parts.iter().map(PartDef::id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}

mod export_tests {
    use super::*;

    #[test]
    fn test_leaf_shape() {
        let mut part = PartDef::new("leaf");
        part.set_size(Size3d::from_mm(5.0, 300.0, 18.0));
        part.set_cutting_size(Size3d::from_mm(5.0, 300.0, 18.0));
        part.set_edge_decrements(Length::mm(8.0), Length::ZERO);
        part.add_count(1);

        let json = export_json(&part);
        assert_eq!(json["length"], "0mm");
        assert_eq!(json["number"], "A");
        assert_eq!(json["edge_decrements"]["length"], "8mm");
        assert!(json["edge_decrements"]["width"].is_null());
        assert!(json["final_area"].is_null());
        assert!(json["edge_pattern"].is_null());
        assert_eq!(json["l_ratio"].as_f64(), Some(5.0 / 300.0));
        assert_eq!(json["w_ratio"].as_f64(), Some(1.0));
        assert_eq!(json["normals_to_dimensions"]["z_axis"], "thickness");
        assert!(json.get("entity_serialized_paths").is_some());
        assert!(json.get("children_warning_count").is_none());
    }

    #[test]
    fn test_parent_shape_omits_leaf_fields() {
        let mut parent = PartDef::new("parent");
        parent.add_child(PartDef::new("child"));
        parent.add_children_warnings(1);
        parent.add_final_area(2_000_000.0);

        let json = export_json(&parent);
        assert_eq!(json["children_warning_count"], 1);
        assert_eq!(json["children"], serde_json::json!([]));
        assert_eq!(json["final_area"], "2.00 m²");
        for field in [
            "l_ratio",
            "w_ratio",
            "entity_serialized_paths",
            "entity_ids",
            "auto_oriented",
            "not_aligned_on_axes",
            "number",
        ] {
            assert!(json.get(field).is_none(), "parent must not export {}", field);
        }
    }

    #[test]
    fn test_report_nests_children() {
        let mut parent = PartDef::new("cabinet");
        parent.set_name("Cabinet", false);
        let mut child = PartDef::new("side");
        child.set_name("Side", false);
        child.add_count(2);
        parent.add_child(child);

        let config = CutListConfig::new().with_part_order_strategy("name");
        let records = build_report(vec![parent], &config, Some(&formatter())).unwrap();
        let json = serde_json::to_value(&records).unwrap();

        assert_eq!(json[0]["id"], "cabinet");
        assert_eq!(json[0]["children"][0]["id"], "side");
        assert_eq!(json[0]["children"][0]["number"], "A");
        assert_eq!(json[0]["children"][0]["count"], 2);
    }

    #[test]
    fn test_report_uses_configured_area_unit() {
        let mut part = PartDef::new("top");
        part.add_final_area(2.0 * 304.8 * 304.8);
        let config = CutListConfig::new().with_area_unit(LengthUnit::Foot);

        let records = build_report(vec![part], &config, None).unwrap();
        let json = serde_json::to_value(&records).unwrap();
        assert_eq!(json[0]["final_area"], "2.00 ft²");
    }
}
