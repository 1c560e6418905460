//! Report assembly.
//!
//! Orders part definitions with the configured strategy, hands out fallback
//! numbers and exports each part. Children of a parent part are ordered with
//! the same strategy and exported into the parent's `children` list; they draw
//! their numbers from the same sequence as top-level parts.
//!
//! Areas are formatted in `config.area_unit` unless a formatter is supplied.

use u_cutlist_core::{AreaFormatter, CutListConfig, DimensionFormatter, Result};

use crate::export::{to_record, PartRecord};
use crate::numbering::PartNumbering;
use crate::order::PartOrderStrategy;
use crate::part_def::PartDef;

/// Builds the presentation records for a scan.
pub fn build_report(
    mut parts: Vec<PartDef>,
    config: &CutListConfig,
    formatter: Option<&dyn AreaFormatter>,
) -> Result<Vec<PartRecord>> {
    config.validate()?;
    let default_formatter = DimensionFormatter::new(config.area_unit);
    let formatter = formatter.unwrap_or(&default_formatter);
    let strategy = PartOrderStrategy::parse(&config.part_order_strategy);
    let mut numbering = PartNumbering::from_config(config)?;

    strategy.sort(&mut parts);
    Ok(parts
        .iter_mut()
        .map(|part| export_part(part, &strategy, &mut numbering, formatter))
        .collect())
}

fn export_part(
    part: &mut PartDef,
    strategy: &PartOrderStrategy,
    numbering: &mut PartNumbering,
    formatter: &dyn AreaFormatter,
) -> PartRecord {
    if !part.is_parent() {
        let number = numbering.next().unwrap_or_default();
        return to_record(part, &number, formatter);
    }

    strategy.sort(part.children_mut());
    let mut record = to_record(part, "", formatter);
    if let Some(parent) = record.as_parent_mut() {
        for child in part.children_mut() {
            parent
                .children
                .push(export_part(child, strategy, numbering, formatter));
        }
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_cutlist_core::LengthUnit;

    fn named(id: &str, name: &str) -> PartDef {
        let mut part = PartDef::new(id);
        part.set_name(name, false);
        part.add_count(1);
        part
    }

    #[test]
    fn test_numbers_follow_order() {
        let parts = vec![named("1", "Shelf"), named("2", "Door")];
        let config = CutListConfig::new().with_part_order_strategy("name");
        let records = build_report(parts, &config, None).unwrap();

        let leaves: Vec<_> = records.iter().filter_map(PartRecord::as_leaf).collect();
        assert_eq!(leaves[0].name, "Door");
        assert_eq!(leaves[0].number, "A");
        assert_eq!(leaves[1].name, "Shelf");
        assert_eq!(leaves[1].number, "B");
    }

    #[test]
    fn test_children_exported_into_parent() {
        let mut parent = named("p", "Cabinet");
        parent.add_child(named("c2", "Side"));
        parent.add_child(named("c1", "Back"));
        let config = CutListConfig::new()
            .with_part_order_strategy("name")
            .with_part_number_with_letters(false);

        let records = build_report(vec![parent, named("x", "Apron")], &config, None).unwrap();

        assert_eq!(records[0].as_leaf().map(|l| l.number.as_str()), Some("1"));
        let parent = records[1].as_parent().unwrap();
        let children: Vec<_> = parent
            .children
            .iter()
            .filter_map(PartRecord::as_leaf)
            .map(|l| (l.name.as_str(), l.number.as_str()))
            .collect();
        assert_eq!(children, vec![("Back", "2"), ("Side", "3")]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CutListConfig::new().with_part_number_start("1");
        assert!(build_report(Vec::new(), &config, None).is_err());
    }

    #[test]
    fn test_area_unit_from_config() {
        let one_sq_ft = 304.8 * 304.8;
        let mut part = named("p", "Top");
        part.add_final_area(2.0 * one_sq_ft);
        let config = CutListConfig::new().with_area_unit(LengthUnit::Foot);

        let records = build_report(vec![part.clone()], &config, None).unwrap();
        assert_eq!(
            records[0].as_leaf().unwrap().final_area.as_deref(),
            Some("2.00 ft²")
        );

        let metric = DimensionFormatter::new(LengthUnit::Meter);
        let records = build_report(vec![part], &config, Some(&metric)).unwrap();
        assert_eq!(
            records[0].as_leaf().unwrap().final_area.as_deref(),
            Some("0.19 m²")
        );
    }
}
