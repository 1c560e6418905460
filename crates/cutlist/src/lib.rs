//! # U-Cutlist
//!
//! Part definition aggregation for cut-list generation.
//!
//! A model scan produces many instances of the same workpiece. This crate
//! folds them into [`PartDef`]s keyed by a fingerprint, orders the result with
//! a user-chosen strategy and exports display-ready records.
//!
//! ## Core Components
//!
//! - **Fingerprints**: [`generate_part_id`], [`generate_part_id_with_config`] - dedup key of a scanned instance
//! - **Part definitions**: [`PartDef`] - accumulated facts about identical parts
//! - **Edge model**: [`Edges`], [`EdgeSide`] - four banding slots and the edge pattern
//! - **Ordering**: [`PartOrderStrategy`], [`part_order`] - multi-key comparator
//! - **Export**: [`to_record`], [`PartRecord`] - leaf and parent presentation records
//! - **Registry**: [`PartDefs`] - lookup-or-create by fingerprint
//! - **Report**: [`build_report`] - ordering, numbering and export in one pass
//!
//! ## Quick Start
//!
//! ```rust
//! use u_cutlist::{build_report, generate_part_id, CutListConfig, PartDefs, Size3d};
//!
//! let mut parts = PartDefs::new();
//! for (entity, path) in [("e1", "1.4"), ("e2", "1.5")] {
//!     let size = Size3d::from_mm(600.0, 300.0, 18.0);
//!     let id = generate_part_id("board", "shelf-def", &size, None);
//!     let part = parts.get_or_create(&id);
//!     part.add_count(1);
//!     part.set_size(size);
//!     part.set_cutting_size(size);
//!     part.add_entity_id(entity);
//!     part.add_entity_serialized_path(path);
//! }
//! assert_eq!(parts.len(), 1);
//!
//! let records = build_report(parts.into_vec(), &CutListConfig::default(), None).unwrap();
//! assert_eq!(records[0].as_leaf().unwrap().count, 2);
//! ```

pub mod edge;
pub mod export;
pub mod fingerprint;
pub mod numbering;
pub mod order;
pub mod part_def;
pub mod registry;
pub mod report;

// Re-exports
pub use edge::{EdgeSide, EdgeSlot, Edges};
pub use export::{to_record, EdgeDecrements, LeafPartRecord, ParentPartRecord, PartRecord};
pub use fingerprint::{
    generate_part_id, generate_part_id_with_config, DynamicName, NameResolver, ResolvedName,
};
pub use numbering::PartNumbering;
pub use order::{part_order, PartOrderStrategy, SortDirection, SortKey, SortValue, SORT_KEYS};
pub use part_def::{Cumulable, PartDef};
pub use registry::PartDefs;
pub use report::build_report;
pub use u_cutlist_core::{
    AreaFormatter, CutListConfig, DimensionFormatter, Error, GroupDef, GroupDefinition, Length,
    LengthUnit, Material, MaterialOrigin, MaterialType, Result, Scale3d, Size3d,
    DEFAULT_PART_ORDER_STRATEGY,
};
