//! # U-Cutlist Core
//!
//! Shared primitives for the U-Cutlist part aggregation model.
//!
//! The cut-list pipeline scans a model tree, folds identical workpieces into
//! part definitions and reports them. This crate holds the collaborators the
//! part model depends on but does not own.
//!
//! ## Core Components
//!
//! - **Units**: [`Length`], [`LengthUnit`]
//! - **Size model**: [`Size3d`], [`Scale3d`], [`NormalsToDimensions`]
//! - **Materials**: [`Material`], [`MaterialType`], [`MaterialOrigin`]
//! - **Edge sources**: [`GroupDefinition`], [`GroupDef`]
//! - **Formatting**: [`AreaFormatter`], [`DimensionFormatter`]
//! - **Configuration**: [`CutListConfig`]
//!
//! ## Configuration
//!
//! ```rust
//! use u_cutlist_core::{CutListConfig, LengthUnit};
//!
//! let config = CutListConfig::new()
//!     .with_part_order_strategy("-length>name")
//!     .with_part_number_with_letters(false)
//!     .with_area_unit(LengthUnit::Foot);
//! assert!(config.validate().is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialization/deserialization support

pub mod config;
pub mod error;
pub mod format;
pub mod material;
pub mod size;
pub mod units;

// Re-exports
pub use config::{CutListConfig, DEFAULT_PART_ORDER_STRATEGY};
pub use error::{Error, Result};
pub use format::{AreaFormatter, DimensionFormatter};
pub use material::{GroupDef, GroupDefinition, Material, MaterialOrigin, MaterialType};
pub use size::{Axis, Dimension, NormalsToDimensions, Scale3d, Size3d};
pub use units::{Length, LengthUnit};
