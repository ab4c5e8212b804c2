//! Equipment Catalog
//!
//! Canonical item type plus the normalizer that produces it from raw catalog
//! records.
//!
//! ## Architecture
//! - `raw_list.rs` - tagged-union parser for list fields
//! - `item.rs` - `EquipmentItem`
//! - `normalizer.rs` - record → item conversion
//! - `loader.rs` - JSON file loading

pub mod raw_list;
pub mod item;
pub mod normalizer;
pub mod loader;

pub use item::{EquipmentItem, AUTONOMY_PACK, BASE_PACK};
pub use normalizer::{normalize, normalize_item};
pub use raw_list::{normalize_list, RawList};
pub use loader::{load_catalog, parse_catalog};
