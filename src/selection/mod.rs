//! Equipment Selection
//!
//! Multi-criteria filtering of the normalized catalog and per-item quantity
//! computation.
//!
//! ## Architecture
//! - `criteria.rs` - `SelectionCriteria` built per request
//! - `rules.rs` - ordered filter predicates and the autonomy policy
//! - `engine.rs` - `SelectionEngine`, quantities and totals
//! - `presets.rs` - destination presets that pre-fill criteria

pub mod criteria;
pub mod rules;
pub mod engine;
pub mod presets;

pub use criteria::SelectionCriteria;
pub use rules::{AutonomyPolicy, Rejection};
pub use engine::{quantity_for, select, SelectedItem, SelectionEngine, SelectionResult};
pub use presets::{DestinationPreset, PresetTable};
