//! Gear Selector
//!
//! Recommends which outdoor equipment to pack for a trip from a fixed
//! catalog, given an activity, a climate, an autonomy need, a technical
//! ceiling and a trip length.
//!
//! - `catalog/`: raw record normalization into `EquipmentItem`
//! - `climate/`: daily weather samples → climate category
//! - `selection/`: ordered filter rules, quantities, destination presets
//! - `summary`: one-line digest of criteria and totals
//! - `weather/`: address + month → climate criteria, via collaborator traits
//! - `config`: settings file and environment overrides

pub mod error;
pub mod utils;
pub mod catalog;
pub mod climate;
pub mod selection;
pub mod summary;
pub mod weather;
pub mod config;

// Re-export commonly used types
pub use error::{GearError, GearResult};
pub use catalog::{load_catalog, normalize, EquipmentItem};
pub use climate::{classify, ClimateCategory, ClimateClassification, ClimateSample, ClimateThresholds};
pub use selection::{
    select, AutonomyPolicy, DestinationPreset, PresetTable, Rejection, SelectedItem,
    SelectionCriteria, SelectionEngine, SelectionResult,
};
pub use summary::summarize;
pub use weather::{resolve_weather, Geocoder, WeatherArchive, WeatherResolution};
pub use config::Settings;
