//! Climate Classification
//!
//! Turns raw daily weather observations into the coarse climate label that
//! weather-dependent gear is restricted by.
//!
//! ## Architecture
//! - `category.rs` - the closed set of climate labels
//! - `sample.rs` - daily observation window
//! - `classifier.rs` - thresholds and the classification algorithm

pub mod category;
pub mod sample;
pub mod classifier;

pub use category::ClimateCategory;
pub use sample::ClimateSample;
pub use classifier::{classify, ClimateClassification, ClimateThresholds};
