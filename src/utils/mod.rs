//! Utility modules for catalog handling
//!
//! - Coercion: lenient scalar conversions for raw catalog fields
//! - Text: case-insensitive matching helpers shared by the selection rules

pub mod coerce;
pub mod text;

pub use text::{contains_ci, eq_ci, lower};
