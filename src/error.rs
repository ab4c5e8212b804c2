//! Error types for the gear selector.
//!
//! Normalization never fails and selection never fails; errors only come from
//! climate classification and the weather/geocoding boundary.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GearError {
    #[error("insufficient weather data for climate classification")]
    InsufficientData,
    #[error("weather data unavailable: {0}")]
    DataUnavailable(String),
    #[error("location not found: {0}")]
    LocationNotFound(String),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type GearResult<T> = std::result::Result<T, GearError>;
