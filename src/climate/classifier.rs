//! Climate Classifier
//!
//! Reduces a window of daily observations to a temperature category plus
//! heavy-rain and heavy-snow flags. The label used for gear filtering is
//! derived with a fixed precedence: snow, then rain, then temperature.

use serde::{Deserialize, Serialize};

use super::category::ClimateCategory;
use super::sample::{mean_of_present, sum_of_present, ClimateSample};
use crate::error::{GearError, GearResult};

/// Classification thresholds. Deployments may tune these from settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateThresholds {
    /// Mean temperature at or below this is Cold (°C)
    pub cold_max_celsius: f64,

    /// Mean temperature at or above this is Hot (°C)
    pub hot_min_celsius: f64,

    /// Mean daily precipitation at or above this is heavy rain (mm/day)
    pub heavy_rain_mm_per_day: f64,

    /// Cumulative snowfall strictly above this is heavy snow
    pub heavy_snow_total: f64,
}

impl Default for ClimateThresholds {
    fn default() -> Self {
        Self {
            cold_max_celsius: 10.0,
            hot_min_celsius: 22.0,
            heavy_rain_mm_per_day: 3.0,
            heavy_snow_total: 0.4,
        }
    }
}

impl ClimateThresholds {
    /// Temperature-only category
    pub fn temperature_category(&self, mean_celsius: f64) -> ClimateCategory {
        if mean_celsius >= self.hot_min_celsius {
            ClimateCategory::Hot
        } else if mean_celsius <= self.cold_max_celsius {
            ClimateCategory::Cold
        } else {
            ClimateCategory::Temperate
        }
    }
}

/// Result of classifying one sample window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateClassification {
    /// Cold, Temperate or Hot
    pub category: ClimateCategory,

    pub heavy_rain: bool,
    pub heavy_snow: bool,

    pub mean_temperature: f64,
    pub mean_precipitation: f64,
    pub total_snowfall: f64,

    /// Display-only digest, e.g. "mean temp ≈ 6.0 °C, rainy"
    pub narrative: String,
}

impl ClimateClassification {
    /// Label to filter gear with: snow beats rain beats temperature
    pub fn effective_category(&self) -> ClimateCategory {
        if self.heavy_snow {
            ClimateCategory::Snow
        } else if self.heavy_rain {
            ClimateCategory::Rain
        } else {
            self.category
        }
    }
}

/// Classify a sample window.
///
/// Fails with `InsufficientData` when the window is empty or holds no
/// temperature reading at all.
pub fn classify(sample: &ClimateSample, thresholds: &ClimateThresholds) -> GearResult<ClimateClassification> {
    if sample.is_empty() {
        return Err(GearError::InsufficientData);
    }

    let mean_temperature = mean_of_present(&sample.temperatures).ok_or(GearError::InsufficientData)?;
    // Missing precipitation days count as dry
    let mean_precipitation = sum_of_present(&sample.precipitation) / sample.days() as f64;
    let total_snowfall = sum_of_present(&sample.snowfall);

    let category = thresholds.temperature_category(mean_temperature);
    let heavy_rain = mean_precipitation >= thresholds.heavy_rain_mm_per_day;
    let heavy_snow = total_snowfall > thresholds.heavy_snow_total;

    let mut narrative = format!("mean temp ≈ {:.1} °C", mean_temperature);
    if heavy_rain {
        narrative.push_str(", rainy");
    }
    if heavy_snow {
        narrative.push_str(", snow possible");
    }

    tracing::debug!(
        "Classified {} days: {:.1} °C, {:.1} mm/day, {:.1} snow -> {}",
        sample.days(),
        mean_temperature,
        mean_precipitation,
        total_snowfall,
        category.display_name()
    );

    Ok(ClimateClassification {
        category,
        heavy_rain,
        heavy_snow,
        mean_temperature,
        mean_precipitation,
        total_snowfall,
        narrative,
    })
}
