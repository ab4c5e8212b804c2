//! Settings
//!
//! Optional JSON settings file plus environment overrides. Every section has
//! defaults, so an empty object (or no file at all) is a valid configuration.
//!
//! ```json
//! {
//!   "climate": { "cold_max_celsius": 10, "hot_min_celsius": 22 },
//!   "selection": { "autonomy_policy": "ignore" },
//!   "destinations": {
//!     "vercors": { "label": "Vercors", "activity": "Trek", "climate": "Tempéré", "autonomy": true, "tech_level": 1 }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::climate::ClimateThresholds;
use crate::selection::{AutonomyPolicy, PresetTable, SelectionEngine};

pub const ENV_COLD_MAX: &str = "GEAR_COLD_MAX_C";
pub const ENV_HOT_MIN: &str = "GEAR_HOT_MIN_C";
pub const ENV_RAIN: &str = "GEAR_RAIN_MM_PER_DAY";
pub const ENV_SNOW: &str = "GEAR_SNOW_TOTAL";
pub const ENV_AUTONOMY_POLICY: &str = "GEAR_AUTONOMY_POLICY";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionSettings {
    pub autonomy_policy: AutonomyPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub climate: ClimateThresholds,
    pub selection: SelectionSettings,

    /// Extra or replacement presets, merged over the built-in ones
    #[serde(rename = "destinations")]
    pub extra_destinations: PresetTable,
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;

        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings JSON: {:?}", path))?;

        tracing::info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Load from `path` when given, otherwise defaults; then apply the
    /// environment overrides
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut settings = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        settings.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// Apply overrides from a key lookup (the process environment in
    /// production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let float = |key: &str| -> Result<Option<f64>> {
            lookup(key)
                .map(|v| {
                    v.trim()
                        .parse::<f64>()
                        .with_context(|| format!("{} must be a number, got '{}'", key, v))
                })
                .transpose()
        };

        if let Some(v) = float(ENV_COLD_MAX)? {
            self.climate.cold_max_celsius = v;
        }
        if let Some(v) = float(ENV_HOT_MIN)? {
            self.climate.hot_min_celsius = v;
        }
        if let Some(v) = float(ENV_RAIN)? {
            self.climate.heavy_rain_mm_per_day = v;
        }
        if let Some(v) = float(ENV_SNOW)? {
            self.climate.heavy_snow_total = v;
        }
        if let Some(v) = lookup(ENV_AUTONOMY_POLICY) {
            self.selection.autonomy_policy = v
                .parse()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("Invalid {}", ENV_AUTONOMY_POLICY))?;
        }

        if self.climate.cold_max_celsius >= self.climate.hot_min_celsius {
            tracing::warn!(
                "Cold threshold {} °C is not below hot threshold {} °C",
                self.climate.cold_max_celsius,
                self.climate.hot_min_celsius
            );
        }
        Ok(())
    }

    /// Built-in presets with the configured ones merged over them
    pub fn destinations(&self) -> PresetTable {
        let mut table = PresetTable::builtin();
        table.extend(self.extra_destinations.clone());
        table
    }

    pub fn engine(&self) -> SelectionEngine {
        SelectionEngine::new(self.selection.autonomy_policy)
    }
}
