//! Destination Presets
//!
//! Named defaults that pre-fill selection criteria for well-known trips. The
//! engine never consults them; they only shape the criteria beforehand.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::criteria::SelectionCriteria;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationPreset {
    /// Display label, e.g. "GR20 autonomie"
    pub label: String,
    pub activity: Option<String>,
    pub climate: Option<String>,
    pub autonomy: Option<bool>,
    #[serde(default = "default_tech_level")]
    pub tech_level: u32,
}

fn default_tech_level() -> u32 {
    1
}

impl DestinationPreset {
    fn new(label: &str, activity: &str, climate: &str, autonomy: bool, tech_level: u32) -> Self {
        Self {
            label: label.to_string(),
            activity: Some(activity.to_string()),
            climate: Some(climate.to_string()),
            autonomy: Some(autonomy),
            tech_level,
        }
    }

    /// Fill unset activity, climate and autonomy; always set the tech level.
    pub fn apply(&self, mut criteria: SelectionCriteria) -> SelectionCriteria {
        if criteria.activity.is_none() {
            criteria.activity = self.activity.clone();
        }
        if criteria.climate.is_none() {
            criteria.climate = self.climate.clone();
        }
        if criteria.autonomy_required.is_none() {
            criteria.autonomy_required = self.autonomy;
        }
        criteria.tech_level_ceiling = self.tech_level.max(1);
        criteria.destination = Some(self.label.clone());
        criteria
    }
}

/// Presets indexed by key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetTable {
    presets: FxHashMap<String, DestinationPreset>,
}

impl PresetTable {
    /// The trips shipped with the application
    pub fn builtin() -> Self {
        let mut presets = FxHashMap::default();
        let entries = [
            ("gr20", DestinationPreset::new("GR20 autonomie", "Trek", "Froid", true, 2)),
            ("compostelle", DestinationPreset::new("Compostelle", "Randonnée", "Tempéré", false, 1)),
            ("thailande", DestinationPreset::new("Thaïlande", "Tropical", "Chaud", false, 1)),
            ("alpes", DestinationPreset::new("Alpes (rando)", "Randonnée", "Froid", false, 2)),
            ("alpinisme", DestinationPreset::new("Chamonix (alpinisme)", "Alpinisme", "Froid", false, 3)),
            ("ski", DestinationPreset::new("Ski de rando", "Ski rando", "Neige", false, 3)),
        ];
        for (key, preset) in entries {
            presets.insert(key.to_string(), preset);
        }
        Self { presets }
    }

    /// Lookup by key, ignoring case
    pub fn get(&self, key: &str) -> Option<&DestinationPreset> {
        self.presets.get(&key.trim().to_lowercase())
    }

    /// Add or replace entries
    pub fn extend(&mut self, other: PresetTable) {
        for (key, preset) in other.presets {
            self.presets.insert(key.to_lowercase(), preset);
        }
    }

    /// Keys in alphabetical order
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
