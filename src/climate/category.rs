//! Climate Categories
//!
//! Coarse weather labels used to restrict weather-dependent gear. The catalog
//! stores them under their French labels, which are what the selection
//! engine compares against.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::utils::eq_ci;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClimateCategory {
    /// Mean temperature at or below the cold threshold
    Cold,

    /// Between the cold and hot thresholds
    Temperate,

    /// Mean temperature at or above the hot threshold
    Hot,

    /// Heavy rain overrides the temperature category
    Rain,

    /// Significant snowfall overrides everything else
    Snow,
}

impl ClimateCategory {
    /// Label as stored in the catalog `meteo` field
    pub fn label(&self) -> &'static str {
        match self {
            ClimateCategory::Cold => "Froid",
            ClimateCategory::Temperate => "Tempéré",
            ClimateCategory::Hot => "Chaud",
            ClimateCategory::Rain => "Pluie",
            ClimateCategory::Snow => "Neige",
        }
    }

    /// English name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            ClimateCategory::Cold => "Cold",
            ClimateCategory::Temperate => "Temperate",
            ClimateCategory::Hot => "Hot",
            ClimateCategory::Rain => "Rain",
            ClimateCategory::Snow => "Snow",
        }
    }

    /// Parse a catalog label or an English name, ignoring case
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| eq_ci(c.label(), label) || eq_ci(c.display_name(), label))
    }

    pub fn all() -> &'static [ClimateCategory] {
        &[
            ClimateCategory::Cold,
            ClimateCategory::Temperate,
            ClimateCategory::Hot,
            ClimateCategory::Rain,
            ClimateCategory::Snow,
        ]
    }
}

impl fmt::Display for ClimateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ClimateCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("unknown climate category: {}", s))
    }
}

impl Serialize for ClimateCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ClimateCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parsing() {
        assert_eq!(ClimateCategory::from_label("Froid"), Some(ClimateCategory::Cold));
        assert_eq!(ClimateCategory::from_label("tempéré"), Some(ClimateCategory::Temperate));
        assert_eq!(ClimateCategory::from_label("SNOW"), Some(ClimateCategory::Snow));
        assert_eq!(ClimateCategory::from_label("Humide"), None);
    }

    #[test]
    fn test_labels_round_trip_through_serde() {
        for category in ClimateCategory::all() {
            let json = serde_json::to_string(category).unwrap();
            let back: ClimateCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(*category, back);
        }
    }
}
