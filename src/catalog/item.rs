//! Canonical equipment item
//!
//! Produced only by the normalizer. Serializes back to the catalog's raw
//! field names so a normalized catalog can be written out and re-read.

use serde::Serialize;

use crate::utils::{eq_ci, lower};

/// Pack label marking self-sufficiency gear
pub const AUTONOMY_PACK: &str = "autonomie";

/// Pack label for the always-carried kit
pub const BASE_PACK: &str = "base";

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EquipmentItem {
    pub category: String,
    pub family: String,
    pub brand: String,
    pub model: String,
    pub details: String,

    /// Activity labels; empty for generic items
    pub activities: Vec<String>,

    /// Pack groups such as "Base" or "Autonomie"
    pub packs: Vec<String>,

    /// Climate labels the item is restricted to; empty means any climate
    pub meteo: Vec<String>,

    /// Minimum technical tier (always >= 1)
    pub tech_level: u32,

    /// Only relevant on self-sufficiency trips
    #[serde(rename = "autonomy")]
    pub autonomy_only: bool,

    /// Quantity scales with trip length
    pub days_dependent: bool,

    #[serde(rename = "weight_g", skip_serializing_if = "Option::is_none")]
    pub weight_grams: Option<f64>,
}

impl EquipmentItem {
    /// "Brand Model", or just the model when no brand is declared
    pub fn display_name(&self) -> String {
        if self.brand.is_empty() {
            self.model.clone()
        } else if self.model.is_empty() {
            self.brand.clone()
        } else {
            format!("{} {}", self.brand, self.model)
        }
    }

    pub fn has_declared_activities(&self) -> bool {
        !self.activities.is_empty()
    }

    pub fn has_activity(&self, label: &str) -> bool {
        self.activities.iter().any(|a| eq_ci(a, label))
    }

    pub fn in_pack(&self, label: &str) -> bool {
        self.packs.iter().any(|p| eq_ci(p, label))
    }

    pub fn in_autonomy_pack(&self) -> bool {
        self.in_pack(AUTONOMY_PACK)
    }

    /// Climate-agnostic items pass every climate filter
    pub fn is_climate_agnostic(&self) -> bool {
        self.meteo.is_empty()
    }

    /// Lowercased "model details" text used for keyword screening
    pub fn search_text(&self) -> String {
        lower(&format!("{} {}", self.model, self.details))
    }
}
