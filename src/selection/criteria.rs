//! Selection criteria
//!
//! Built fresh for every request. Blank labels count as unset, and the
//! numeric fields are clamped to at least 1.

use serde::Serialize;

use crate::climate::ClimateCategory;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionCriteria {
    /// Activity label, compared case-insensitively
    pub activity: Option<String>,

    /// Climate label, compared exactly against item `meteo` labels
    pub climate: Option<String>,

    /// None when the user did not say
    pub autonomy_required: Option<bool>,

    /// Highest technical tier the user will face (>= 1)
    pub tech_level_ceiling: u32,

    /// Trip length in days (>= 1)
    pub trip_duration_days: u32,

    // Display-only provenance, never used for filtering
    pub place: Option<String>,
    pub destination: Option<String>,
    pub month: Option<u32>,
    pub climate_narrative: Option<String>,
}

impl Default for SelectionCriteria {
    fn default() -> Self {
        Self {
            activity: None,
            climate: None,
            autonomy_required: None,
            tech_level_ceiling: 1,
            trip_duration_days: 1,
            place: None,
            destination: None,
            month: None,
            climate_narrative: None,
        }
    }
}

impl SelectionCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = non_blank(activity.into());
        self
    }

    pub fn with_climate(mut self, climate: impl Into<String>) -> Self {
        self.climate = non_blank(climate.into());
        self
    }

    pub fn with_climate_category(self, category: ClimateCategory) -> Self {
        self.with_climate(category.label())
    }

    pub fn with_autonomy(mut self, required: bool) -> Self {
        self.autonomy_required = Some(required);
        self
    }

    pub fn with_tech_level(mut self, ceiling: u32) -> Self {
        self.tech_level_ceiling = ceiling.max(1);
        self
    }

    pub fn with_duration(mut self, days: u32) -> Self {
        self.trip_duration_days = days.max(1);
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = non_blank(place.into());
        self
    }

    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_climate_narrative(mut self, narrative: impl Into<String>) -> Self {
        self.climate_narrative = non_blank(narrative.into());
        self
    }
}

pub(crate) fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_labels_are_unset() {
        let c = SelectionCriteria::new().with_activity("  ").with_climate("");
        assert_eq!(c.activity, None);
        assert_eq!(c.climate, None);
    }

    #[test]
    fn test_numeric_fields_clamped() {
        let c = SelectionCriteria::new().with_tech_level(0).with_duration(0);
        assert_eq!(c.tech_level_ceiling, 1);
        assert_eq!(c.trip_duration_days, 1);
    }

    #[test]
    fn test_climate_category_uses_catalog_label() {
        let c = SelectionCriteria::new().with_climate_category(ClimateCategory::Snow);
        assert_eq!(c.climate.as_deref(), Some("Neige"));
    }
}
