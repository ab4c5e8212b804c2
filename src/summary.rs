//! Selection Summary
//!
//! One-line digest of the active criteria and the selection totals, e.g.
//! `Activity: Randonnée · Climate: Froid · Tech ≤ 2 · Duration: 5 d · Items: 7`.

use smallvec::SmallVec;

use crate::selection::{SelectionCriteria, SelectionResult};

pub const SEPARATOR: &str = " · ";

/// Build the digest. Unset criteria are left out.
pub fn summarize(criteria: &SelectionCriteria, result: &SelectionResult<'_>) -> String {
    let mut parts: SmallVec<[String; 12]> = SmallVec::new();

    if let Some(place) = &criteria.place {
        parts.push(format!("Place: {}", place));
    }
    if let Some(destination) = &criteria.destination {
        parts.push(destination.clone());
    }
    if let Some(activity) = &criteria.activity {
        parts.push(format!("Activity: {}", activity));
    }
    if let Some(climate) = &criteria.climate {
        parts.push(format!("Climate: {}", climate));
    }
    if let Some(month) = criteria.month {
        parts.push(format!("Month: {:02}", month));
    }
    if let Some(required) = criteria.autonomy_required {
        parts.push(format!("Autonomy: {}", if required { "yes" } else { "no" }));
    }
    parts.push(format!("Tech ≤ {}", criteria.tech_level_ceiling));
    parts.push(format!("Duration: {} d", criteria.trip_duration_days));
    if let Some(narrative) = &criteria.climate_narrative {
        parts.push(format!("Weather: {}", narrative));
    }
    parts.push(format!("Items: {}", result.total_quantity));
    if result.has_known_weight() {
        parts.push(format!("Weight: {:.0} g", result.total_weight_grams));
    }

    parts.join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EquipmentItem;
    use crate::selection::select;

    #[test]
    fn test_minimal_summary() {
        let criteria = SelectionCriteria::new();
        let result = select(&[], &criteria);
        assert_eq!(summarize(&criteria, &result), "Tech ≤ 1 · Duration: 1 d · Items: 0");
    }

    #[test]
    fn test_full_summary() {
        let catalog = vec![EquipmentItem {
            model: "Réchaud".into(),
            activities: vec!["Randonnée".into()],
            tech_level: 1,
            days_dependent: true,
            weight_grams: Some(80.0),
            ..Default::default()
        }];
        let criteria = SelectionCriteria::new()
            .with_place("Chamonix, France")
            .with_activity("Randonnée")
            .with_climate("Froid")
            .with_month(7)
            .with_autonomy(false)
            .with_tech_level(2)
            .with_duration(3)
            .with_climate_narrative("mean temp ≈ 8.0 °C");
        let result = select(&catalog, &criteria);

        assert_eq!(
            summarize(&criteria, &result),
            "Place: Chamonix, France · Activity: Randonnée · Climate: Froid · Month: 07 · \
             Autonomy: no · Tech ≤ 2 · Duration: 3 d · Weather: mean temp ≈ 8.0 °C · \
             Items: 3 · Weight: 240 g"
        );
    }
}
