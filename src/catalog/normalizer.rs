//! Catalog Normalizer
//!
//! Turns loosely-typed catalog records into [`EquipmentItem`]s. Malformed
//! fields never fail the load: they fall back to empty lists, `false`, level 1
//! or an unknown weight, and a warning is logged.

use serde_json::{Map, Value};

use super::item::EquipmentItem;
use super::raw_list::RawList;
use crate::utils::coerce;

/// Normalize a whole catalog. Records that are not JSON objects are skipped.
pub fn normalize(raw_items: &[Value]) -> Vec<EquipmentItem> {
    let mut items = Vec::with_capacity(raw_items.len());
    for (index, raw) in raw_items.iter().enumerate() {
        match raw {
            Value::Object(record) => items.push(normalize_item(record)),
            other => tracing::warn!(
                "Catalog record {} is not an object ({}), skipped",
                index,
                value_kind(other)
            ),
        }
    }
    items
}

/// Normalize a single record.
pub fn normalize_item(record: &Map<String, Value>) -> EquipmentItem {
    let packs = list_field(record, "packs");
    let activities = list_field(record, "activities");
    let meteo = list_field(record, "meteo");

    let mut item = EquipmentItem {
        category: coerce::text(record.get("category")),
        family: coerce::text(record.get("family")),
        brand: coerce::text(record.get("brand")),
        model: coerce::text(record.get("model")),
        details: coerce::text(record.get("details")),
        activities,
        packs,
        meteo,
        tech_level: coerce::tech_level(record.get("tech_level")),
        autonomy_only: coerce::truthy(record.get("autonomy")),
        days_dependent: coerce::truthy(record.get("days_dependent")),
        weight_grams: coerce::weight_grams(record.get("weight_g")),
    };

    // Pack membership implies the flag
    if item.in_autonomy_pack() {
        item.autonomy_only = true;
    }

    if let Some(raw) = record.get("tech_level") {
        if !raw.is_null() && coerce::number(Some(raw)).map_or(true, |v| v <= 0.0) {
            tracing::warn!(
                "Item '{}': unusable tech_level {}, defaulting to 1",
                item.display_name(),
                raw
            );
        }
    }

    item
}

fn list_field(record: &Map<String, Value>, key: &str) -> Vec<String> {
    let raw = RawList::classify(record.get(key));
    if raw.is_degraded() {
        tracing::warn!("Field '{}' holds an object, treated as empty", key);
    }
    raw.into_tokens()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn test_mixed_shapes() {
        let item = normalize_item(&record(json!({
            "category": "Lampe",
            "family": "Électronique",
            "brand": "Petzl",
            "model": "Actik Core",
            "activities": "['Trek', 'Randonnée']",
            "packs": "Base, Autonomie",
            "meteo": null,
            "tech_level": "2",
            "days_dependent": 0,
            "weight_g": 75
        })));

        assert_eq!(item.activities, vec!["Trek", "Randonnée"]);
        assert_eq!(item.packs, vec!["Base", "Autonomie"]);
        assert!(item.meteo.is_empty());
        assert_eq!(item.tech_level, 2);
        assert!(!item.days_dependent);
        assert!(item.autonomy_only, "autonomy pack implies the flag");
        assert_eq!(item.weight_grams, Some(75.0));
    }

    #[test]
    fn test_defaults_for_empty_record() {
        let item = normalize_item(&Map::new());
        assert_eq!(item, EquipmentItem { tech_level: 1, ..Default::default() });
    }

    #[test]
    fn test_non_object_records_skipped() {
        let items = normalize(&[json!("nope"), json!({"model": "Filtre"}), json!(null)]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].model, "Filtre");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = json!({
            "category": " Cuisine ",
            "activities": ["Trek", " ", "'Randonnée'"],
            "packs": "[\"Autonomie\"]",
            "meteo": "Froid,Neige",
            "tech_level": 0,
            "autonomy": "false",
            "days_dependent": "yes",
            "weight_g": "12.5"
        });
        let once = normalize(&[raw]);
        let reserialized = serde_json::to_value(&once).unwrap();
        let twice = normalize(reserialized.as_array().unwrap());
        assert_eq!(once, twice);
    }
}
