//! Selection Engine
//!
//! Filters a normalized catalog against one set of criteria and annotates the
//! surviving items with a pack quantity. Stateless: the catalog is borrowed
//! read-only, so independent selections can run in parallel.

use rayon::prelude::*;
use serde::Serialize;

use super::criteria::SelectionCriteria;
use super::rules::{evaluate, AutonomyPolicy, Rejection};
use crate::catalog::EquipmentItem;

/// One selected catalog item with its quantity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedItem<'a> {
    pub item: &'a EquipmentItem,
    pub quantity: u32,
}

impl SelectedItem<'_> {
    /// Weight for the whole quantity, None when the item declares no weight
    pub fn line_weight(&self) -> Option<f64> {
        self.item.weight_grams.map(|w| w * self.quantity as f64)
    }
}

/// Filtered, quantity-annotated items in catalog order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SelectionResult<'a> {
    pub items: Vec<SelectedItem<'a>>,

    /// Sum of quantities, saturating at `u32::MAX`
    pub total_quantity: u32,

    /// Sum of declared weights times quantity
    pub total_weight_grams: f64,

    /// Selected lines whose weight is unknown
    pub unknown_weight_count: usize,
}

impl<'a> SelectionResult<'a> {
    fn from_items(items: Vec<SelectedItem<'a>>) -> Self {
        let total_quantity = items.iter().fold(0u32, |acc, s| acc.saturating_add(s.quantity));
        let total_weight_grams = items.iter().filter_map(|s| s.line_weight()).sum();
        let unknown_weight_count = items.iter().filter(|s| s.item.weight_grams.is_none()).count();
        Self {
            items,
            total_quantity,
            total_weight_grams,
            unknown_weight_count,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when at least one selected item declares a weight
    pub fn has_known_weight(&self) -> bool {
        self.unknown_weight_count < self.items.len()
    }
}

/// Items needed once per day scale with the trip, everything else is packed once
pub fn quantity_for(item: &EquipmentItem, criteria: &SelectionCriteria) -> u32 {
    if item.days_dependent {
        criteria.trip_duration_days.max(1)
    } else {
        1
    }
}

/// Selection engine configured with an autonomy policy
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionEngine {
    policy: AutonomyPolicy,
}

impl SelectionEngine {
    pub fn new(policy: AutonomyPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> AutonomyPolicy {
        self.policy
    }

    /// First rule the item fails, if any
    pub fn evaluate(&self, item: &EquipmentItem, criteria: &SelectionCriteria) -> Result<(), Rejection> {
        evaluate(item, criteria, self.policy)
    }

    /// Filter the catalog and compute quantities
    pub fn select<'a>(&self, catalog: &'a [EquipmentItem], criteria: &SelectionCriteria) -> SelectionResult<'a> {
        let mut selected = Vec::new();
        for item in catalog {
            match self.evaluate(item, criteria) {
                Ok(()) => selected.push(SelectedItem {
                    item,
                    quantity: quantity_for(item, criteria),
                }),
                Err(reason) => {
                    tracing::debug!("Rejected '{}': {}", item.display_name(), reason)
                }
            }
        }

        let result = SelectionResult::from_items(selected);
        tracing::info!(
            "Selected {} of {} items ({} to pack)",
            result.len(),
            catalog.len(),
            result.total_quantity
        );
        result
    }

    /// Every item paired with its verdict, in catalog order
    pub fn explain<'a>(
        &self,
        catalog: &'a [EquipmentItem],
        criteria: &SelectionCriteria,
    ) -> Vec<(&'a EquipmentItem, Result<(), Rejection>)> {
        catalog
            .iter()
            .map(|item| (item, self.evaluate(item, criteria)))
            .collect()
    }

    /// Run independent selections over the same catalog in parallel.
    /// Results are in the same order as `criteria`.
    pub fn select_many<'a>(
        &self,
        catalog: &'a [EquipmentItem],
        criteria: &[SelectionCriteria],
    ) -> Vec<SelectionResult<'a>> {
        criteria
            .par_iter()
            .map(|c| self.select(catalog, c))
            .collect()
    }
}

/// Select with the default autonomy policy
pub fn select<'a>(catalog: &'a [EquipmentItem], criteria: &SelectionCriteria) -> SelectionResult<'a> {
    SelectionEngine::default().select(catalog, criteria)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn item(model: &str, days_dependent: bool, weight: Option<f64>) -> EquipmentItem {
        EquipmentItem {
            model: model.into(),
            tech_level: 1,
            days_dependent,
            weight_grams: weight,
            ..Default::default()
        }
    }

    #[test]
    fn test_quantity_law() {
        let catalog = vec![item("Lyophilisé", true, Some(120.0)), item("Popote", false, Some(300.0))];
        let criteria = SelectionCriteria::new().with_duration(4);
        let result = select(&catalog, &criteria);

        assert_eq!(result.items[0].quantity, 4);
        assert_eq!(result.items[1].quantity, 1);
        assert_eq!(result.total_quantity, 5);
        assert_relative_eq!(result.total_weight_grams, 4.0 * 120.0 + 300.0);
    }

    #[test]
    fn test_huge_duration_saturates_total() {
        let catalog = vec![item("Lyophilisé", true, Some(120.0)), item("Barre", true, None)];
        let result = select(&catalog, &SelectionCriteria::new().with_duration(u32::MAX));

        assert_eq!(result.items[0].quantity, u32::MAX);
        assert_eq!(result.total_quantity, u32::MAX);
        assert_relative_eq!(result.total_weight_grams, u32::MAX as f64 * 120.0);
    }

    #[test]
    fn test_unknown_weights_counted_not_summed() {
        let catalog = vec![item("Carte", false, None), item("Boussole", false, Some(30.0))];
        let result = select(&catalog, &SelectionCriteria::new());
        assert_eq!(result.unknown_weight_count, 1);
        assert_relative_eq!(result.total_weight_grams, 30.0);
        assert!(result.has_known_weight());
        assert_eq!(result.items[0].line_weight(), None);
    }

    #[test]
    fn test_empty_catalog() {
        let result = select(&[], &SelectionCriteria::new().with_activity("Trek"));
        assert!(result.is_empty());
        assert_eq!(result.total_quantity, 0);
        assert!(!result.has_known_weight());
    }

    #[test]
    fn test_catalog_order_preserved() {
        let catalog = vec![item("A", false, None), item("B", false, None), item("C", false, None)];
        let result = select(&catalog, &SelectionCriteria::new());
        let names: Vec<_> = result.items.iter().map(|s| s.item.model.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_select_is_idempotent() {
        let catalog = vec![item("A", true, Some(10.0)), item("B", false, None)];
        let criteria = SelectionCriteria::new().with_duration(3);
        assert_eq!(select(&catalog, &criteria), select(&catalog, &criteria));
    }

    #[test]
    fn test_select_many_matches_sequential() {
        let catalog = vec![
            EquipmentItem { tech_level: 3, ..item("Piolet", false, Some(400.0)) },
            item("Gourde", true, Some(150.0)),
        ];
        let requests = vec![
            SelectionCriteria::new().with_tech_level(1).with_duration(2),
            SelectionCriteria::new().with_tech_level(3).with_duration(5),
        ];
        let engine = SelectionEngine::default();
        let parallel = engine.select_many(&catalog, &requests);
        let sequential: Vec<_> = requests.iter().map(|c| engine.select(&catalog, c)).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_explain_reports_reasons() {
        let catalog = vec![EquipmentItem { tech_level: 4, ..item("Broches", false, None) }];
        let verdicts = SelectionEngine::default().explain(&catalog, &SelectionCriteria::new());
        assert_eq!(verdicts[0].1, Err(Rejection::TechLevel));
    }
}
