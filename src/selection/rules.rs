//! Selection Rules
//!
//! The per-item predicate, split into one function per rule. Rules run in a
//! fixed order and stop at the first failure; later rules assume earlier ones
//! already removed irrelevant items.
//!
//! 1. Activity match (with the generic-family exception)
//! 2. Seasonal exclusion of ski gear on plain hiking trips
//! 3. Climate restriction
//! 4. Autonomy
//! 5. Technical ceiling

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::criteria::SelectionCriteria;
use crate::catalog::{EquipmentItem, BASE_PACK};
use crate::utils::{contains_ci, eq_ci, lower};

// ============================================================================
// Rule vocabulary
// ============================================================================

/// Families useful on any trip. An item of one of these families with no
/// declared activity survives an activity mismatch.
pub const GENERIC_FAMILIES: &[&str] = &[
    "électronique",
    "cuisine / hydratation",
    "soin / hygiène / divers",
    "sacs / organisation",
    "accessoires tête/mains/pieds",
    "couchage",
];

/// Base trekking activity, which triggers the seasonal exclusion
pub const BASE_TREKKING_ACTIVITY: &str = "randonnée";

/// Ski-touring activity label
pub const SKI_TOURING_ACTIVITY: &str = "ski rando";

/// Ski and avalanche gear keywords, matched against "model details"
pub const SKI_KEYWORDS: &[&str] = &[
    "ski",
    "backland",
    "maestrale",
    "dva",
    "arva",
    "pelle avalanche",
    "sonde avalanche",
    "peaux",
    "couteaux de ski",
];

// ============================================================================
// Autonomy policy
// ============================================================================

/// What `autonomy_required = true` means.
///
/// The `false` branch always excludes autonomy-only gear. The `true` branch
/// has had two historical meanings, so it is an explicit setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutonomyPolicy {
    /// `true` filters nothing
    #[default]
    Ignore,

    /// `true` keeps only items in the Base pack or an autonomy pack
    RequireBaseOrAutonomyPack,
}

impl AutonomyPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AutonomyPolicy::Ignore => "ignore",
            AutonomyPolicy::RequireBaseOrAutonomyPack => "require_base_or_autonomy_pack",
        }
    }
}

impl FromStr for AutonomyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "ignore" => Ok(AutonomyPolicy::Ignore),
            "require_base_or_autonomy_pack" | "require_packs" => {
                Ok(AutonomyPolicy::RequireBaseOrAutonomyPack)
            }
            other => Err(format!("unknown autonomy policy: {}", other)),
        }
    }
}

// ============================================================================
// Rejections
// ============================================================================

/// First rule an item failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Activity mismatch and not a generic item
    Activity,
    /// Ski or avalanche gear on a hiking trip
    Seasonal,
    /// Restricted to other climates
    Climate,
    /// Autonomy-only gear on a resupplied trip, or outside required packs
    Autonomy,
    /// Above the technical ceiling
    TechLevel,
}

impl Rejection {
    pub fn display_text(&self) -> &'static str {
        match self {
            Rejection::Activity => "not used for this activity",
            Rejection::Seasonal => "ski/avalanche gear excluded for hiking",
            Rejection::Climate => "not suited to this climate",
            Rejection::Autonomy => "autonomy mismatch",
            Rejection::TechLevel => "above technical level",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

// ============================================================================
// Rules
// ============================================================================

/// Run all rules in order and report the first failure
pub fn evaluate(
    item: &EquipmentItem,
    criteria: &SelectionCriteria,
    policy: AutonomyPolicy,
) -> Result<(), Rejection> {
    if !activity_matches(item, criteria) {
        return Err(Rejection::Activity);
    }
    if is_seasonally_excluded(item, criteria) {
        return Err(Rejection::Seasonal);
    }
    if !climate_matches(item, criteria) {
        return Err(Rejection::Climate);
    }
    if !autonomy_matches(item, criteria, policy) {
        return Err(Rejection::Autonomy);
    }
    if !within_tech_ceiling(item, criteria) {
        return Err(Rejection::TechLevel);
    }
    Ok(())
}

/// Rule 1. Direct match on the activity list or category, else the generic
/// exception for items that declare no activity of their own.
pub fn activity_matches(item: &EquipmentItem, criteria: &SelectionCriteria) -> bool {
    let Some(activity) = criteria.activity.as_deref() else {
        return true;
    };

    if item.has_activity(activity) || contains_ci(&item.category, activity) {
        return true;
    }

    // A declared, non-matching activity list is never generic
    !item.has_declared_activities() && is_generic_family(&item.family)
}

pub fn is_generic_family(family: &str) -> bool {
    let family = lower(family);
    GENERIC_FAMILIES.iter().any(|g| family.contains(g))
}

/// Rule 2. Applies even when rule 1 passed.
pub fn is_seasonally_excluded(item: &EquipmentItem, criteria: &SelectionCriteria) -> bool {
    let hiking = criteria
        .activity
        .as_deref()
        .is_some_and(|a| eq_ci(a, BASE_TREKKING_ACTIVITY));
    if !hiking {
        return false;
    }

    if item.has_activity(SKI_TOURING_ACTIVITY) {
        return true;
    }
    let text = item.search_text();
    SKI_KEYWORDS.iter().any(|k| text.contains(k))
}

/// Rule 3. Items with no climate restriction always pass.
pub fn climate_matches(item: &EquipmentItem, criteria: &SelectionCriteria) -> bool {
    match criteria.climate.as_deref() {
        Some(climate) if !item.is_climate_agnostic() => item.meteo.iter().any(|m| m == climate),
        _ => true,
    }
}

/// Rule 4.
pub fn autonomy_matches(item: &EquipmentItem, criteria: &SelectionCriteria, policy: AutonomyPolicy) -> bool {
    let autonomy_item = item.autonomy_only || item.in_autonomy_pack();
    match (criteria.autonomy_required, policy) {
        (Some(false), _) => !autonomy_item,
        (Some(true), AutonomyPolicy::RequireBaseOrAutonomyPack) => {
            autonomy_item || item.in_pack(BASE_PACK)
        }
        _ => true,
    }
}

/// Rule 5.
pub fn within_tech_ceiling(item: &EquipmentItem, criteria: &SelectionCriteria) -> bool {
    item.tech_level <= criteria.tech_level_ceiling
}
