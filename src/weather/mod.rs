//! Weather Resolution
//!
//! Derives the climate criteria of a trip from an address and a month: the
//! address is geocoded, last year's archive for that month is fetched and
//! classified, and the result is folded into the selection criteria.
//!
//! Geocoding and archive retrieval are collaborators behind the [`Geocoder`]
//! and [`WeatherArchive`] traits. Only their response parsers live here
//! (`nominatim.rs`, `open_meteo.rs`).

pub mod nominatim;
pub mod open_meteo;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::climate::{classify, ClimateCategory, ClimateClassification, ClimateSample, ClimateThresholds};
use crate::error::{GearError, GearResult};
use crate::selection::SelectionCriteria;

/// Activity assumed when weather-derived criteria leave it unset
pub const DEFAULT_ACTIVITY: &str = "Randonnée";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoLocation {
    pub coordinates: Coordinates,
    pub display_name: String,
}

/// Address → coordinates. `Ok(None)` means the address matched nothing.
pub trait Geocoder {
    fn geocode(&self, address: &str) -> GearResult<Option<GeoLocation>>;
}

/// Daily observations for a location and window. Failures surface as
/// `DataUnavailable`.
pub trait WeatherArchive {
    fn daily_sample(&self, at: Coordinates, window: &MonthWindow) -> GearResult<ClimateSample>;
}

// ============================================================================
// Month window
// ============================================================================

/// First and last day of one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthWindow {
    pub fn for_month(year: i32, month: u32) -> GearResult<Self> {
        let invalid = || GearError::InvalidParameter(format!("no month {} in year {}", month, year));

        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let end = next_month.and_then(|d| d.pred_opt()).ok_or_else(invalid)?;

        Ok(Self { start, end })
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

/// The archive only holds complete years, so the previous one is used
pub fn reference_year(today: NaiveDate) -> i32 {
    today.year() - 1
}

// ============================================================================
// Resolution
// ============================================================================

/// Outcome of a successful weather lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherResolution {
    pub location: GeoLocation,
    pub month: u32,
    pub classification: ClimateClassification,
}

impl WeatherResolution {
    /// Fold the derived weather into user criteria.
    ///
    /// The temperature category only fills an unset climate, but heavy snow
    /// and heavy rain replace whatever was chosen.
    pub fn apply_to(&self, mut criteria: SelectionCriteria) -> SelectionCriteria {
        if criteria.climate.is_none() {
            criteria.climate = Some(self.classification.category.label().to_string());
        }
        if self.classification.heavy_snow {
            criteria.climate = Some(ClimateCategory::Snow.label().to_string());
        } else if self.classification.heavy_rain {
            criteria.climate = Some(ClimateCategory::Rain.label().to_string());
        }

        if criteria.activity.is_none() {
            criteria.activity = Some(DEFAULT_ACTIVITY.to_string());
        }

        criteria.month = Some(self.month);
        criteria
            .with_place(self.location.display_name.clone())
            .with_climate_narrative(self.classification.narrative.clone())
    }
}

/// Geocode `address`, fetch `month` of `year` and classify it.
///
/// Any failure stops the lookup; the caller must not select with a climate
/// derived from a failed resolution.
pub fn resolve_weather<G, A>(
    geocoder: &G,
    archive: &A,
    address: &str,
    month: u32,
    year: i32,
    thresholds: &ClimateThresholds,
) -> GearResult<WeatherResolution>
where
    G: Geocoder + ?Sized,
    A: WeatherArchive + ?Sized,
{
    let address = address.trim();
    if address.is_empty() {
        return Err(GearError::InvalidParameter("address is empty".into()));
    }
    let window = MonthWindow::for_month(year, month)?;

    let location = geocoder
        .geocode(address)?
        .ok_or_else(|| GearError::LocationNotFound(address.to_string()))?;
    tracing::info!(
        "Resolved '{}' to {} ({:.4}, {:.4})",
        address,
        location.display_name,
        location.coordinates.latitude,
        location.coordinates.longitude
    );

    let sample = archive.daily_sample(location.coordinates, &window)?;
    let classification = classify(&sample, thresholds)?;
    tracing::info!(
        "Weather for {}-{:02}: {} ({})",
        year,
        month,
        classification.effective_category().display_name(),
        classification.narrative
    );

    Ok(WeatherResolution {
        location,
        month,
        classification,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedGeocoder(Option<GeoLocation>);

    impl Geocoder for FixedGeocoder {
        fn geocode(&self, _address: &str) -> GearResult<Option<GeoLocation>> {
            Ok(self.0.clone())
        }
    }

    struct FixedArchive(GearResult<ClimateSample>);

    impl WeatherArchive for FixedArchive {
        fn daily_sample(&self, _at: Coordinates, _window: &MonthWindow) -> GearResult<ClimateSample> {
            self.0.clone()
        }
    }

    fn chamonix() -> FixedGeocoder {
        FixedGeocoder(Some(GeoLocation {
            coordinates: Coordinates::new(45.92, 6.87),
            display_name: "Chamonix, France".into(),
        }))
    }

    fn archive(temps: &[f64], precip: &[f64], snow: &[f64]) -> FixedArchive {
        FixedArchive(Ok(ClimateSample::from_values(temps, precip, snow)))
    }

    #[test]
    fn test_month_window() {
        let feb = MonthWindow::for_month(2024, 2).unwrap();
        assert_eq!(feb.end_param(), "2024-02-29");
        assert_eq!(feb.days(), 29);

        let dec = MonthWindow::for_month(2025, 12).unwrap();
        assert_eq!(dec.start_param(), "2025-12-01");
        assert_eq!(dec.end_param(), "2025-12-31");

        assert!(matches!(MonthWindow::for_month(2025, 13), Err(GearError::InvalidParameter(_))));
        assert!(matches!(MonthWindow::for_month(2025, 0), Err(GearError::InvalidParameter(_))));
    }

    #[test]
    fn test_reference_year() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(reference_year(today), 2025);
    }

    #[test]
    fn test_resolution_fills_unset_criteria() {
        let resolution = resolve_weather(
            &chamonix(),
            &archive(&[5.0, 6.0, 7.0], &[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0]),
            "Chamonix",
            7,
            2025,
            &ClimateThresholds::default(),
        )
        .unwrap();

        let criteria = resolution.apply_to(SelectionCriteria::new());
        assert_eq!(criteria.climate.as_deref(), Some("Froid"));
        assert_eq!(criteria.activity.as_deref(), Some(DEFAULT_ACTIVITY));
        assert_eq!(criteria.place.as_deref(), Some("Chamonix, France"));
        assert_eq!(criteria.month, Some(7));
        assert_eq!(criteria.climate_narrative.as_deref(), Some("mean temp ≈ 6.0 °C"));
    }

    #[test]
    fn test_user_climate_kept_unless_overridden() {
        let mild = resolve_weather(
            &chamonix(),
            &archive(&[15.0], &[0.0], &[0.0]),
            "Chamonix",
            6,
            2025,
            &ClimateThresholds::default(),
        )
        .unwrap();
        let kept = mild.apply_to(SelectionCriteria::new().with_climate("Chaud").with_activity("Trek"));
        assert_eq!(kept.climate.as_deref(), Some("Chaud"));
        assert_eq!(kept.activity.as_deref(), Some("Trek"));

        let snowy = resolve_weather(
            &chamonix(),
            &archive(&[-3.0], &[4.0], &[2.0]),
            "Chamonix",
            1,
            2025,
            &ClimateThresholds::default(),
        )
        .unwrap();
        let forced = snowy.apply_to(SelectionCriteria::new().with_climate("Chaud"));
        assert_eq!(forced.climate.as_deref(), Some("Neige"));
    }

    #[test]
    fn test_resolution_failures() {
        let t = ClimateThresholds::default();
        let dry = archive(&[10.0], &[0.0], &[0.0]);

        assert!(matches!(
            resolve_weather(&chamonix(), &dry, "  ", 7, 2025, &t),
            Err(GearError::InvalidParameter(_))
        ));
        assert_eq!(
            resolve_weather(&FixedGeocoder(None), &dry, "Atlantis", 7, 2025, &t),
            Err(GearError::LocationNotFound("Atlantis".into()))
        );

        let down = FixedArchive(Err(GearError::DataUnavailable("HTTP 503".into())));
        assert_eq!(
            resolve_weather(&chamonix(), &down, "Chamonix", 7, 2025, &t),
            Err(GearError::DataUnavailable("HTTP 503".into()))
        );

        let empty = FixedArchive(Ok(ClimateSample::default()));
        assert_eq!(
            resolve_weather(&chamonix(), &empty, "Chamonix", 7, 2025, &t),
            Err(GearError::InsufficientData)
        );
    }
}
