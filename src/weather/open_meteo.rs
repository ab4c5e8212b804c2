//! Open-Meteo archive boundary
//!
//! Builds the daily-archive query for a month window and extracts the three
//! daily series from the JSON response. Fetching is left to the caller.

use serde_json::Value;

use super::{Coordinates, MonthWindow};
use crate::climate::ClimateSample;
use crate::error::{GearError, GearResult};

pub const ARCHIVE_ENDPOINT: &str = "https://archive-api.open-meteo.com/v1/archive";

const DAILY_VARIABLES: &str = "temperature_2m_mean,precipitation_sum,snowfall_sum";

/// Full request URL for one location and month
pub fn archive_url(at: Coordinates, window: &MonthWindow) -> String {
    format!(
        "{}?latitude={}&longitude={}&start_date={}&end_date={}&daily={}&timezone=auto",
        ARCHIVE_ENDPOINT,
        at.latitude,
        at.longitude,
        window.start_param(),
        window.end_param(),
        DAILY_VARIABLES
    )
}

/// Extract the daily series. A response without any `daily.time` entry is
/// treated as unavailable data; absent series are empty.
pub fn sample_from_archive_response(body: &Value) -> GearResult<ClimateSample> {
    let daily = body
        .get("daily")
        .ok_or_else(|| GearError::DataUnavailable("archive response has no daily block".into()))?;

    let days = daily
        .get("time")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    if days == 0 {
        return Err(GearError::DataUnavailable("archive response has no daily observations".into()));
    }

    Ok(ClimateSample::new(
        series(daily, "temperature_2m_mean"),
        series(daily, "precipitation_sum"),
        series(daily, "snowfall_sum"),
    ))
}

fn series(daily: &Value, key: &str) -> Vec<Option<f64>> {
    daily
        .get(key)
        .and_then(Value::as_array)
        .map(|values| values.iter().map(Value::as_f64).collect())
        .unwrap_or_default()
}
