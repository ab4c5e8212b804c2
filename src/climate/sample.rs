//! Daily weather sample
//!
//! Parallel daily series over one observation window. Missing observations
//! are kept as `None` so the series stay aligned.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClimateSample {
    /// Daily mean temperature (°C)
    pub temperatures: Vec<Option<f64>>,

    /// Daily precipitation sum (mm)
    pub precipitation: Vec<Option<f64>>,

    /// Daily snowfall sum
    pub snowfall: Vec<Option<f64>>,
}

impl ClimateSample {
    pub fn new(
        temperatures: Vec<Option<f64>>,
        precipitation: Vec<Option<f64>>,
        snowfall: Vec<Option<f64>>,
    ) -> Self {
        Self { temperatures, precipitation, snowfall }
    }

    /// Build from fully-populated series
    pub fn from_values(temperatures: &[f64], precipitation: &[f64], snowfall: &[f64]) -> Self {
        let wrap = |s: &[f64]| s.iter().copied().map(Some).collect();
        Self::new(wrap(temperatures), wrap(precipitation), wrap(snowfall))
    }

    /// Number of days in the window (the longest series)
    pub fn days(&self) -> usize {
        self.temperatures
            .len()
            .max(self.precipitation.len())
            .max(self.snowfall.len())
    }

    pub fn is_empty(&self) -> bool {
        self.days() == 0
    }
}

/// Mean of the present, finite values
pub(crate) fn mean_of_present(series: &[Option<f64>]) -> Option<f64> {
    let (sum, count) = series
        .iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Sum of the present, finite values
pub(crate) fn sum_of_present(series: &[Option<f64>]) -> f64 {
    series.iter().flatten().filter(|v| v.is_finite()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_missing_values_ignored() {
        let series = vec![Some(4.0), None, Some(8.0), Some(f64::NAN)];
        assert_relative_eq!(mean_of_present(&series).unwrap(), 6.0);
        assert_relative_eq!(sum_of_present(&series), 12.0);
        assert_eq!(mean_of_present(&[None, None]), None);
    }

    #[test]
    fn test_days_uses_longest_series() {
        let sample = ClimateSample::new(vec![Some(1.0)], vec![], vec![None, None]);
        assert_eq!(sample.days(), 2);
        assert!(ClimateSample::default().is_empty());
    }
}
