use crate::config::Config;
use crate::score::{
    ScoreError, check_exponent, clean_series, mean_reversion_from_clean, trend_from_clean,
};
use serde::{Deserialize, Serialize};

/// Shape summary of a single series.
///
/// The mean-reversion score is only reported when the trend score lies inside
/// the configured trend gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeReport {
    /// Number of values that were scored.
    pub n_vals: usize,
    /// Number of missing values that were dropped.
    pub n_missing: usize,
    pub trend: i32,
    pub mean_reversion: Option<i32>,
}

impl ShapeReport {
    pub fn new(time_series: &[f64], cfg: &Config) -> Result<Self, ScoreError> {
        check_exponent("alpha", cfg.trend.alpha)?;
        check_exponent("beta", cfg.mean_reversion.beta)?;

        let vals = clean_series(time_series)?;
        let n_missing = time_series.len() - vals.len();

        let trend = trend_from_clean(&vals, cfg.trend.alpha)?;

        let mean_reversion = if trend.unsigned_abs() <= cfg.mean_reversion.trend_gate {
            Some(mean_reversion_from_clean(&vals, cfg.mean_reversion.beta)?)
        } else {
            log::debug!(
                "trend {trend} outside gate {}, skipping mean reversion",
                cfg.mean_reversion.trend_gate
            );
            None
        };

        Ok(Self {
            n_vals: vals.len(),
            n_missing,
            trend,
            mean_reversion,
        })
    }
}
