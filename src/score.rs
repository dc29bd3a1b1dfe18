//! Trend and mean-reversion scores.
//!
//! Both scores drop NaN entries first and re-index the remaining values from 1.
//! A score is always a bounded integer; anything that would make the underlying
//! ratio undefined is reported as a [`ScoreError`] instead of a sentinel value.

use crate::stats::{compute_position_cov, compute_qv, compute_var, drop_missing, scale_to_unit};
use thiserror::Error;

/// Default exponent applied to the trend correlation.
pub const DEFAULT_ALPHA: f64 = 3.0;

/// Default decay rate of the mean-reversion score.
pub const DEFAULT_BETA: f64 = 15.0;

/// Minimum number of non-missing values either score needs.
pub const MIN_VALS: usize = 2;

/// Failure to score a series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("series must have at least {min} non-missing values, but has {n_vals}")]
    TooFewValues { n_vals: usize, min: usize },

    #[error("series has zero variance")]
    ZeroVariance,

    #[error("series has zero quadratic variation")]
    ZeroQuadraticVariation,

    #[error("value at index {index} is not finite: {val}")]
    NonFinite { index: usize, val: f64 },

    #[error("{name} must be finite and positive, but is {val}")]
    InvalidExponent { name: &'static str, val: f64 },
}

impl ScoreError {
    /// Whether the series itself is too short or too flat to be scored.
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Self::TooFewValues { .. } | Self::ZeroVariance | Self::ZeroQuadraticVariation
        )
    }
}

/// Trend score of a series, in `[-100, 100]`.
///
/// Computes the Pearson correlation `rho` between the values and their
/// positions and returns `round(100 * sign(rho) * |rho|^alpha)`. Only series
/// lying close to a line reach the extremes; larger `alpha` pulls loosely
/// trending series towards 0 faster.
///
/// # Errors
/// Fails if fewer than two values remain after dropping NaN, if the values are
/// all identical, if any value is infinite or if `alpha` is not a finite
/// positive number.
pub fn trend_score(time_series: &[f64], alpha: f64) -> Result<i32, ScoreError> {
    check_exponent("alpha", alpha)?;
    let vals = clean_series(time_series)?;
    trend_from_clean(&vals, alpha)
}

/// Mean-reversion score of a series, in `[0, 100]`.
///
/// Compares the sample variance `x_s` with the quadratic variation `qv` and
/// returns `round(100 * 2^(-beta * x_s / qv))`. Series that jump around a
/// stable mean score high; smooth drifts score low. The score is only
/// meaningful for series whose trend score is close to 0, see
/// [`crate::report::ShapeReport`].
///
/// # Errors
/// Fails if fewer than two values remain after dropping NaN, if consecutive
/// values never change, if any value is infinite or if `beta` is not a finite
/// positive number.
pub fn mean_reversion_score(time_series: &[f64], beta: f64) -> Result<i32, ScoreError> {
    check_exponent("beta", beta)?;
    let vals = clean_series(time_series)?;
    mean_reversion_from_clean(&vals, beta)
}

/// Drop missing values and reject infinite ones.
pub(crate) fn clean_series(time_series: &[f64]) -> Result<Vec<f64>, ScoreError> {
    if let Some((index, &val)) = time_series
        .iter()
        .enumerate()
        .find(|(_, val)| val.is_infinite())
    {
        return Err(ScoreError::NonFinite { index, val });
    }

    let (vals, n_missing) = drop_missing(time_series);
    if n_missing > 0 {
        log::debug!("dropped {n_missing} missing values, {} remain", vals.len());
    }

    if vals.len() < MIN_VALS {
        return Err(ScoreError::TooFewValues {
            n_vals: vals.len(),
            min: MIN_VALS,
        });
    }
    Ok(vals)
}

pub(crate) fn check_exponent(name: &'static str, val: f64) -> Result<(), ScoreError> {
    if !val.is_finite() || val <= 0.0 {
        return Err(ScoreError::InvalidExponent { name, val });
    }
    Ok(())
}

fn is_flat(vals: &[f64]) -> bool {
    vals.iter().all(|&val| val == vals[0])
}

pub(crate) fn trend_from_clean(vals: &[f64], alpha: f64) -> Result<i32, ScoreError> {
    // The mean of identical values is not always bit-exact, so test flatness directly.
    if is_flat(vals) {
        return Err(ScoreError::ZeroVariance);
    }

    // rho is scale-invariant; scaling keeps the squared sums finite and non-zero.
    let (cov_sum, denom_sq) = compute_position_cov(&scale_to_unit(vals));
    let denom = denom_sq.sqrt();
    if denom <= 0.0 {
        return Err(ScoreError::ZeroVariance);
    }

    let rho = (cov_sum / denom).clamp(-1.0, 1.0);
    log::debug!("rho = {rho}");

    // f64::signum maps 0.0 to 1.0.
    if rho == 0.0 {
        return Ok(0);
    }
    Ok(round_score(100.0 * rho.signum() * rho.abs().powf(alpha)))
}

pub(crate) fn mean_reversion_from_clean(vals: &[f64], beta: f64) -> Result<i32, ScoreError> {
    if is_flat(vals) {
        return Err(ScoreError::ZeroQuadraticVariation);
    }

    // var / qv is scale-invariant.
    let vals = scale_to_unit(vals);
    let qv = compute_qv(&vals);
    if qv <= 0.0 {
        return Err(ScoreError::ZeroQuadraticVariation);
    }
    let var = compute_var(&vals);

    let ratio = var / qv;
    log::debug!("var = {var}, qv = {qv}, ratio = {ratio}");

    Ok(round_score(100.0 * (-beta * ratio).exp2()))
}

/// Round half away from zero.
fn round_score(val: f64) -> i32 {
    val.round() as i32
}
