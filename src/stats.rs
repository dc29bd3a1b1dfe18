//! Summary statistics over already-cleaned series.
//!
//! None of these helpers validate their input: callers check lengths and
//! finiteness first.

/// Split a series into its non-missing values, in order, and the number of
/// missing (NaN) values that were dropped.
pub fn drop_missing(time_series: &[f64]) -> (Vec<f64>, usize) {
    let vals: Vec<f64> = time_series
        .iter()
        .copied()
        .filter(|val| !val.is_nan())
        .collect();
    let n_missing = time_series.len() - vals.len();
    (vals, n_missing)
}

/// Divide every value by the largest absolute value, so that all values lie in
/// `[-1, 1]` and their squares neither underflow nor overflow.
///
/// Returns the series unchanged if it is all zeros.
pub fn scale_to_unit(time_series: &[f64]) -> Vec<f64> {
    let scale = time_series
        .iter()
        .fold(0.0_f64, |max_abs, &val| max_abs.max(val.abs()));
    if scale == 0.0 {
        return time_series.to_vec();
    }
    time_series.iter().map(|&val| val / scale).collect()
}

pub fn compute_mean(time_series: &[f64]) -> f64 {
    if time_series.is_empty() {
        return f64::NAN;
    }
    time_series.iter().sum::<f64>() / time_series.len() as f64
}

/// Sum of squared deviations from `mean`.
pub fn compute_sum_sq_dev(time_series: &[f64], mean: f64) -> f64 {
    time_series.iter().map(|&val| (val - mean).powi(2)).sum()
}

/// Bessel-corrected sample variance.
pub fn compute_var(time_series: &[f64]) -> f64 {
    let n_vals = time_series.len();
    if n_vals < 2 {
        return f64::NAN;
    }
    let mean = compute_mean(time_series);
    compute_sum_sq_dev(time_series, mean) / (n_vals - 1) as f64
}

/// Quadratic variation: sum of squared consecutive differences.
pub fn compute_qv(time_series: &[f64]) -> f64 {
    time_series
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).powi(2))
        .sum()
}

/// Pearson correlation between values and their 1-based positions.
///
/// Returns the numerator and the squared denominator separately so the caller
/// can decide how to treat a vanishing denominator.
pub fn compute_position_cov(time_series: &[f64]) -> (f64, f64) {
    let n_vals = time_series.len();
    let mean = compute_mean(time_series);
    let pos_mean = (1 + n_vals) as f64 / 2.0;

    let mut cov_sum = 0.0;
    let mut pos_sum_sq_dev = 0.0;
    for (idx, &val) in time_series.iter().enumerate() {
        let pos_dev = (idx + 1) as f64 - pos_mean;
        cov_sum += (val - mean) * pos_dev;
        pos_sum_sq_dev += pos_dev.powi(2);
    }

    let val_sum_sq_dev = compute_sum_sq_dev(time_series, mean);
    (cov_sum, val_sum_sq_dev * pos_sum_sq_dev)
}
