use crate::score::{DEFAULT_ALPHA, DEFAULT_BETA};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Trend gate applied by [`crate::report::ShapeReport`] when none is configured.
pub const DEFAULT_TREND_GATE: u32 = 25;

/// Scoring configuration parameters.
///
/// Loaded from a TOML file and validated before use; every field is optional
/// and falls back to its default. See [`Config::from_file`] for loading.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Trend score parameters.
    pub trend: TrendConfig,
    /// Mean-reversion score parameters.
    pub mean_reversion: MeanReversionConfig,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrendConfig {
    /// Exponent applied to the absolute correlation.
    pub alpha: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MeanReversionConfig {
    /// Decay rate of the variance to quadratic variation ratio.
    pub beta: f64,
    /// Largest absolute trend score for which the mean-reversion score is reported.
    pub trend_gate: u32,
}

impl Default for MeanReversionConfig {
    fn default() -> Self {
        Self {
            beta: DEFAULT_BETA,
            trend_gate: DEFAULT_TREND_GATE,
        }
    }
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;
        Self::from_toml(&contents)
    }

    /// Parse and validate a [`Config`] from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_num(self.trend.alpha, f64::MIN_POSITIVE..=100.0).context("invalid trend alpha")?;
        check_num(self.mean_reversion.beta, f64::MIN_POSITIVE..=1000.0)
            .context("invalid mean reversion beta")?;
        check_num(self.mean_reversion.trend_gate, 0..=100).context("invalid trend gate")?;

        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}
