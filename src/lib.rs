//! Trend and mean-reversion scores for one-dimensional time series.
//!
//! The trend score measures how closely a series follows a line; the
//! mean-reversion score measures how strongly it oscillates around its own
//! mean. Both are bounded integers meant for ranking many series.

pub mod config;
pub mod report;
pub mod score;
mod stats;

pub use config::{Config, DEFAULT_TREND_GATE};
pub use report::ShapeReport;
pub use score::{DEFAULT_ALPHA, DEFAULT_BETA, ScoreError, mean_reversion_score, trend_score};
