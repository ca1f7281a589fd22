//! Data shaping for the vegetation dashboard.
//!
//! This crate turns a loaded snapshot into the pieces the panels draw:
//! windowed series, spliced prediction series, trend percentages, JSON rows
//! for the D3.js charts, and the formatted text lines.

pub mod format;
pub mod rows;
pub mod splice;
pub mod time_range;
pub mod trend;

pub use rows::ChartRow;
pub use splice::{splice_prediction, PredictionSeries};
pub use time_range::{filter_by_range, TimeRange};
pub use trend::{series_trend, trend_percentage, Trend, TrendDirection};
