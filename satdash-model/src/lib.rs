//! Core types for the satellite vegetation dashboard.
//!
//! Everything here mirrors `dashboard_data.json`, the snapshot the upstream
//! imagery pipeline writes. The snapshot is loaded once and never mutated.

pub mod alert;
pub mod aoi;
pub mod date_format;
pub mod indices;
pub mod prediction;
pub mod snapshot;
pub mod timeseries;
pub mod validate;

pub use alert::Alert;
pub use aoi::{AreaOfInterest, Bounds};
pub use prediction::{Prediction, Predictions};
pub use snapshot::{DashboardData, Parameters};
pub use timeseries::{Dated, TimeseriesPoint};
pub use validate::ValidationIssue;
