//! The three chart cards. Each reads the snapshot from `AppState` and renders
//! its rows through the D3 bridge.

mod coverage;
mod predictions;
mod temporal;

pub use coverage::CoveragePanel;
pub use predictions::PredictionPanel;
pub use temporal::TemporalPanel;
