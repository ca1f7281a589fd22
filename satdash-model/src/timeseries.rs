use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Anything that sits on a calendar axis.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// One observation date of the area-of-interest statistics.
///
/// The pipeline writes one column per (index, statistic), e.g. `NDVI_mean`,
/// `NDVI_std`, and one per (index, threshold) for coverage, e.g.
/// `area_NDVI_0_4` in km². Columns are kept as an open map so new indices do
/// not need a schema change. `null` (or a `NaN` token) becomes `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesPoint {
    #[serde(with = "crate::date_format")]
    pub date: NaiveDate,
    #[serde(flatten)]
    pub values: BTreeMap<String, Option<f64>>,
}

impl TimeseriesPoint {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            values: BTreeMap::new(),
        }
    }

    /// Builder-style setter, mostly for fixtures.
    pub fn with(mut self, column: &str, value: f64) -> Self {
        self.values.insert(column.to_string(), Some(value));
        self
    }

    /// Value of a column, `None` when the column is absent or null.
    pub fn value(&self, column: &str) -> Option<f64> {
        self.values.get(column).copied().flatten()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }
}

impl Dated for TimeseriesPoint {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
