//! Chart rows handed to the D3.js scripts as JSON.
//!
//! A row is one x position: the display label, the ISO date, and one value
//! per series key. Missing values serialize as `null` so line charts can
//! break the line instead of dropping to zero.

use crate::time_range::{filter_by_range, TimeRange};
use satdash_model::indices::{SeriesMeta, COVERAGE_SERIES, TEMPORAL_SERIES};
use satdash_model::TimeseriesPoint;
use satdash_utils::dates;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub label: String,
    pub date: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, Option<f64>>,
}

impl ChartRow {
    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied().flatten()
    }
}

/// Project each point onto the given series, labelled by `label`.
pub fn chart_rows(
    points: &[TimeseriesPoint],
    series: &[SeriesMeta],
    label: impl Fn(&TimeseriesPoint) -> String,
) -> Vec<ChartRow> {
    points
        .iter()
        .map(|point| ChartRow {
            label: label(point),
            date: dates::format_date(&point.date),
            values: series
                .iter()
                .map(|meta| (meta.key.to_string(), point.value(meta.field)))
                .collect(),
        })
        .collect()
}

/// Rows for the temporal chart: every mean index, labelled `Mon YY`.
pub fn temporal_rows(points: &[TimeseriesPoint]) -> Vec<ChartRow> {
    chart_rows(points, &TEMPORAL_SERIES, |p| dates::month_label(&p.date))
}

/// Rows for the stacked coverage chart within `range`, labelled with the
/// long date for tooltips. Absent coverage stacks as zero area.
pub fn coverage_rows(points: &[TimeseriesPoint], range: TimeRange) -> Vec<ChartRow> {
    let windowed = filter_by_range(points, range);
    let mut rows = chart_rows(&windowed, &COVERAGE_SERIES, |p| dates::long_label(&p.date));
    for row in &mut rows {
        for value in row.values.values_mut() {
            value.get_or_insert(0.0);
        }
    }
    rows
}

/// `[{key, label, color}]` for a chart legend.
pub fn series_config(series: &[SeriesMeta]) -> serde_json::Value {
    serde_json::to_value(series).unwrap_or_default()
}
