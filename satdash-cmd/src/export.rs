//! CSV export of the observation series.

use anyhow::Context;
use log::info;
use satdash_data::{filter_by_range, TimeRange};
use satdash_model::{DashboardData, TimeseriesPoint};
use satdash_utils::dates;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

pub fn run_export(path: &Path, out: &Path, range: TimeRange, columns: &[String]) -> anyhow::Result<()> {
    let data = DashboardData::from_path(path)?;
    let points = filter_by_range(&data.timeseries, range);
    let columns = if columns.is_empty() {
        all_columns(&points)
    } else {
        columns.to_vec()
    };

    let file = std::fs::File::create(out)
        .with_context(|| format!("failed to create {}", out.display()))?;
    write_csv(&points, &columns, file)?;

    info!(
        "Exported {} observations ({}) x {} columns to {}",
        points.len(),
        range.label(),
        columns.len(),
        out.display()
    );
    Ok(())
}

/// Every column present on any point, sorted.
pub fn all_columns(points: &[TimeseriesPoint]) -> Vec<String> {
    points
        .iter()
        .flat_map(|p| p.values.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Header `date,<columns...>`, one record per point. Null or absent values
/// are written as empty fields.
pub fn write_csv<W: Write>(points: &[TimeseriesPoint], columns: &[String], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["date".to_string()];
    header.extend(columns.iter().cloned());
    wtr.write_record(&header)?;

    for point in points {
        let mut record = vec![dates::format_date(&point.date)];
        record.extend(
            columns
                .iter()
                .map(|c| point.value(c).map(|v| v.to_string()).unwrap_or_default()),
        );
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}
