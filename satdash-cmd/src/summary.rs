//! Text rendering of the dashboard panels.

use satdash_data::format::{
    alert_line, center_line, coordinate_count_line, monitoring_period, predicted_trend_footer,
    summary_cells, trend_footer,
};
use satdash_data::rows::coverage_rows;
use satdash_data::{series_trend, splice_prediction, TimeRange, Trend};
use satdash_model::indices::{COVERAGE_SERIES, PREDICTION_SERIES};
use satdash_model::DashboardData;
use satdash_utils::dates;
use std::io::Write;
use std::path::Path;

/// Load a snapshot and print its summary to stdout.
pub fn run_summary(path: &Path, range: TimeRange) -> anyhow::Result<()> {
    let data = DashboardData::from_path(path)?;
    let stdout = std::io::stdout();
    write_summary(&data, range, &mut stdout.lock())
}

/// Write every panel of the dashboard as plain text.
pub fn write_summary(data: &DashboardData, range: TimeRange, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Satellite Data Dashboard")?;
    writeln!(out, "{}", monitoring_period(&data.parameters))?;
    if let Some(generated) = &data.generated {
        writeln!(out, "Snapshot generated {}", generated)?;
    }

    if !data.alerts.is_empty() {
        writeln!(out)?;
        writeln!(out, "Alerts:")?;
        for alert in &data.alerts {
            writeln!(out, "  {}", alert_line(alert))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Area of interest: {}", data.aoi.name())?;
    match data.aoi.center() {
        Some(center) => writeln!(out, "  {}", center_line(center))?,
        None => writeln!(out, "  No geometry")?,
    }
    writeln!(out, "  {}", coordinate_count_line(&data.aoi))?;

    writeln!(out)?;
    match data.headline_prediction_date() {
        Some(date) => writeln!(out, "Current predictions (for {}):", dates::format_date(&date))?,
        None => writeln!(out, "Current predictions: none")?,
    }
    for cell in summary_cells(&data.predictions) {
        let arrow = if cell.rising { "▲" } else { "▼" };
        writeln!(out, "  {:<12} {:>7}  {} {}", cell.index, cell.value, arrow, cell.badge)?;
    }

    writeln!(out)?;
    let trend = series_trend(&data.timeseries, "NDVI_mean");
    writeln!(out, "Temporal: {}", trend_footer("NDVI", &trend))?;

    let rows = coverage_rows(&data.timeseries, range);
    writeln!(out, "Coverage ({}): {} observations", range.label(), rows.len())?;
    if let Some(latest) = rows.last() {
        for meta in COVERAGE_SERIES.iter() {
            let value = latest.value(meta.key).unwrap_or(0.0);
            writeln!(out, "  {:<18} {:.4} km² on {}", meta.label, value, latest.date)?;
        }
    }

    match splice_prediction(&data.timeseries, &data.predictions, &PREDICTION_SERIES) {
        Some(spliced) => {
            writeln!(
                out,
                "Prediction: {} ({} history points + forecast {})",
                predicted_trend_footer(&Trend::from_slope(spliced.trend_slope)),
                spliced.history_len(),
                spliced.prediction_label
            )?;
        }
        None => writeln!(out, "Prediction: no forecast available")?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "parameters": {"date_start": "2024-01-01", "date_end": "2024-02-01"},
        "aoi": {"type": "Feature", "geometry": {"type": "Polygon", "coordinates": [[[10.0, 44.0], [10.2, 44.4], [10.0, 44.4]]]}, "properties": {"name": "Campo"}},
        "timeseries": [
            {"date": "2024-01-01", "NDVI_mean": 0.40, "NDRE_mean": 0.2, "area_NDVI_0_4": 0.5},
            {"date": "2024-02-01", "NDVI_mean": 0.50, "NDRE_mean": 0.22, "area_NDVI_0_4": 0.75}
        ],
        "tile_url": "",
        "predictions": {"NDVI": {"predicted_on": "2024-02-11", "value": 0.55, "trend_slope": 0.1}},
        "alerts": [{"date": "2024-03-01", "msg": "Low NDVI", "value": 0.1234}]
    }"#;

    #[test]
    fn summary_contains_every_panel() {
        let data = DashboardData::from_json_str(SNAPSHOT).unwrap();
        let mut buf = Vec::new();
        write_summary(&data, TimeRange::All, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Monitoring area from 2024-01-01 to 2024-02-01"));
        assert!(text.contains("  2024-03-01: Low NDVI (Value: 0.1234)"));
        assert!(text.contains("Center: 44.2000, 10.1000"));
        assert!(text.contains("Area: 3 coordinates"));
        assert!(text.contains("Current predictions (for 2024-02-11):"));
        assert!(text.contains("0.550"));
        assert!(text.contains("10.00%"));
        assert!(text.contains("Temporal: NDVI trending up by 25.0%"));
        assert!(text.contains("Coverage (All time): 2 observations"));
        assert!(text.contains("Prediction: Predicted trend up by 10.0% (2 history points + forecast Feb 24)"));
    }

    #[test]
    fn summary_windowed_coverage() {
        let data = DashboardData::from_json_str(SNAPSHOT).unwrap();
        let mut buf = Vec::new();
        write_summary(&data, TimeRange::OneMonth, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Coverage (Last month): 1 observations"));
        assert!(text.contains("0.7500 km² on 2024-02-01"));
    }
}
