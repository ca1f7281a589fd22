//! Snapshot invariant checks.

use log::{info, warn};
use satdash_model::DashboardData;
use std::path::Path;

/// Load a snapshot, report every issue, and fail if there were any.
pub fn run_validate(path: &Path) -> anyhow::Result<()> {
    let data = DashboardData::from_path(path)?;
    check(&data)?;
    println!(
        "{}: ok ({} observations, {} predictions, {} alerts)",
        path.display(),
        data.timeseries.len(),
        data.predictions.len(),
        data.alerts.len()
    );
    Ok(())
}

fn check(data: &DashboardData) -> anyhow::Result<()> {
    let issues = data.validate();
    if issues.is_empty() {
        info!("snapshot passed validation");
        return Ok(());
    }
    for issue in &issues {
        warn!("{}", issue);
        eprintln!("  {}", issue);
    }
    anyhow::bail!("{} validation issue(s) found", issues.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(timeseries: &str) -> DashboardData {
        let json = format!(
            r#"{{
                "parameters": {{"date_start": "2024-01-01", "date_end": "2024-03-01"}},
                "aoi": {{"geometry": {{"type": "Polygon", "coordinates": [[[10.0, 44.0], [10.1, 44.1], [10.0, 44.1]]]}}, "properties": {{"name": "Campo"}}}},
                "timeseries": {timeseries}
            }}"#
        );
        DashboardData::from_json_str(&json).unwrap()
    }

    #[test]
    fn clean_snapshot_passes() {
        let data = snapshot(r#"[{"date": "2024-01-01", "NDVI_mean": 0.4}, {"date": "2024-02-01", "NDVI_mean": 0.5}]"#);
        assert!(check(&data).is_ok());
    }

    #[test]
    fn unsorted_snapshot_fails_with_count() {
        let data = snapshot(r#"[{"date": "2024-02-01", "NDVI_mean": 0.4}, {"date": "2024-01-01", "NDVI_mean": 0.5}]"#);
        let err = check(&data).unwrap_err();
        assert_eq!(err.to_string(), "1 validation issue(s) found");
    }

    #[test]
    fn run_validate_reads_from_disk() {
        let path = std::env::temp_dir().join(format!("satdash-validate-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"parameters": {"date_start": "2024-01-01", "date_end": "2024-03-01"},
                "aoi": {"geometry": {"type": "Polygon", "coordinates": [[[10.0, 44.0], [10.1, 44.1]]]}, "properties": {"name": "Campo"}},
                "timeseries": [{"date": "2024-01-01", "NDVI_mean": 0.4}]}"#,
        )
        .unwrap();
        let result = run_validate(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_ok());
    }
}
