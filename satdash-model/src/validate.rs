//! Invariant checks for a loaded snapshot.
//!
//! The dashboard trusts the pipeline, so nothing here is fatal: the app logs
//! issues as warnings and the CLI `validate` command turns them into an exit
//! status.

use crate::indices::mean_field;
use crate::DashboardData;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    EmptyTimeseries,
    /// Dates are not in ascending order at this position.
    UnsortedTimeseries { position: usize },
    /// A prediction index with no `<index>_mean` column in the timeseries.
    UnknownPredictionIndex(String),
    EmptyPolygon,
    /// A numeric field holding NaN or an infinity.
    NonFinite { field: String },
    /// Monitoring period ends before it starts.
    InvertedPeriod,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyTimeseries => write!(f, "timeseries is empty"),
            ValidationIssue::UnsortedTimeseries { position } => {
                write!(f, "timeseries out of date order at position {}", position)
            }
            ValidationIssue::UnknownPredictionIndex(index) => write!(
                f,
                "prediction for {} has no {} column in the timeseries",
                index,
                mean_field(index)
            ),
            ValidationIssue::EmptyPolygon => write!(f, "area of interest polygon has no coordinates"),
            ValidationIssue::NonFinite { field } => write!(f, "{} is not a finite number", field),
            ValidationIssue::InvertedPeriod => write!(f, "date_end is before date_start"),
        }
    }
}

impl DashboardData {
    /// Check the snapshot invariants, returning every violation found.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.timeseries.is_empty() {
            issues.push(ValidationIssue::EmptyTimeseries);
        }
        if let Some(position) = self
            .timeseries
            .windows(2)
            .position(|pair| pair[1].date < pair[0].date)
        {
            issues.push(ValidationIssue::UnsortedTimeseries { position: position + 1 });
        }
        if self.parameters.date_end < self.parameters.date_start {
            issues.push(ValidationIssue::InvertedPeriod);
        }

        for index in self.predictions.keys() {
            let field = mean_field(index);
            if !self.timeseries.iter().any(|p| p.has_column(&field)) {
                issues.push(ValidationIssue::UnknownPredictionIndex(index.to_string()));
            }
        }

        if self.aoi.coordinate_count() == 0 {
            issues.push(ValidationIssue::EmptyPolygon);
        }

        let mut non_finite = |field: String, value: f64| {
            if !value.is_finite() {
                issues.push(ValidationIssue::NonFinite { field });
            }
        };
        for point in &self.timeseries {
            for (column, value) in &point.values {
                if let Some(value) = value {
                    non_finite(format!("timeseries[{}].{}", point.date, column), *value);
                }
            }
        }
        for (index, prediction) in self.predictions.iter() {
            non_finite(format!("predictions.{}.value", index), prediction.value);
            non_finite(format!("predictions.{}.trend_slope", index), prediction.trend_slope);
        }
        for (i, alert) in self.alerts.iter().enumerate() {
            non_finite(format!("alerts[{}].value", i), alert.value);
        }
        for (i, position) in self.aoi.outer_ring().iter().enumerate() {
            for ordinate in position {
                non_finite(format!("aoi.coordinates[{}]", i), *ordinate);
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::tests::SAMPLE;
    use crate::{AreaOfInterest, Prediction};
    use chrono::NaiveDate;

    fn sample() -> DashboardData {
        DashboardData::from_json_str(SAMPLE).unwrap()
    }

    #[test]
    fn sample_is_valid() {
        assert_eq!(sample().validate(), vec![]);
    }

    #[test]
    fn reports_unknown_prediction_index() {
        let mut data = sample();
        data.predictions.insert(
            "CCCI",
            Prediction {
                predicted_on: NaiveDate::from_ymd_opt(2024, 2, 11).unwrap(),
                value: 0.3,
                trend_slope: 0.0,
            },
        );
        assert_eq!(
            data.validate(),
            vec![ValidationIssue::UnknownPredictionIndex("CCCI".to_string())]
        );
    }

    #[test]
    fn reports_empty_polygon_and_non_finite() {
        let mut data = sample();
        data.aoi = AreaOfInterest::polygon("Nowhere", vec![]);
        data.alerts[0].value = f64::NAN;
        let issues = data.validate();
        assert!(issues.contains(&ValidationIssue::EmptyPolygon));
        assert!(issues.contains(&ValidationIssue::NonFinite {
            field: "alerts[0].value".to_string()
        }));
    }

    #[test]
    fn reports_unsorted_and_empty() {
        let mut data = sample();
        data.timeseries.reverse();
        assert_eq!(
            data.validate(),
            vec![ValidationIssue::UnsortedTimeseries { position: 1 }]
        );
        data.timeseries.clear();
        let issues = data.validate();
        assert!(issues.contains(&ValidationIssue::EmptyTimeseries));
        assert!(issues.contains(&ValidationIssue::UnknownPredictionIndex("NDVI".to_string())));
    }

    #[test]
    fn display_messages() {
        let issue = ValidationIssue::UnknownPredictionIndex("SAVI".to_string());
        assert_eq!(issue.to_string(), "prediction for SAVI has no SAVI_mean column in the timeseries");
    }
}
