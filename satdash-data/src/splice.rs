//! Appends the forecast point to a historical series.
//!
//! The prediction chart draws history and forecast as one continuous line,
//! so the forecast becomes one extra row whose label is the forecast date in
//! the same `Mon YY` form as the history. The chart highlights any row whose
//! label equals [`PredictionSeries::prediction_label`].

use crate::rows::{chart_rows, ChartRow};
use chrono::NaiveDate;
use satdash_model::indices::SeriesMeta;
use satdash_model::{Predictions, TimeseriesPoint};
use satdash_utils::dates;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionSeries {
    /// History rows followed by the forecast row.
    pub rows: Vec<ChartRow>,
    /// Index whose forecast date labels the synthetic row.
    pub index: String,
    pub predicted_on: NaiveDate,
    pub prediction_label: String,
    /// Slope of the headline forecast.
    pub trend_slope: f64,
}

impl PredictionSeries {
    pub fn is_highlighted(&self, row: &ChartRow) -> bool {
        row.label == self.prediction_label
    }

    pub fn forecast_row(&self) -> Option<&ChartRow> {
        self.rows.last()
    }

    /// Number of history rows before the forecast.
    pub fn history_len(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }
}

/// History projected onto `series` plus one forecast row.
///
/// Returns `None` when there are no predictions at all. A tracked index
/// without a forecast gets a `null` in the forecast row.
pub fn splice_prediction(
    history: &[TimeseriesPoint],
    predictions: &Predictions,
    series: &[SeriesMeta],
) -> Option<PredictionSeries> {
    let (index, headline) = predictions.headline(series.iter().map(|meta| meta.key))?;
    let prediction_label = dates::month_label(&headline.predicted_on);

    let mut rows = chart_rows(history, series, |p| dates::month_label(&p.date));
    rows.push(ChartRow {
        label: prediction_label.clone(),
        date: dates::format_date(&headline.predicted_on),
        values: series
            .iter()
            .map(|meta| (meta.key.to_string(), predictions.get(meta.key).map(|p| p.value)))
            .collect(),
    });

    Some(PredictionSeries {
        rows,
        index: index.to_string(),
        predicted_on: headline.predicted_on,
        prediction_label,
        trend_slope: headline.trend_slope,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use satdash_model::indices::PREDICTION_SERIES;
    use satdash_model::{DashboardData, Prediction};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn history() -> Vec<TimeseriesPoint> {
        vec![
            TimeseriesPoint::new(day(2024, 1, 1))
                .with("NDVI_mean", 0.40)
                .with("NDRE_mean", 0.20),
            TimeseriesPoint::new(day(2024, 2, 1))
                .with("NDVI_mean", 0.50)
                .with("NDRE_mean", 0.22),
        ]
    }

    fn forecast(date: NaiveDate, value: f64, trend_slope: f64) -> Prediction {
        Prediction {
            predicted_on: date,
            value,
            trend_slope,
        }
    }

    #[test]
    fn appends_exactly_one_labelled_row() {
        let predictions: Predictions = [
            ("NDVI", forecast(day(2024, 3, 11), 0.55, 0.1)),
            ("NDRE", forecast(day(2024, 3, 11), 0.23, 0.01)),
        ]
        .into_iter()
        .collect();
        let spliced = splice_prediction(&history(), &predictions, &PREDICTION_SERIES).unwrap();

        assert_eq!(spliced.rows.len(), history().len() + 1);
        assert_eq!(spliced.history_len(), 2);
        assert_eq!(spliced.prediction_label, "Mar 24");
        let last = spliced.forecast_row().unwrap();
        assert_eq!(last.label, spliced.prediction_label);
        assert_eq!(last.value("NDVI"), Some(0.55));
        assert_eq!(last.value("NDRE"), Some(0.23));
        assert!(spliced.is_highlighted(last));
        assert!(!spliced.is_highlighted(&spliced.rows[0]));
        assert_eq!(spliced.index, "NDVI");
        assert_eq!(spliced.trend_slope, 0.1);
    }

    #[test]
    fn missing_tracked_forecast_is_null() {
        let predictions: Predictions = [("NDRE", forecast(day(2024, 4, 2), 0.25, -0.02))].into_iter().collect();
        let spliced = splice_prediction(&history(), &predictions, &PREDICTION_SERIES).unwrap();
        let last = spliced.forecast_row().unwrap();
        assert_eq!(last.value("NDVI"), None);
        assert_eq!(last.value("NDRE"), Some(0.25));
        assert_eq!(spliced.index, "NDRE");
        assert_eq!(spliced.prediction_label, "Apr 24");
    }

    #[test]
    fn untracked_forecast_still_dates_the_row() {
        let predictions: Predictions = [("SAVI", forecast(day(2024, 5, 20), 0.3, 0.0))].into_iter().collect();
        let spliced = splice_prediction(&history(), &predictions, &PREDICTION_SERIES).unwrap();
        assert_eq!(spliced.index, "SAVI");
        assert_eq!(spliced.forecast_row().unwrap().value("NDVI"), None);
        assert_eq!(spliced.rows.len(), 3);
    }

    #[test]
    fn no_predictions_no_splice() {
        assert!(splice_prediction(&history(), &Predictions::default(), &PREDICTION_SERIES).is_none());
    }

    #[test]
    fn history_rows_sharing_the_label_are_highlighted_too() {
        let predictions: Predictions = [("NDVI", forecast(day(2024, 2, 11), 0.55, 0.1))].into_iter().collect();
        let spliced = splice_prediction(&history(), &predictions, &PREDICTION_SERIES).unwrap();
        let highlighted = spliced.rows.iter().filter(|r| spliced.is_highlighted(r)).count();
        assert_eq!(highlighted, 2);
    }

    #[test]
    fn chart_and_header_agree_on_the_forecast_date() {
        let data = DashboardData::from_json_str(
            r#"{
                "parameters": {"date_start": "2024-01-01", "date_end": "2024-02-01"},
                "aoi": {"geometry": {"type": "Polygon", "coordinates": [[[10.0, 44.0]]]}, "properties": {"name": "Campo"}},
                "timeseries": [{"date": "2024-01-01", "NDVI_mean": 0.4, "NDRE_mean": 0.2}],
                "predictions": {
                    "SAVI": {"predicted_on": "2024-05-01", "value": 0.3, "trend_slope": 0.0},
                    "NDRE": {"predicted_on": "2024-02-11", "value": 0.25, "trend_slope": 0.01}
                }
            }"#,
        )
        .unwrap();
        let spliced = splice_prediction(&data.timeseries, &data.predictions, &PREDICTION_SERIES).unwrap();
        assert_eq!(Some(spliced.predicted_on), data.headline_prediction_date());
        assert_eq!(spliced.index, "NDRE");
    }
}
