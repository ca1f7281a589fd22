//! Text shown on the dashboard panels and in the CLI summary.

use crate::trend::Trend;
use satdash_model::{Alert, AreaOfInterest, Parameters, Predictions};
use satdash_utils::dates;
use serde::Serialize;

/// Extra digits formatted past the kept ones when looking for an exact tie.
const TIE_GUARD_DIGITS: usize = 25;

/// Fixed-point text with `digits` decimals, exact ties rounded away from
/// zero the way the browser's `Number.prototype.toFixed` does. Plain
/// `{:.N}` rounds ties to even (0.5625 -> "0.562").
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    let wide = format!("{:.*}", digits + TIE_GUARD_DIGITS, magnitude);
    let (kept, rest) = wide.split_at(wide.len() - TIE_GUARD_DIGITS);
    let tie = rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0');
    if !tie {
        return format!("{}{:.*}", sign, digits, magnitude);
    }

    let mut out = round_up_decimal(kept);
    if out.ends_with('.') {
        out.pop();
    }
    format!("{}{}", sign, out)
}

/// Add one unit in the last place of a plain decimal string.
fn round_up_decimal(text: &str) -> String {
    let mut bytes = text.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}

/// `"{date}: {msg} (Value: {value:.4})"`
pub fn alert_line(alert: &Alert) -> String {
    format!(
        "{}: {} (Value: {})",
        dates::format_date(&alert.date),
        alert.msg,
        to_fixed(alert.value, 4)
    )
}

pub fn monitoring_period(parameters: &Parameters) -> String {
    format!(
        "Monitoring area from {} to {}",
        dates::format_date(&parameters.date_start),
        dates::format_date(&parameters.date_end)
    )
}

/// Value cell of the predictions grid.
pub fn prediction_value(value: f64) -> String {
    to_fixed(value, 3)
}

/// Badge of the predictions grid: slope as a percentage.
pub fn slope_badge(trend_slope: f64) -> String {
    format!("{}%", to_fixed(trend_slope * 100.0, 2))
}

/// Temporal chart footer, e.g. "NDVI trending up by 25.0%".
pub fn trend_footer(index: &str, trend: &Trend) -> String {
    format!(
        "{} trending {} by {}%",
        index,
        trend.direction,
        to_fixed(trend.magnitude(), 1)
    )
}

/// Prediction chart footer, e.g. "Predicted trend down by 1.2%".
pub fn predicted_trend_footer(trend: &Trend) -> String {
    format!(
        "Predicted trend {} by {}%",
        trend.direction,
        to_fixed(trend.magnitude(), 1)
    )
}

pub fn center_line(center: (f64, f64)) -> String {
    format!("Center: {}, {}", to_fixed(center.0, 4), to_fixed(center.1, 4))
}

pub fn coordinate_count_line(aoi: &AreaOfInterest) -> String {
    format!("Area: {} coordinates", aoi.coordinate_count())
}

/// One cell of the current predictions grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCell {
    pub index: String,
    pub value: String,
    pub badge: String,
    /// Slope strictly above zero; zero shows as a falling badge.
    pub rising: bool,
}

pub fn summary_cells(predictions: &Predictions) -> Vec<SummaryCell> {
    predictions
        .iter()
        .map(|(index, p)| SummaryCell {
            index: index.to_string(),
            value: prediction_value(p.value),
            badge: slope_badge(p.trend_slope),
            rising: p.trend_slope > 0.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use satdash_model::Prediction;

    #[test]
    fn alert_line_four_decimals() {
        let alert = Alert {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            msg: "Low NDVI".to_string(),
            value: 0.1234,
            index: None,
            kind: None,
        };
        assert_eq!(alert_line(&alert), "2024-03-01: Low NDVI (Value: 0.1234)");
    }

    #[test]
    fn to_fixed_rounds_exact_ties_up() {
        assert_eq!(to_fixed(0.5625, 3), "0.563");
        assert_eq!(to_fixed(0.03125, 4), "0.0313");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(9.95, 1), "9.9");
        assert_eq!(to_fixed(99.5, 0), "100");
        assert_eq!(to_fixed(-0.5625, 3), "-0.563");
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.1234, 4), "0.1234");
    }

    #[test]
    fn tie_values_in_panel_text() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
        let predictions: Predictions = [("NDVI", Prediction { predicted_on: date, value: 0.5625, trend_slope: 0.0 })]
            .into_iter()
            .collect();
        assert_eq!(summary_cells(&predictions)[0].value, "0.563");

        let alert = Alert {
            date,
            msg: "Low NDWI".to_string(),
            value: 0.03125,
            index: None,
            kind: None,
        };
        assert_eq!(alert_line(&alert), "2024-06-11: Low NDWI (Value: 0.0313)");
        assert_eq!(trend_footer("NDVI", &Trend::from_percent(12.25)), "NDVI trending up by 12.3%");
    }

    #[test]
    fn footers() {
        assert_eq!(trend_footer("NDVI", &Trend::between(0.5, 0.4)), "NDVI trending up by 25.0%");
        assert_eq!(trend_footer("NDVI", &Trend::between(0.3, 0.4)), "NDVI trending down by 25.0%");
        assert_eq!(predicted_trend_footer(&Trend::from_slope(-0.0123)), "Predicted trend down by 1.2%");
    }

    #[test]
    fn summary_cells_in_document_order() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
        let predictions: Predictions = [
            ("NDVI", Prediction { predicted_on: date, value: 0.51234, trend_slope: 0.00456 }),
            ("NDRE", Prediction { predicted_on: date, value: 0.2, trend_slope: 0.0 }),
        ]
        .into_iter()
        .collect();
        let cells = summary_cells(&predictions);
        assert_eq!(cells[0].index, "NDVI");
        assert_eq!(cells[0].value, "0.512");
        assert_eq!(cells[0].badge, "0.46%");
        assert!(cells[0].rising);
        assert_eq!(cells[1].badge, "0.00%");
        assert!(!cells[1].rising);
    }

    #[test]
    fn map_lines() {
        let aoi = AreaOfInterest::polygon("Campo", vec![[10.0, 44.0], [10.2, 44.4], [10.0, 44.4]]);
        assert_eq!(center_line(aoi.center().unwrap()), "Center: 44.2000, 10.1000");
        assert_eq!(coordinate_count_line(&aoi), "Area: 3 coordinates");
    }
}
