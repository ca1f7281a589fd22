use chrono::{Days, NaiveDate};
use satdash_model::Dated;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relative window ending at the latest date of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "1m")]
    OneMonth,
}

impl TimeRange {
    /// Selector order.
    pub const ALL: [TimeRange; 5] = [
        TimeRange::All,
        TimeRange::OneYear,
        TimeRange::SixMonths,
        TimeRange::ThreeMonths,
        TimeRange::OneMonth,
    ];

    /// Window length, `None` for the whole series.
    pub fn days(self) -> Option<u64> {
        match self {
            TimeRange::All => None,
            TimeRange::OneYear => Some(365),
            TimeRange::SixMonths => Some(180),
            TimeRange::ThreeMonths => Some(90),
            TimeRange::OneMonth => Some(30),
        }
    }

    /// Wire tag, as used by the selector `<option>` values.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::All => "all",
            TimeRange::OneYear => "1y",
            TimeRange::SixMonths => "6m",
            TimeRange::ThreeMonths => "3m",
            TimeRange::OneMonth => "1m",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::All => "All time",
            TimeRange::OneYear => "Last year",
            TimeRange::SixMonths => "Last 6 months",
            TimeRange::ThreeMonths => "Last 3 months",
            TimeRange::OneMonth => "Last month",
        }
    }

    /// Earliest date kept when the series ends on `latest`.
    pub fn cutoff(self, latest: NaiveDate) -> Option<NaiveDate> {
        self.days()
            .map(|days| latest.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimeRangeError(String);

impl fmt::Display for ParseTimeRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown time range {:?}, expected one of all, 1y, 6m, 3m, 1m", self.0)
    }
}

impl std::error::Error for ParseTimeRangeError {}

impl FromStr for TimeRange {
    type Err = ParseTimeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeRange::ALL
            .into_iter()
            .find(|range| range.as_str() == s)
            .ok_or_else(|| ParseTimeRangeError(s.to_string()))
    }
}

/// Keep the points dated on or after `latest - window`.
///
/// `All` returns the input as-is. Otherwise the points are stably sorted by
/// date first, so unordered input is tolerated and equal dates keep their
/// relative order.
pub fn filter_by_range<T: Dated + Clone>(points: &[T], range: TimeRange) -> Vec<T> {
    if range == TimeRange::All {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| p.date());
    let Some(latest) = sorted.last().map(|p| p.date()) else {
        return sorted;
    };
    if let Some(cutoff) = range.cutoff(latest) {
        sorted.retain(|p| p.date() >= cutoff);
    }
    log::debug!(
        "time range {}: kept {} of {} points",
        range,
        sorted.len(),
        points.len()
    );
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use satdash_model::TimeseriesPoint;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn point(date: NaiveDate) -> TimeseriesPoint {
        TimeseriesPoint::new(date).with("NDVI_mean", 0.5)
    }

    /// One point on the 1st and the last day of every month of 2024.
    fn year_series() -> Vec<TimeseriesPoint> {
        let mut points = Vec::new();
        for m in 1..=12 {
            let first = day(2024, m, 1);
            let last = if m == 12 {
                day(2024, 12, 31)
            } else {
                day(2024, m + 1, 1).pred_opt().unwrap()
            };
            points.push(point(first));
            points.push(point(last));
        }
        points
    }

    #[test]
    fn parse_and_display_round_trip_tags() {
        for range in TimeRange::ALL {
            assert_eq!(range.as_str().parse::<TimeRange>().unwrap(), range);
        }
        assert!("2w".parse::<TimeRange>().is_err());
    }

    #[test]
    fn one_month_window_from_december_31() {
        let filtered = filter_by_range(&year_series(), TimeRange::OneMonth);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| p.date >= day(2024, 12, 1)));
    }

    #[test]
    fn windows_keep_only_recent_points() {
        let series = year_series();
        for range in [TimeRange::OneYear, TimeRange::SixMonths, TimeRange::ThreeMonths] {
            let cutoff = range.cutoff(day(2024, 12, 31)).unwrap();
            let filtered = filter_by_range(&series, range);
            assert!(filtered.iter().all(|p| p.date >= cutoff));
            let expected = series.iter().filter(|p| p.date >= cutoff).count();
            assert_eq!(filtered.len(), expected);
        }
    }

    #[test]
    fn all_is_identity() {
        let mut series = year_series();
        series.swap(0, 5);
        assert_eq!(filter_by_range(&series, TimeRange::All), series);
    }

    #[test]
    fn unordered_input_is_sorted() {
        let mut series = year_series();
        series.reverse();
        let filtered = filter_by_range(&series, TimeRange::ThreeMonths);
        assert!(filtered.windows(2).all(|w| w[0].date <= w[1].date));
        assert_eq!(filtered.last().unwrap().date, day(2024, 12, 31));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let empty: Vec<TimeseriesPoint> = Vec::new();
        assert!(filter_by_range(&empty, TimeRange::OneYear).is_empty());
        assert!(filter_by_range(&empty, TimeRange::All).is_empty());
    }

    #[test]
    fn serde_uses_tags() {
        assert_eq!(serde_json::to_string(&TimeRange::SixMonths).unwrap(), "\"6m\"");
        let range: TimeRange = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(range, TimeRange::All);
    }
}
