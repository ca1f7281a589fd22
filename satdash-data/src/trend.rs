use satdash_model::TimeseriesPoint;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

impl TrendDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed percentage change with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    pub percent: f64,
    pub direction: TrendDirection,
}

impl Trend {
    /// Zero counts as up.
    pub fn from_percent(percent: f64) -> Self {
        let direction = if percent >= 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        };
        Self { percent, direction }
    }

    /// Relative change from `previous` to `latest`.
    pub fn between(latest: f64, previous: f64) -> Self {
        Self::from_percent(trend_percentage(latest, previous))
    }

    /// Trend implied by a fitted slope (`slope * 100` percent per period).
    pub fn from_slope(trend_slope: f64) -> Self {
        Self::from_percent(trend_slope * 100.0)
    }

    /// Unsigned magnitude, as the footers print it.
    pub fn magnitude(&self) -> f64 {
        self.percent.abs()
    }
}

/// `(latest - previous) / previous * 100`, or 0 when `previous` is zero.
pub fn trend_percentage(latest: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (latest - previous) / previous * 100.0
}

/// Trend between the last two points of `column`. A missing point or value
/// counts as zero.
pub fn series_trend(points: &[TimeseriesPoint], column: &str) -> Trend {
    let value_at = |from_end: usize| {
        points
            .len()
            .checked_sub(from_end)
            .and_then(|i| points[i].value(column))
            .unwrap_or(0.0)
    };
    Trend::between(value_at(1), value_at(2))
}
