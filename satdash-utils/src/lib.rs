//! Shared utility functions for satdash crates.

/// Date utility functions
pub mod dates {
    use anyhow::{bail, Context};
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    /// Canonical calendar-day format used in `dashboard_data.json`.
    pub const ISO_FORMAT: &str = "%Y-%m-%d";

    /// Timestamp layouts the upstream pipeline has been seen to emit.
    const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(ISO_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        NaiveDate::parse_from_str(s.trim(), ISO_FORMAT)
            .with_context(|| format!("invalid date {s:?}, expected YYYY-MM-DD"))
    }

    /// Parse a calendar day, accepting the timestamp forms pandas and
    /// `json.dump(default=str)` produce. The time of day is discarded.
    pub fn parse_date_lenient(s: &str) -> anyhow::Result<NaiveDate> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, ISO_FORMAT) {
            return Ok(date);
        }
        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(dt.date());
            }
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.date_naive());
        }
        bail!("unrecognized date {s:?}")
    }

    /// Short month label used on categorical chart axes, e.g. "Jan 24".
    pub fn month_label(date: &NaiveDate) -> String {
        date.format("%b %y").to_string()
    }

    /// Month and day tick label, e.g. "Jan 5".
    pub fn day_label(date: &NaiveDate) -> String {
        date.format("%b %-d").to_string()
    }

    /// Long tooltip label, e.g. "January 5, 2024".
    pub fn long_label(date: &NaiveDate) -> String {
        date.format("%B %-d, %Y").to_string()
    }

}
