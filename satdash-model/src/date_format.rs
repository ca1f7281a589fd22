//! Serde adapter for calendar days.
//!
//! Use as `#[serde(with = "crate::date_format")]`. Serializes as `YYYY-MM-DD`
//! and accepts the timestamp variants handled by
//! [`satdash_utils::dates::parse_date_lenient`].

use chrono::NaiveDate;
use satdash_utils::dates;
use serde::{de, Deserialize, Deserializer, Serializer};

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dates::format_date(date))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    dates::parse_date_lenient(&raw).map_err(de::Error::custom)
}
