//! The `dashboard_data.json` document and its loaders.
//!
//! The upstream pipeline serializes with Python's `json.dump`, which writes
//! missing statistics as bare `NaN` tokens. Those are not JSON, so the loader
//! rewrites them to `null` before handing the text to `serde_json`.

use crate::indices::PREDICTION_SERIES;
use crate::{Alert, AreaOfInterest, Prediction, Predictions, TimeseriesPoint};
use anyhow::Context;
use chrono::NaiveDate;
use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Monitoring period and pipeline settings, display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    #[serde(with = "crate::date_format")]
    pub date_start: NaiveDate,
    #[serde(with = "crate::date_format")]
    pub date_end: NaiveDate,
    /// Maximum cloud cover (%) of scenes the pipeline kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_max_pct: Option<f64>,
    /// Coverage thresholds per index.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub thresholds: BTreeMap<String, Vec<f64>>,
}

/// The whole snapshot handed to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub timeseries: Vec<TimeseriesPoint>,
    pub aoi: AreaOfInterest,
    #[serde(default)]
    pub predictions: Predictions,
    #[serde(default)]
    pub alerts: Vec<Alert>,
    pub parameters: Parameters,
    /// Map tile template of the latest scene. Carried but not rendered.
    #[serde(default)]
    pub tile_url: String,
    /// UTC timestamp the pipeline wrote the snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<String>,
}

const NON_FINITE_TOKENS: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

/// Replace bare `NaN`/`Infinity` tokens outside of string literals with
/// `null`. Borrowed input is returned untouched when there is nothing to do.
pub fn null_non_finite(input: &str) -> Cow<'_, str> {
    if !input.contains("NaN") && !input.contains("Infinity") {
        return Cow::Borrowed(input);
    }

    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut copied_to = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }
        if b == b'"' {
            in_string = true;
            i += 1;
            continue;
        }
        match NON_FINITE_TOKENS
            .iter()
            .find(|token| bytes[i..].starts_with(token.as_bytes()))
        {
            Some(token) => {
                out.push_str(&input[copied_to..i]);
                out.push_str("null");
                i += token.len();
                copied_to = i;
            }
            None => i += 1,
        }
    }
    out.push_str(&input[copied_to..]);
    Cow::Owned(out)
}

impl DashboardData {
    /// Parse a snapshot from JSON text.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let cleaned = null_non_finite(json);
        if let Cow::Owned(_) = cleaned {
            log::debug!("snapshot: replaced non-finite tokens with null");
        }
        let data: DashboardData =
            serde_json::from_str(&cleaned).context("failed to parse dashboard snapshot")?;
        log::info!(
            "snapshot: loaded {} timeseries points, {} predictions, {} alerts",
            data.timeseries.len(),
            data.predictions.len(),
            data.alerts.len()
        );
        Ok(data)
    }

    /// Parse a snapshot from raw bytes, gunzipping when they carry the gzip magic.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        if bytes.starts_with(&[0x1f, 0x8b]) {
            return Self::from_gzip_bytes(bytes);
        }
        let text = std::str::from_utf8(bytes).context("snapshot is not valid UTF-8")?;
        Self::from_json_str(text)
    }

    /// Parse a gzip-compressed snapshot.
    pub fn from_gzip_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let mut text = String::new();
        GzDecoder::new(bytes)
            .read_to_string(&mut text)
            .context("failed to decompress snapshot")?;
        Self::from_json_str(&text)
    }

    /// Read a snapshot file (`.json` or `.json.gz`).
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        Self::from_bytes(&bytes).with_context(|| format!("in {}", path.display()))
    }

    /// Forecast the dashboard is dated by, chosen over the indices the
    /// prediction chart tracks (NDVI, then NDRE), else the first in the file.
    pub fn headline_prediction(&self) -> Option<(&str, &Prediction)> {
        self.predictions
            .headline(PREDICTION_SERIES.iter().map(|meta| meta.key))
    }

    pub fn headline_prediction_date(&self) -> Option<NaiveDate> {
        self.headline_prediction().map(|(_, p)| p.predicted_on)
    }
}
