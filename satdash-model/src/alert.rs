use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A threshold breach reported by the pipeline. Only displayed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(with = "crate::date_format")]
    pub date: NaiveDate,
    pub msg: String,
    /// Index value that triggered the rule.
    pub value: f64,
    /// Index name, when the pipeline recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    /// Rule kind, e.g. `"low"`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
