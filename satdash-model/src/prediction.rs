use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A linear-trend forecast for one index, computed upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Target date of the forecast.
    #[serde(with = "crate::date_format")]
    pub predicted_on: NaiveDate,
    /// Forecast index value.
    pub value: f64,
    /// Fitted slope, unitless change per observation.
    pub trend_slope: f64,
}

/// Predictions keyed by index name, in document order.
///
/// The summary grid lists indices in the order the pipeline wrote them, so
/// this keeps insertion order instead of sorting keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predictions(Vec<(String, Prediction)>);

impl Predictions {
    pub fn get(&self, index: &str) -> Option<&Prediction> {
        self.0.iter().find(|(key, _)| key == index).map(|(_, p)| p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Prediction)> {
        self.0.iter().map(|(key, p)| (key.as_str(), p))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    pub fn first(&self) -> Option<(&str, &Prediction)> {
        self.0.first().map(|(key, p)| (key.as_str(), p))
    }

    /// The forecast a view is dated by: the first of `tracked` that has one,
    /// else the first forecast in the document.
    pub fn headline<'a>(&self, tracked: impl IntoIterator<Item = &'a str>) -> Option<(&str, &Prediction)> {
        tracked
            .into_iter()
            .find_map(|index| self.0.iter().find(|(key, _)| key == index))
            .map(|(key, p)| (key.as_str(), p))
            .or_else(|| self.first())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert or replace, keeping the original position on replace.
    pub fn insert(&mut self, index: impl Into<String>, prediction: Prediction) {
        let index = index.into();
        match self.0.iter_mut().find(|(key, _)| *key == index) {
            Some(slot) => slot.1 = prediction,
            None => self.0.push((index, prediction)),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Prediction)> for Predictions {
    fn from_iter<I: IntoIterator<Item = (K, Prediction)>>(iter: I) -> Self {
        let mut predictions = Predictions::default();
        for (key, prediction) in iter {
            predictions.insert(key, prediction);
        }
        predictions
    }
}

impl Serialize for Predictions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

impl<'de> Deserialize<'de> for Predictions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PredictionsVisitor;

        impl<'de> Visitor<'de> for PredictionsVisitor {
            type Value = Predictions;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of index name to prediction")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut predictions = Predictions::default();
                while let Some((key, value)) = map.next_entry::<String, Prediction>()? {
                    predictions.insert(key, value);
                }
                Ok(predictions)
            }
        }

        deserializer.deserialize_map(PredictionsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forecast(day: u32) -> Prediction {
        Prediction {
            predicted_on: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            value: 0.4,
            trend_slope: 0.0,
        }
    }

    #[test]
    fn headline_prefers_tracked_order_then_document_order() {
        let predictions: Predictions = [("SAVI", forecast(1)), ("NDRE", forecast(2)), ("NDVI", forecast(3))]
            .into_iter()
            .collect();
        assert_eq!(predictions.headline(["NDVI", "NDRE"]).map(|(k, _)| k), Some("NDVI"));
        assert_eq!(predictions.headline(["GNDVI", "NDRE"]).map(|(k, _)| k), Some("NDRE"));
        assert_eq!(predictions.headline(["GNDVI"]).map(|(k, _)| k), Some("SAVI"));
        assert!(Predictions::default().headline(["NDVI"]).is_none());
    }

    #[test]
    fn keeps_document_order() {
        let json = r#"{
            "SAVI": {"predicted_on": "2024-06-11", "value": 0.31, "trend_slope": -0.002},
            "NDVI": {"predicted_on": "2024-06-11", "value": 0.52, "trend_slope": 0.004},
            "CCCI": {"predicted_on": "2024-06-11", "value": 0.28, "trend_slope": 0.0}
        }"#;
        let predictions: Predictions = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = predictions.keys().collect();
        assert_eq!(keys, vec!["SAVI", "NDVI", "CCCI"]);
        assert_eq!(predictions.get("NDVI").unwrap().value, 0.52);
        assert!(predictions.get("NDRE").is_none());
    }

    #[test]
    fn insert_replaces_in_place() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
        let p = |value| Prediction {
            predicted_on: date,
            value,
            trend_slope: 0.0,
        };
        let mut predictions: Predictions = [("NDVI", p(0.1)), ("NDRE", p(0.2))].into_iter().collect();
        predictions.insert("NDVI", p(0.3));
        assert_eq!(predictions.len(), 2);
        assert_eq!(predictions.first().unwrap(), ("NDVI", &p(0.3)));
    }
}
