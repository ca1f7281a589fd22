//! The monitored polygon.
//!
//! Stored as the GeoJSON Feature the pipeline copies from the field boundary
//! file. Only the outer ring is read, and only to derive a bounding box; no
//! projection or tile math happens in this workspace.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaOfInterest {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: AoiProperties,
}

fn feature_type() -> String {
    "Feature".to_string()
}

/// Polygon geometry: rings of `[lng, lat(, alt)]` positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<Vec<Vec<f64>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AoiProperties {
    #[serde(default)]
    pub name: String,
}

/// Axis-aligned bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Midpoint as `(lat, lng)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

impl AreaOfInterest {
    pub fn polygon(name: &str, ring: Vec<[f64; 2]>) -> Self {
        Self {
            kind: feature_type(),
            geometry: Geometry {
                kind: "Polygon".to_string(),
                coordinates: vec![ring.into_iter().map(|p| p.to_vec()).collect()],
            },
            properties: AoiProperties {
                name: name.to_string(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.properties.name
    }

    /// Outer ring positions; empty when the geometry has no rings.
    pub fn outer_ring(&self) -> &[Vec<f64>] {
        self.geometry
            .coordinates
            .first()
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn coordinate_count(&self) -> usize {
        self.outer_ring().len()
    }

    /// Bounding box of the outer ring. Positions with fewer than two
    /// ordinates are skipped; `None` when nothing usable remains.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut positions = self.outer_ring().iter().filter(|p| p.len() >= 2);
        let first = positions.next()?;
        let mut bounds = Bounds {
            min_lat: first[1],
            max_lat: first[1],
            min_lng: first[0],
            max_lng: first[0],
        };
        for p in positions {
            let (lng, lat) = (p[0], p[1]);
            bounds.min_lat = bounds.min_lat.min(lat);
            bounds.max_lat = bounds.max_lat.max(lat);
            bounds.min_lng = bounds.min_lng.min(lng);
            bounds.max_lng = bounds.max_lng.max(lng);
        }
        Some(bounds)
    }

    pub fn center(&self) -> Option<(f64, f64)> {
        self.bounds().map(|b| b.center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_square() {
        let aoi = AreaOfInterest::polygon(
            "Campo",
            vec![[10.0, 44.0], [10.2, 44.0], [10.2, 44.4], [10.0, 44.4], [10.0, 44.0]],
        );
        let (lat, lng) = aoi.center().unwrap();
        assert!((lat - 44.2).abs() < 1e-9);
        assert!((lng - 10.1).abs() < 1e-9);
        assert_eq!(aoi.coordinate_count(), 5);
    }

    #[test]
    fn empty_ring_has_no_bounds() {
        let aoi = AreaOfInterest::polygon("Empty", vec![]);
        assert_eq!(aoi.bounds(), None);
        assert_eq!(aoi.coordinate_count(), 0);
    }

    #[test]
    fn parses_geojson_feature() {
        let json = r#"{
            "type": "Feature",
            "id": "0",
            "geometry": {"type": "Polygon", "coordinates": [[[9.1, 45.0, 0.0], [9.3, 45.2, 0.0], [9.1, 45.2, 0.0]]]},
            "properties": {"name": "Campo Bruzo", "area_ha": 12.5}
        }"#;
        let aoi: AreaOfInterest = serde_json::from_str(json).unwrap();
        assert_eq!(aoi.name(), "Campo Bruzo");
        let b = aoi.bounds().unwrap();
        assert_eq!(b.min_lng, 9.1);
        assert_eq!(b.max_lat, 45.2);
    }
}
