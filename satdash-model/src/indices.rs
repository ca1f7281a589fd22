//! Display metadata for every charted series.
//!
//! Each chart draws a fixed set of columns; the label and color for each one
//! is enumerated here rather than derived from whatever keys the snapshot
//! happens to carry.

use serde::Serialize;

/// Label and color for one charted column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesMeta {
    /// Short series key used in chart rows (e.g. `"NDVI"`).
    pub key: &'static str,
    /// Timeseries column the values come from (e.g. `"NDVI_mean"`).
    pub field: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

const CHART_1: &str = "#e76e50";
const CHART_2: &str = "#2a9d90";
const CHART_3: &str = "#274754";
const CHART_4: &str = "#e8c468";
const CHART_5: &str = "#f4a462";

/// Mean index values on the temporal chart.
pub const TEMPORAL_SERIES: [SeriesMeta; 5] = [
    SeriesMeta { key: "NDVI", field: "NDVI_mean", label: "NDVI", color: CHART_1 },
    SeriesMeta { key: "NDRE", field: "NDRE_mean", label: "NDRE", color: CHART_2 },
    SeriesMeta { key: "GNDVI", field: "GNDVI_mean", label: "GNDVI", color: CHART_3 },
    SeriesMeta { key: "NDWI", field: "NDWI_mean", label: "NDWI", color: CHART_4 },
    SeriesMeta { key: "SAVI", field: "SAVI_mean", label: "SAVI", color: CHART_5 },
];

/// Area above threshold (km²) on the stacked coverage chart.
pub const COVERAGE_SERIES: [SeriesMeta; 5] = [
    SeriesMeta { key: "area_NDVI_0_4", field: "area_NDVI_0_4", label: "NDVI > 0.4", color: CHART_1 },
    SeriesMeta { key: "area_NDVI_0_6", field: "area_NDVI_0_6", label: "NDVI > 0.6", color: CHART_2 },
    SeriesMeta { key: "area_SAVI_0_3", field: "area_SAVI_0_3", label: "SAVI > 0.3", color: CHART_3 },
    SeriesMeta { key: "area_ND_800_680_0_3", field: "area_ND_800_680_0_3", label: "ND 800/680 > 0.3", color: CHART_4 },
    SeriesMeta { key: "area_CCCI_0_3", field: "area_CCCI_0_3", label: "CCCI > 0.3", color: CHART_5 },
];

/// Indices drawn with their forecast on the prediction chart.
pub const PREDICTION_SERIES: [SeriesMeta; 2] = [
    SeriesMeta { key: "NDVI", field: "NDVI_mean", label: "NDVI", color: CHART_1 },
    SeriesMeta { key: "NDRE", field: "NDRE_mean", label: "NDRE", color: CHART_2 },
];

/// Column holding the mean of an index, e.g. `NDVI` -> `NDVI_mean`.
pub fn mean_field(index: &str) -> String {
    format!("{index}_mean")
}

/// Find display metadata for a column across all charts.
pub fn lookup(field: &str) -> Option<&'static SeriesMeta> {
    TEMPORAL_SERIES
        .iter()
        .chain(COVERAGE_SERIES.iter())
        .find(|meta| meta.field == field)
}
