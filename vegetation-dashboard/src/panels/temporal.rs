//! Mean vegetation indices over time.

use dioxus::prelude::*;
use satdash_chart_ui::components::{Card, ChartContainer, TrendFooter};
use satdash_chart_ui::js_bridge;
use satdash_chart_ui::state::AppState;
use satdash_data::format::trend_footer;
use satdash_data::rows::{series_config, temporal_rows};
use satdash_data::{series_trend, Trend};
use satdash_model::indices::TEMPORAL_SERIES;

/// DOM id for the D3 chart container div.
const CHART_ID: &str = "temporal-chart";

/// Column the footer trend is computed on.
const TREND_COLUMN: &str = "NDVI_mean";

#[component]
pub fn TemporalPanel() -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        let rows = match &*state.data.read() {
            Some(data) => temporal_rows(&data.timeseries),
            None => return,
        };
        let data_json = serde_json::to_string(&rows).unwrap_or_default();
        let config_json = serde_json::json!({
            "series": series_config(&TEMPORAL_SERIES),
            "height": 300,
        })
        .to_string();
        js_bridge::render_multi_line_chart(CHART_ID, &data_json, &config_json);
    });

    let trend = state
        .data
        .read()
        .as_ref()
        .map(|data| series_trend(&data.timeseries, TREND_COLUMN))
        .unwrap_or_else(|| Trend::from_percent(0.0));

    rsx! {
        Card {
            title: "Vegetation Index Temporal Analysis".to_string(),
            description: "Mean vegetation indices over time".to_string(),
            footer: rsx! {
                TrendFooter {
                    headline: trend_footer("NDVI", &trend),
                    trend,
                    caption: "Showing vegetation health indicators across multiple indices".to_string(),
                }
            },
            ChartContainer { id: CHART_ID.to_string(), min_height: 300 }
        }
    }
}
