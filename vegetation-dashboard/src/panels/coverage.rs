//! Stacked area above each index threshold, with a time-window selector.

use dioxus::prelude::*;
use satdash_chart_ui::components::{Card, ChartContainer, TimeRangeSelector};
use satdash_chart_ui::js_bridge;
use satdash_chart_ui::state::AppState;
use satdash_data::rows::{coverage_rows, series_config};
use satdash_data::TimeRange;
use satdash_model::indices::COVERAGE_SERIES;

/// DOM id for the D3 chart container div.
const CHART_ID: &str = "coverage-chart";

#[component]
pub fn CoveragePanel() -> Element {
    let state = use_context::<AppState>();
    // Window selection is local to this card.
    let mut range = use_signal(TimeRange::default);

    // Re-runs whenever the snapshot or the selected window changes.
    use_effect(move || {
        let selected = range();
        let rows = match &*state.data.read() {
            Some(data) => coverage_rows(&data.timeseries, selected),
            None => return,
        };
        log::info!("coverage: {} rows for window {}", rows.len(), selected);
        let data_json = serde_json::to_string(&rows).unwrap_or_default();
        let config_json = serde_json::json!({
            "series": series_config(&COVERAGE_SERIES),
            "height": 350,
        })
        .to_string();
        js_bridge::render_stacked_area_chart(CHART_ID, &data_json, &config_json);
    });

    rsx! {
        Card {
            title: "Vegetation Index Coverage".to_string(),
            description: "Area coverage by vegetation health indices over time".to_string(),
            action: rsx! {
                TimeRangeSelector {
                    value: range(),
                    on_change: move |selected| range.set(selected),
                }
            },
            ChartContainer { id: CHART_ID.to_string(), min_height: 350 }
        }
    }
}
