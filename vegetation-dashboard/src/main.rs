//! Satellite vegetation index dashboard.
//!
//! Renders the snapshot written by the imagery pipeline: monitoring period,
//! threshold alerts, an area-of-interest placeholder, the current forecasts
//! and three D3.js charts.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/dashboard_data.json` into `OUT_DIR`.
//! 2. `include_str!` embeds the snapshot into the WASM binary.
//! 3. On mount: parse and validate the snapshot into `AppState`.
//! 4. Each chart panel shapes its rows and renders via the D3 bridge; the
//!    coverage panel re-renders when its time window changes.

mod panels;

use dioxus::prelude::*;
use panels::{CoveragePanel, PredictionPanel, TemporalPanel};
use satdash_chart_ui::components::{
    AlertBanners, AoiMap, Card, ErrorDisplay, LoadingSpinner, PredictionSummary,
};
use satdash_chart_ui::js_bridge;
use satdash_chart_ui::state::AppState;
use satdash_data::format::monitoring_period;
use satdash_model::DashboardData;

// Embed the pipeline snapshot at compile time.
const DASHBOARD_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/dashboard_data.json"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Parse the embedded snapshot once on mount ───
    use_effect(move || match DashboardData::from_json_str(DASHBOARD_JSON) {
        Ok(data) => {
            for issue in data.validate() {
                log::warn!("snapshot: {}", issue);
            }
            js_bridge::init_charts();
            state.finish_loading(data);
        }
        Err(e) => {
            log::error!("Failed to load dashboard data: {:#}", e);
            state.fail_loading(format!("Failed to load dashboard data: {:#}", e));
        }
    });

    let data = state.data.read().clone();

    rsx! {
        div {
            style: "min-height: 100vh; padding: 24px; font-family: system-ui, -apple-system, sans-serif; color: #0f172a;",
            div {
                style: "max-width: 1280px; margin: 0 auto; display: grid; gap: 24px;",

                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                }

                if *state.loading.read() {
                    LoadingSpinner {}
                } else if let Some(data) = data {
                    Header { data: data.clone() }

                    AlertBanners { alerts: data.alerts.clone() }

                    div {
                        style: "display: grid; gap: 24px; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); align-items: start;",

                        // Map
                        div {
                            Card {
                                title: "Area of Interest".to_string(),
                                description: "Satellite view of monitored region".to_string(),
                                AoiMap { aoi: data.aoi.clone(), tile_url: data.tile_url.clone() }
                            }
                        }

                        // Forecasts and charts
                        div {
                            style: "grid-column: span 2; display: grid; gap: 24px; min-width: 0;",
                            Card {
                                title: "Current Predictions".to_string(),
                                description: forecast_description(&data),
                                PredictionSummary { predictions: data.predictions.clone() }
                            }
                            TemporalPanel {}
                            CoveragePanel {}
                            PredictionPanel {}
                        }
                    }
                }
            }
        }
    }
}

fn forecast_description(data: &DashboardData) -> String {
    match data.headline_prediction_date() {
        Some(date) => format!("Forecasted values for {}", date.format("%Y-%m-%d")),
        None => "No forecast in this snapshot".to_string(),
    }
}

#[derive(Props, Clone, PartialEq)]
struct HeaderProps {
    data: DashboardData,
}

/// Title, monitoring period and pipeline settings.
#[component]
fn Header(props: HeaderProps) -> Element {
    let period = monitoring_period(&props.data.parameters);
    let generated = props.data.generated.clone();
    let cloud = props.data.parameters.cloud_max_pct;

    rsx! {
        div {
            style: "display: grid; gap: 8px;",
            h1 {
                style: "margin: 0; font-size: 30px; font-weight: 700; letter-spacing: -0.02em;",
                "Satellite Data Dashboard"
            }
            p { style: "margin: 0; color: #64748b;", "{period}" }
            if let Some(generated) = generated {
                p { style: "margin: 0; font-size: 12px; color: #94a3b8;", "Snapshot generated {generated}" }
            }
            if let Some(cloud) = cloud {
                p { style: "margin: 0; font-size: 12px; color: #94a3b8;", "Scenes with at most {cloud}% cloud cover" }
            }
        }
    }
}
