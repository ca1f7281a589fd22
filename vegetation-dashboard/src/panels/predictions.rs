//! History with the forecast point spliced on.

use dioxus::prelude::*;
use satdash_chart_ui::components::{Card, ChartContainer, TrendFooter};
use satdash_chart_ui::js_bridge;
use satdash_chart_ui::state::AppState;
use satdash_data::format::predicted_trend_footer;
use satdash_data::rows::series_config;
use satdash_data::{splice_prediction, PredictionSeries, Trend};
use satdash_model::indices::PREDICTION_SERIES;

/// DOM id for the D3 chart container div.
const CHART_ID: &str = "prediction-chart";

#[component]
pub fn PredictionPanel() -> Element {
    let state = use_context::<AppState>();

    let spliced: Option<PredictionSeries> = state
        .data
        .read()
        .as_ref()
        .and_then(|data| splice_prediction(&data.timeseries, &data.predictions, &PREDICTION_SERIES));

    use_effect(move || {
        let spliced = state
            .data
            .read()
            .as_ref()
            .and_then(|data| splice_prediction(&data.timeseries, &data.predictions, &PREDICTION_SERIES));
        let Some(spliced) = spliced else {
            js_bridge::destroy_chart(CHART_ID);
            return;
        };
        let data_json = serde_json::to_string(&spliced.rows).unwrap_or_default();
        let config_json = serde_json::json!({
            "series": series_config(&PREDICTION_SERIES),
            "predictionLabel": spliced.prediction_label,
            "height": 300,
        })
        .to_string();
        js_bridge::render_prediction_chart(CHART_ID, &data_json, &config_json);
    });

    let Some(spliced) = spliced else {
        return rsx! {
            Card {
                title: "Trend Analysis & Predictions".to_string(),
                description: "Historical data with forecasted values".to_string(),
                p { style: "margin: 0; color: #64748b; font-size: 13px;", "No predictions available." }
            }
        };
    };

    let trend = Trend::from_slope(spliced.trend_slope);
    let caption = format!(
        "Dashed line indicates prediction date: {}",
        spliced.predicted_on.format("%Y-%m-%d")
    );

    rsx! {
        Card {
            title: "Trend Analysis & Predictions".to_string(),
            description: "Historical data with forecasted values".to_string(),
            footer: rsx! {
                TrendFooter {
                    headline: predicted_trend_footer(&trend),
                    trend,
                    caption,
                }
            },
            ChartContainer { id: CHART_ID.to_string(), min_height: 300 }
        }
    }
}
