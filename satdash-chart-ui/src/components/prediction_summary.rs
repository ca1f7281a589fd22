//! Grid of current forecasts, one cell per index.

use dioxus::prelude::*;
use satdash_data::format::summary_cells;
use satdash_model::Predictions;

#[derive(Props, Clone, PartialEq)]
pub struct PredictionSummaryProps {
    pub predictions: Predictions,
}

fn badge_style(rising: bool) -> &'static str {
    if rising {
        "justify-self: center; font-size: 12px; padding: 2px 8px; border-radius: 9999px; background: #0f172a; color: #fff;"
    } else {
        "justify-self: center; font-size: 12px; padding: 2px 8px; border-radius: 9999px; background: #dc2626; color: #fff;"
    }
}

fn badge_arrow(rising: bool) -> &'static str {
    if rising {
        "▲"
    } else {
        "▼"
    }
}

#[component]
pub fn PredictionSummary(props: PredictionSummaryProps) -> Element {
    let cells = summary_cells(&props.predictions);

    if cells.is_empty() {
        return rsx! {
            p { style: "margin: 0; color: #64748b; font-size: 13px;", "No predictions available." }
        };
    }

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(96px, 1fr)); gap: 16px;",
            for cell in cells {
                div {
                    key: "{cell.index}",
                    style: "text-align: center; display: grid; gap: 4px;",
                    div { style: "font-size: 13px; font-weight: 500; color: #64748b;", "{cell.index}" }
                    div { style: "font-size: 18px; font-weight: 700;", "{cell.value}" }
                    span {
                        style: badge_style(cell.rising),
                        {badge_arrow(cell.rising)}
                        " {cell.badge}"
                    }
                }
            }
        }
    }
}
