//! Mount point for a D3.js chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the bridge renders into.
    pub id: String,
    /// Minimum height in pixels, reserved before the chart draws.
    #[props(default = 300)]
    pub min_height: u32,
}

fn container_style(min_height: u32) -> String {
    format!("min-height: {}px; position: relative; width: 100%;", min_height)
}

/// Empty div sized for the chart. Its content belongs to D3, not Dioxus.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = container_style(props.min_height);

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
