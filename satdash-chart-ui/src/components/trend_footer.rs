//! Footer line of a chart card: trend headline plus a muted caption.

use dioxus::prelude::*;
use satdash_data::{Trend, TrendDirection};

#[derive(Props, Clone, PartialEq)]
pub struct TrendFooterProps {
    pub headline: String,
    pub trend: Trend,
    pub caption: String,
}

#[component]
pub fn TrendFooter(props: TrendFooterProps) -> Element {
    let arrow = match props.trend.direction {
        TrendDirection::Up => "↗",
        TrendDirection::Down => "↘",
    };

    rsx! {
        div {
            style: "display: flex; gap: 8px; font-weight: 500;",
            "{props.headline}"
            span { "{arrow}" }
        }
        div {
            style: "color: #64748b;",
            "{props.caption}"
        }
    }
}
