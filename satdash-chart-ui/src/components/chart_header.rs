//! Card header with title and a one-line description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub description: String,
}

/// Title block shared by every dashboard card.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "display: grid; gap: 4px;",
            h3 {
                style: "margin: 0; font-size: 16px; font-weight: 600;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: #64748b;",
                    "{props.description}"
                }
            }
        }
    }
}
