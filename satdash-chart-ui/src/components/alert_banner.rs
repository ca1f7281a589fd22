//! Threshold alert banners.

use dioxus::prelude::*;
use satdash_data::format::alert_line;
use satdash_model::Alert;

#[derive(Props, Clone, PartialEq)]
pub struct AlertBannersProps {
    pub alerts: Vec<Alert>,
}

/// One amber banner per alert; renders nothing when there are none.
#[component]
pub fn AlertBanners(props: AlertBannersProps) -> Element {
    if props.alerts.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "display: grid; gap: 8px;",
            for (i, line) in props.alerts.iter().map(alert_line).enumerate() {
                div {
                    key: "{i}",
                    role: "alert",
                    style: "display: flex; gap: 10px; align-items: flex-start; padding: 12px 16px; border-radius: 8px; border: 1px solid #fde68a; background: #fffbeb; color: #92400e; font-size: 14px;",
                    span { style: "color: #d97706;", "⚠" }
                    span { "{line}" }
                }
            }
        }
    }
}
