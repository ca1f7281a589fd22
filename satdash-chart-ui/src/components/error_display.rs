//! Load failure banner.

use dioxus::prelude::*;

/// Same shape as the alert banners, in the destructive palette.
const ERROR_STYLE: &str = "display: flex; gap: 10px; align-items: flex-start; padding: 12px 16px; border-radius: 8px; border: 1px solid #fecaca; background: #fef2f2; color: #991b1b; font-size: 14px;";

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shown in place of the panels when the embedded snapshot fails to load.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: ERROR_STYLE,
            span { style: "color: #dc2626; font-weight: 700;", "✕" }
            div {
                style: "display: grid; gap: 2px;",
                span { style: "font-weight: 600;", "Dashboard unavailable" }
                span { "{props.message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ERROR_STYLE;

    #[test]
    fn matches_banner_geometry() {
        assert!(ERROR_STYLE.contains("border-radius: 8px"));
        assert!(ERROR_STYLE.contains("padding: 12px 16px"));
    }
}
