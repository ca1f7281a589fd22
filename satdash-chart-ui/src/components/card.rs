//! Bordered panel with header, body and optional footer.

use super::ChartHeader;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    pub title: String,
    #[props(default = String::new())]
    pub description: String,
    /// Rendered to the right of the title (e.g. a selector).
    pub action: Option<Element>,
    pub footer: Option<Element>,
    pub children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    let CardProps {
        title,
        description,
        action,
        footer,
        children,
    } = props;

    rsx! {
        section {
            style: "background: #fff; border: 1px solid #e2e8f0; border-radius: 12px; box-shadow: 0 1px 2px rgba(0,0,0,0.04);",
            div {
                style: "display: flex; align-items: center; gap: 8px; padding: 20px 24px 12px 24px;",
                div {
                    style: "flex: 1;",
                    ChartHeader { title, description }
                }
                if let Some(action) = action {
                    {action}
                }
            }
            div {
                style: "padding: 0 24px 20px 24px;",
                {children}
            }
            if let Some(footer) = footer {
                div {
                    style: "padding: 0 24px 20px 24px; display: grid; gap: 6px; font-size: 13px;",
                    {footer}
                }
            }
        }
    }
}
