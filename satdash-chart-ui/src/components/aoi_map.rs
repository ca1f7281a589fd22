//! Area of interest placeholder.
//!
//! No tiles and no polygon outline: just the name, the bounding-box center
//! and the number of ring coordinates.

use dioxus::prelude::*;
use satdash_data::format::{center_line, coordinate_count_line};
use satdash_model::AreaOfInterest;

#[derive(Props, Clone, PartialEq)]
pub struct AoiMapProps {
    pub aoi: AreaOfInterest,
    /// Tile template of the latest scene, kept on the element for a real map later.
    #[props(default = String::new())]
    pub tile_url: String,
}

#[component]
pub fn AoiMap(props: AoiMapProps) -> Element {
    let name = if props.aoi.name().is_empty() {
        "Area of Interest".to_string()
    } else {
        props.aoi.name().to_string()
    };
    let center = props
        .aoi
        .center()
        .map(center_line)
        .unwrap_or_else(|| "No geometry".to_string());
    let count = coordinate_count_line(&props.aoi);

    rsx! {
        div {
            "data-tile-url": "{props.tile_url}",
            style: "position: relative; width: 100%; height: 256px; background: #f1f5f9; border-radius: 8px; overflow: hidden; border: 1px solid #e2e8f0;",
            div {
                style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center;",
                div {
                    style: "text-align: center; display: grid; gap: 8px;",
                    div { style: "font-size: 14px; font-weight: 500; color: #334155;", "{name}" }
                    div { style: "font-size: 12px; color: #64748b;", "{center}" }
                    div { style: "font-size: 12px; color: #64748b;", "{count}" }
                    div {
                        style: "width: 64px; height: 64px; margin: 0 auto; background: #bbf7d0; border: 2px solid #4ade80; border-radius: 8px; display: flex; align-items: center; justify-content: center; color: #16a34a; font-size: 28px;",
                        "⌖"
                    }
                }
            }
            div {
                style: "position: absolute; bottom: 8px; left: 8px; font-size: 12px; color: #94a3b8; background: rgba(255,255,255,0.8); padding: 4px 8px; border-radius: 4px;",
                "Satellite View"
            }
        }
    }
}
