//! Dropdown for the coverage chart window.

use dioxus::prelude::*;
use satdash_data::TimeRange;

#[derive(Props, Clone, PartialEq)]
pub struct TimeRangeSelectorProps {
    pub value: TimeRange,
    pub on_change: EventHandler<TimeRange>,
}

/// Time window selector. The selection is owned by the caller.
#[component]
pub fn TimeRangeSelector(props: TimeRangeSelectorProps) -> Element {
    let on_change = move |evt: Event<FormData>| match evt.value().parse::<TimeRange>() {
        Ok(range) => props.on_change.call(range),
        Err(e) => log::warn!("ignoring time range selection: {}", e),
    };

    rsx! {
        select {
            "aria-label": "Select time range",
            style: "width: 160px; padding: 6px 8px; border-radius: 8px; border: 1px solid #e2e8f0; background: #fff;",
            onchange: on_change,
            for range in TimeRange::ALL {
                option {
                    value: range.as_str(),
                    selected: range == props.value,
                    {range.label()}
                }
            }
        }
    }
}
