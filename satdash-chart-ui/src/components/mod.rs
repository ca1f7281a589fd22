//! Reusable Dioxus RSX components for the vegetation dashboard.

mod alert_banner;
mod aoi_map;
mod card;
mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod prediction_summary;
mod time_range_selector;
mod trend_footer;

pub use alert_banner::AlertBanners;
pub use aoi_map::AoiMap;
pub use card::Card;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use prediction_summary::PredictionSummary;
pub use time_range_selector::TimeRangeSelector;
pub use trend_footer::TrendFooter;
