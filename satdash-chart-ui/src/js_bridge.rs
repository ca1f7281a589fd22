//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides Rust wrappers that serialize data and call those globals.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static MULTI_LINE_CHART_JS: &str = include_str!("../assets/js/multi-line-chart.js");
static STACKED_AREA_CHART_JS: &str = include_str!("../assets/js/stacked-area-chart.js");
static PREDICTION_CHART_JS: &str = include_str!("../assets/js/prediction-chart.js");

/// Globals the chart scripts define, promoted to `window` after evaluation.
const CHART_GLOBALS: [&str; 6] = [
    "renderMultiLineChart",
    "renderStackedAreaChart",
    "renderPredictionChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('satdash JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Escape a JSON payload for embedding in a single-quoted JS string literal.
pub fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
        .replace('\r', "")
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions via `function` declarations. They are
/// evaluated at global scope with an indirect `eval()` once D3 is ready, then
/// each function is promoted to `window.*` explicitly. Safe to call more than
/// once; later calls are no-ops.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        MULTI_LINE_CHART_JS,
        STACKED_AREA_CHART_JS,
        PREDICTION_CHART_JS,
    ]
    .join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "if (!window.__satdashChartsReady && !window.__satdashChartScripts) {{ window.__satdashChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let promote: String = CHART_GLOBALS
        .iter()
        .map(|name| format!("if (typeof {name} !== 'undefined') window.{name} = {name};\n"))
        .collect();

    let init_js = format!(
        r#"
        (function() {{
            if (window.__satdashChartsReady || window.__satdashChartsPolling) return;
            window.__satdashChartsPolling = true;
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined' && window.__satdashChartScripts) {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__satdashChartScripts);
                    delete window.__satdashChartScripts;
                    {promote}
                    window.__satdashChartsReady = true;
                    window.__satdashChartsPolling = false;
                    console.log('satdash charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Call `window.<function>(containerId, data, config)` once D3, the chart
/// scripts and the container DOM element are all available.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = escape_single_quoted(data_json);
    let escaped_config = escape_single_quoted(config_json);
    log::debug!("[satdash] scheduling {function} into #{container_id}");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__satdashChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[satdash] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a categorical multi-series line chart (temporal analysis).
pub fn render_multi_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderMultiLineChart", container_id, data_json, config_json);
}

/// Render a stacked area chart on a time axis (coverage).
pub fn render_stacked_area_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderStackedAreaChart", container_id, data_json, config_json);
}

/// Render the history + forecast line chart with its reference marker.
pub fn render_prediction_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderPredictionChart", container_id, data_json, config_json);
}

/// Empty the chart container, if it is mounted.
pub fn destroy_chart(container_id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id));
    if let Some(element) = element {
        element.set_inner_html("");
    }
}

#[cfg(test)]
mod tests {
    use super::escape_single_quoted;

    #[test]
    fn escapes_quotes_backslashes_and_newlines() {
        let json = "[{\"label\":\"O'Brien \\\"field\\\"\"}]\n";
        assert_eq!(
            escape_single_quoted(json),
            "[{\"label\":\"O\\'Brien \\\\\"field\\\\\"\"}]"
        );
    }
}
