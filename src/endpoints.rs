//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/charts/{chart_id}', use [format_endpoint].

/// The root route which redirects to the charts page.
pub const ROOT: &str = "/";
/// The page displaying every metric chart.
pub const CHARTS_VIEW: &str = "/charts";
/// A single metric chart. Returns just the chart card for htmx requests.
pub const CHART_VIEW: &str = "/charts/{chart_id}";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The sample dataset for a granularity as JSON.
pub const METRICS_API: &str = "/api/metrics/{granularity}";

/// Replace the parameter in `endpoint_path` with `value`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/charts/{chart_id}', '{chart_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, value: &str) -> String {
    let param_start = match endpoint_path.find('{') {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        value,
        &endpoint_path[param_end..]
    )
}
