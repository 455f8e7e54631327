//! Application router configuration.

use axum::{Router, response::Redirect, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    charts_page::{get_chart, get_charts_page, get_metric_dataset},
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.static_dir);

    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::CHARTS_VIEW, get(get_charts_page))
        .route(endpoints::CHART_VIEW, get(get_chart))
        .route(endpoints::METRICS_API, get(get_metric_dataset))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, static_dir)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the charts page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::CHARTS_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_charts() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::CHARTS_VIEW);
    }
}

#[cfg(test)]
mod router_tests {
    use axum::http::{HeaderName, HeaderValue};
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::{AppState, catalog::ChartCatalog, endpoints, endpoints::format_endpoint};

    use super::build_router;

    fn get_test_server() -> TestServer {
        let state = AppState::new(ChartCatalog::gtm_metrics(), "static/");
        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn serves_charts_page() {
        let server = get_test_server();

        let response = server.get(endpoints::CHARTS_VIEW).await;

        response.assert_status_ok();
        assert!(response.text().contains("Lead Generation"));
    }

    #[tokio::test]
    async fn granularity_switch_returns_partial() {
        let server = get_test_server();

        let response = server
            .get(&format_endpoint(endpoints::CHART_VIEW, "conversion-rate"))
            .add_query_param("granularity", "weekly")
            .add_header(
                HeaderName::from_static("hx-request"),
                HeaderValue::from_static("true"),
            )
            .await;

        response.assert_status_ok();
        let text = response.text();
        assert!(text.contains(r#"data-granularity="weekly""#), "got {text}");
        assert!(!text.contains("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn invalid_granularity_is_bad_request() {
        let server = get_test_server();

        server
            .get(&format_endpoint(endpoints::CHART_VIEW, "conversion-rate"))
            .add_query_param("granularity", "yearly")
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn unknown_chart_is_not_found() {
        let server = get_test_server();

        server
            .get(&format_endpoint(endpoints::CHART_VIEW, "pipeline-velocity"))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn metrics_api_returns_axis_keyed_records() {
        let server = get_test_server();

        let response = server
            .get(&format_endpoint(endpoints::METRICS_API, "daily"))
            .await;

        response.assert_status_ok();
        let points = response.json::<Value>();
        let points = points.as_array().expect("expected a JSON array");
        assert_eq!(points.len(), 7);
        assert_eq!(points[0]["day"], "Mon");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        server.get("/pipeline").await.assert_status_not_found();
    }
}
