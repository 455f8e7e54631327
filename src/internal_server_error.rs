//! The page shown when the server fails to render a chart.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

const DESCRIPTION: &str = "Sorry, the charts could not be loaded.";
const FIX: &str = "Try again later or check the server logs.";

/// Render the 500 page with a custom `description` and suggested `fix`.
pub fn internal_server_error_response(description: &str, fix: &str) -> Response {
    let page = error_view("Internal Server Error", "500", description, fix);

    (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string())).into_response()
}

pub async fn get_internal_server_error_page() -> Response {
    internal_server_error_response(DESCRIPTION, FIX)
}
