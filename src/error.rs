//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// No chart is registered under the requested slug.
    #[error("there is no chart called \"{0}\"")]
    UnknownChart(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::UnknownChart(_) => NotFoundError.into_response(),
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::UnknownChart(slug) => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not load chart".to_owned(),
                    details: format!(
                        "There is no chart called \"{slug}\". \
                        Try refreshing the page to get the latest charts."
                    ),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::test_utils::{assert_valid_html, parse_html_document, parse_html_fragment};

    use super::Error;

    #[tokio::test]
    async fn unknown_chart_renders_not_found_page() {
        let response = Error::UnknownChart("pipeline-velocity".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
    }

    #[tokio::test]
    async fn unknown_chart_alert_names_slug() {
        let response = Error::UnknownChart("pipeline-velocity".to_owned()).into_alert_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = parse_html_fragment(response).await;
        let text: String = html.root_element().text().collect();
        assert!(text.contains("pipeline-velocity"), "got {text}");
    }
}
