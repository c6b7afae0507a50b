//! Error handling for the application

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Page not found")]
    NotFound,

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Error page, styled like the result page
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    message: &'static str,
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Page not found"),
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        let page = ErrorTemplate {
            status: status.as_u16(),
            message,
        };

        // The error page must not fail in turn; degrade to the bare message.
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Error page render failed: {}", e);
                (status, message).into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_renders_html_page() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_text(response).await;
        assert!(body.contains("<h1>404</h1>"));
        assert!(body.contains("<p>Page not found</p>"));
        assert!(body.contains(r#"<a href="/">Back to the calculator</a>"#));
    }

    #[tokio::test]
    async fn test_error_page_shares_result_page_styling() {
        let body = body_text(AppError::NotFound.into_response()).await;

        assert!(body.contains("<title>Vessel Weight Calculator - 404</title>"));
        assert!(body.contains(r#"<div class="container">"#));
        assert!(body.contains("linear-gradient(135deg, rgb(198, 251, 255), rgb(141, 188, 255))"));
    }

    #[tokio::test]
    async fn test_template_error_is_500() {
        let response = AppError::from(askama::Error::Fmt(std::fmt::Error)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_text(response).await;
        assert!(body.contains("<h1>500</h1>"));
        assert!(body.contains("Template error"));
    }
}
