//! Vessel route handlers

use askama::Template;
use axum::{
    response::{Html, IntoResponse, Response},
    routing::post,
    Form, Router,
};

use crate::error::Result;

use super::calculators::{self, format_weight};
use super::models::CalculationResult;
use super::requests::CalculateForm;

/// Result page template
#[derive(Template)]
#[template(path = "vessel/result.html")]
struct ResultTemplate {
    diameter: String,
    height: String,
    weight: String,
}

impl From<&CalculationResult> for ResultTemplate {
    fn from(result: &CalculationResult) -> Self {
        Self {
            diameter: result.diameter_mm.to_string(),
            height: result.height_mm.to_string(),
            weight: format_weight(result.weight_kg),
        }
    }
}

/// Routes served by this module
pub fn router() -> Router {
    Router::new().route("/calculate", post(submit))
}

/// Form submission handler.
///
/// Invalid input gets the bare validation message (still `text/html`, 200),
/// valid input gets the styled result page.
pub async fn submit(Form(form): Form<CalculateForm>) -> Result<Response> {
    let result = match calculators::calculate(form.diameter_raw(), form.height_raw()) {
        Ok(result) => result,
        Err(err) => return Ok(Html(err.to_string()).into_response()),
    };

    tracing::debug!(
        diameter_mm = result.diameter_mm,
        height_mm = result.height_mm,
        shell_volume_mm3 = result.shell_volume_mm3,
        heads_volume_mm3 = result.heads_volume_mm3,
        weight_kg = result.weight_kg,
        "Vessel weight calculated"
    );

    let template = ResultTemplate::from(&result);
    Ok(Html(template.render()?).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    const INVALID_INPUT: &str =
        "Invalid input. Please enter numeric values for Diameter and Height.";

    async fn post_form(body: &str) -> Response {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/calculate")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();

        router().oneshot(request).await.unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn content_type(response: &Response) -> String {
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    // ==================== template tests ====================

    #[test]
    fn test_result_template_fields() {
        let result = calculators::calculate("1000", "3000").unwrap();
        let template = ResultTemplate::from(&result);

        assert_eq!(template.diameter, "1000");
        assert_eq!(template.height, "3000");
        assert_eq!(template.weight, "1152.53");
    }

    #[test]
    fn test_result_template_keeps_fractional_dimensions() {
        let result = calculators::calculate("12.5", "40").unwrap();
        let template = ResultTemplate::from(&result);

        assert_eq!(template.diameter, "12.5");
        assert_eq!(template.height, "40");
        assert_eq!(template.weight, "0.19");
    }

    // ==================== handler tests ====================

    #[tokio::test]
    async fn test_submit_renders_result_page() {
        let response = post_form("D=1000&H=3000").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).starts_with("text/html"));

        let body = body_text(response).await;
        assert!(body.contains("Calculated Vessel Weight"));
        assert!(body.contains("<strong>Diameter (mm):</strong> 1000</p>"));
        assert!(body.contains("<strong>Height (mm):</strong> 3000</p>"));
        assert!(body.contains("<strong>Weight (kg):</strong> 1152.53</p>"));
        assert!(body.contains(r#"<a href="/">Perform another calculation</a>"#));
    }

    #[tokio::test]
    async fn test_submit_zero_dimensions() {
        let body = body_text(post_form("D=0&H=0").await).await;
        assert!(body.contains("<strong>Weight (kg):</strong> 0.00</p>"));
    }

    #[tokio::test]
    async fn test_submit_negative_diameter_is_not_rejected() {
        let body = body_text(post_form("D=-500&H=1000").await).await;
        assert!(body.contains("<strong>Diameter (mm):</strong> -500</p>"));
        assert!(body.contains("<strong>Weight (kg):</strong> -20.53</p>"));
    }

    #[tokio::test]
    async fn test_submit_echoes_parsed_not_raw_values() {
        let body = body_text(post_form("D=%201e3%20&H=3000.000").await).await;
        assert!(body.contains("<strong>Diameter (mm):</strong> 1000</p>"));
        assert!(body.contains("<strong>Height (mm):</strong> 3000</p>"));
    }

    #[tokio::test]
    async fn test_submit_non_numeric_returns_plain_message() {
        let response = post_form("D=abc&H=3000").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).starts_with("text/html"));
        assert_eq!(body_text(response).await, INVALID_INPUT);
    }

    #[tokio::test]
    async fn test_submit_missing_field_is_invalid_input() {
        let response = post_form("D=1000").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, INVALID_INPUT);
    }

    #[tokio::test]
    async fn test_submit_empty_body_is_invalid_input() {
        let body = body_text(post_form("").await).await;
        assert_eq!(body, INVALID_INPUT);
    }

    #[tokio::test]
    async fn test_get_calculate_not_allowed() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/calculate")
            .body(Body::empty())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
