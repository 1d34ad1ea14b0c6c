pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::parser::handlers as parser_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume Parsing API
        .route(
            "/api/v1/resumes/parse",
            post(parser_handlers::handle_parse_resume),
        )
        .route(
            "/api/v1/resumes/parse-text",
            post(parser_handlers::handle_parse_text),
        )
        // JD Analysis API
        .route(
            "/api/v1/jd/analyze",
            post(analysis_handlers::handle_analyze_jd),
        )
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let state = AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                max_upload_bytes: 1024 * 1024,
            },
        };
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_parse_text_endpoint_returns_parsed_fields() {
        let payload = serde_json::json!({
            "text": "John Smith\njohn@example.com\n555-123-4567\n\nSkills: Python, React, AWS\n\nExperience\nBuilt systems at Acme for 3 years.\n\nEducation\nBS Computer Science"
        });
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/resumes/parse-text")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["parsed"]["name"]["value"], "John Smith");
        assert_eq!(json["parsed"]["email"]["value"], "john@example.com");
        assert_eq!(json["parsed"]["skills"]["value"][0], "Python");
    }

    #[tokio::test]
    async fn test_analyze_endpoint_rejects_empty_jd() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/jd/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"jd_text": ""}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_analyze_endpoint_returns_report() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/jd/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"jd_text": "We need a rockstar. We use AWS."}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["di_issues"][0], "Avoid using \"rockstar\"");
        assert_eq!(json["seo_keywords"][0], "AWS");
    }

    #[tokio::test]
    async fn test_parse_endpoint_requires_file_field() {
        let boundary = "X-TEST-BOUNDARY";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"notes\"\r\n\r\nhello\r\n--{boundary}--\r\n"
        );
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/resumes/parse")
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "No file uploaded");
    }
}
