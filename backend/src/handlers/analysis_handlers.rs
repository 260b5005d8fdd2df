use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::models::task_models::{AnalyzeTaskRequest, AnalyzeTaskResponse};
use crate::utils::task_analysis;
use crate::AppState;

fn invalid_body() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": "Invalid request body"})),
    )
}

/// Decodes the body regardless of its content type. Valid JSON that is not
/// an object carries no fields.
fn decode_request(body: &[u8]) -> Result<AnalyzeTaskRequest, serde_json::Error> {
    match serde_json::from_slice::<Value>(body)? {
        value @ Value::Object(_) => serde_json::from_value(value),
        _ => Ok(AnalyzeTaskRequest::default()),
    }
}

/// `POST /api/analyze-task`. Answers 200 with some analysis for every valid
/// request; provider failures are replaced by fallback content.
pub async fn analyze_task(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<AnalyzeTaskResponse>, (StatusCode, Json<Value>)> {
    let req = decode_request(&body).map_err(|e| {
        tracing::warn!("Rejected analyze-task body: {}", e);
        invalid_body()
    })?;

    let task_name = req
        .task_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Task name is required"})),
            )
        })?;

    tracing::info!("Analyzing task '{}'", task_name);
    let analysis = task_analysis::analyze_task(
        state.analyzer.as_ref(),
        task_name,
        req.description.as_deref(),
        req.category.as_deref(),
    )
    .await;

    Ok(Json(AnalyzeTaskResponse { analysis }))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::gemini::{AnalysisError, GeminiClient, MockTaskAnalyzer, TaskAnalyzer};
    use crate::handlers::roadmap_handlers::RoadmapDelivery;
    use crate::utils::rate_limit::FixedWindowLimiter;
    use crate::{build_router, AppState};

    fn router_with(analyzer: impl TaskAnalyzer + 'static) -> axum::Router {
        let state = AppState {
            analyzer: std::sync::Arc::new(analyzer),
            roadmap_delivery: RoadmapDelivery::LogOnly,
            rate_limiter: std::sync::Arc::new(FixedWindowLimiter::new(5, Duration::from_secs(60))),
        };
        build_router(std::sync::Arc::new(state))
    }

    async fn post(router: axum::Router, body: &str) -> (StatusCode, Value) {
        send(
            router,
            Request::builder()
                .method("POST")
                .uri("/api/analyze-task")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn send(router: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn empty_body_requires_task_name() {
        let mut analyzer = MockTaskAnalyzer::new();
        analyzer.expect_generate().never();

        let (status, body) = post(router_with(analyzer), "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Task name is required"}));
    }

    #[tokio::test]
    async fn blank_task_name_is_rejected() {
        let mut analyzer = MockTaskAnalyzer::new();
        analyzer.expect_generate().never();

        let (status, _) = post(router_with(analyzer), r#"{"taskName": "   "}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let analyzer = MockTaskAnalyzer::new();
        let (status, body) = post(router_with(analyzer), "{taskName").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request body");
    }

    #[tokio::test]
    async fn body_without_content_type_is_still_read() {
        let mut analyzer = MockTaskAnalyzer::new();
        analyzer.expect_generate().never();

        let request = Request::builder()
            .method("POST")
            .uri("/api/analyze-task")
            .body(Body::from("{}"))
            .unwrap();
        let (status, body) = send(router_with(analyzer), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Task name is required"}));
    }

    #[tokio::test]
    async fn non_object_json_requires_task_name() {
        let analyzer = MockTaskAnalyzer::new();
        let (status, body) = post(router_with(analyzer), "[1, 2]").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Task name is required");
    }

    #[tokio::test]
    async fn numeric_task_name_is_analyzed() {
        let mut analyzer = MockTaskAnalyzer::new();
        analyzer
            .expect_generate()
            .withf(|prompt| prompt.contains("42"))
            .times(1)
            .returning(|_| Err(AnalysisError::Provider { status: 503, body: "busy".into() }));

        let (status, body) = post(router_with(analyzer), r#"{"taskName": 42}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analysis"]["difficulty"], "Moderate");
    }

    #[tokio::test]
    async fn unreachable_provider_still_answers_with_fallback() {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let gemini = GeminiClient::new(client, "http://127.0.0.1:9/generate", "test-key");

        let (status, body) = post(router_with(gemini), r#"{"taskName": "Auto-create invoices"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analysis"]["difficulty"], "Moderate");
        assert_eq!(body["analysis"]["estimatedTime"], "1-2 weeks");
        assert!(body["analysis"]["impactSummary"].as_str().unwrap().len() > 10);
    }

    #[tokio::test]
    async fn successful_analysis_is_returned_in_camel_case() {
        let mut analyzer = MockTaskAnalyzer::new();
        analyzer.expect_generate().times(1).returning(|_| {
            Ok("```json\n{\"impactSummary\":\"Hours back every week.\",\"effortSummary\":\"One webhook.\",\"difficulty\":\"Easy\",\"estimatedTime\":\"1-2 days\"}\n```".to_string())
        });

        let (status, body) = post(
            router_with(analyzer),
            r#"{"taskName": "Auto-tag new leads in CRM", "category": "Sales & Leads"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"analysis": {
                "impactSummary": "Hours back every week.",
                "effortSummary": "One webhook.",
                "difficulty": "Easy",
                "estimatedTime": "1-2 days"
            }})
        );
    }

    #[tokio::test]
    async fn provider_error_is_not_surfaced() {
        let mut analyzer = MockTaskAnalyzer::new();
        analyzer
            .expect_generate()
            .returning(|_| Err(AnalysisError::Provider { status: 429, body: "quota".into() }));

        let (status, body) = post(router_with(analyzer), r#"{"taskName": "Weekly reports"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("error").is_none());
        assert_eq!(body["analysis"]["difficulty"], "Moderate");
    }
}
