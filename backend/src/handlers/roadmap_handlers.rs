use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::{json, Value};

use crate::api::sendgrid::RoadmapMailer;
use crate::models::task_models::RoadmapRequest;
use crate::utils::rate_limit::client_ip;
use crate::utils::roadmap_email::{render_roadmap_email, ROADMAP_SUBJECT};
use crate::utils::scoring::{calculate_score, is_valid_rating};
use crate::AppState;

pub enum RoadmapDelivery {
    /// Record the request and report success without sending anything.
    LogOnly,
    Email(Arc<dyn RoadmapMailer>),
}

fn bad_request(message: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({"error": message})))
}

/// `POST /api/send-roadmap`.
pub async fn send_roadmap(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<RoadmapRequest>, JsonRejection>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let ip = client_ip(&headers);
    if state.rate_limiter.is_rate_limited(&ip) {
        tracing::warn!("Roadmap rate limit hit for {}", ip);
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"error": "Too many requests. Please try again later."})),
        ));
    }

    let Json(req) = payload.map_err(|e| {
        tracing::warn!("Rejected send-roadmap body: {}", e);
        bad_request("Invalid request body")
    })?;

    let email = req
        .email
        .as_deref()
        .map(str::trim)
        .filter(|email| email.contains('@'))
        .ok_or_else(|| bad_request("Invalid email address"))?
        .to_string();

    let mut tasks = req.tasks.unwrap_or_default();
    if tasks.is_empty() {
        return Err(bad_request("At least one task is required"));
    }
    if tasks
        .iter()
        .any(|t| !is_valid_rating(t.impact) || !is_valid_rating(t.effort))
    {
        return Err(bad_request("Impact and effort must be between 1 and 5"));
    }
    for task in tasks.iter_mut() {
        task.score = calculate_score(task.impact, task.effort);
    }

    match &state.roadmap_delivery {
        RoadmapDelivery::LogOnly => {
            tracing::info!("Roadmap requested for {} with {} tasks", email, tasks.len());
            Ok(Json(json!({"success": true})))
        }
        RoadmapDelivery::Email(mailer) => {
            let html = render_roadmap_email(&tasks);
            match mailer.send_html(&email, ROADMAP_SUBJECT, &html).await {
                Ok(status_code) => {
                    tracing::info!("Roadmap emailed to {} ({} tasks), status: {}", email, tasks.len(), status_code);
                    Ok(Json(json!({"success": true, "statusCode": status_code})))
                }
                Err(e) => {
                    tracing::error!("Error sending roadmap to {}: {}", email, e);
                    Err((
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({"error": e.to_string()})),
                    ))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::RoadmapDelivery;
    use crate::api::gemini::MockTaskAnalyzer;
    use crate::api::sendgrid::{MailError, MockRoadmapMailer};
    use crate::utils::rate_limit::FixedWindowLimiter;
    use crate::{build_router, AppState};

    fn router(delivery: RoadmapDelivery, limiter: FixedWindowLimiter) -> Router {
        build_router(Arc::new(AppState {
            analyzer: Arc::new(MockTaskAnalyzer::new()),
            roadmap_delivery: delivery,
            rate_limiter: Arc::new(limiter),
        }))
    }

    fn default_limiter() -> FixedWindowLimiter {
        FixedWindowLimiter::new(5, Duration::from_secs(60))
    }

    fn tasks_json() -> Value {
        json!([
            {"id": "1", "name": "Auto-create invoices", "category": "Admin & Operations", "impact": 4, "effort": 1, "score": 9},
            {"id": "2", "name": "Auto-post to social platforms", "category": "Marketing", "impact": 3, "effort": 2, "score": 7}
        ])
    }

    async fn post(router: Router, ip: &str, body: Value) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/send-roadmap")
                    .header("content-type", "application/json")
                    .header("x-forwarded-for", ip)
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn log_only_delivery_reports_success() {
        let app = router(RoadmapDelivery::LogOnly, default_limiter());
        let (status, body) = post(app, "198.51.100.1", json!({"email": "founder@example.com", "tasks": tasks_json()})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));
    }

    #[tokio::test]
    async fn email_without_at_sign_is_rejected() {
        let app = router(RoadmapDelivery::LogOnly, default_limiter());
        let (status, body) = post(app, "198.51.100.2", json!({"email": "not-an-email", "tasks": tasks_json()})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid email address");
    }

    #[tokio::test]
    async fn missing_or_empty_tasks_are_rejected() {
        let app = router(RoadmapDelivery::LogOnly, default_limiter());
        let (status, body) = post(app.clone(), "198.51.100.3", json!({"email": "a@b.co"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "At least one task is required");

        let (status, _) = post(app, "198.51.100.3", json!({"email": "a@b.co", "tasks": []})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn out_of_range_ratings_are_rejected() {
        let app = router(RoadmapDelivery::LogOnly, default_limiter());
        let tasks = json!([{"name": "x", "category": "Other", "impact": 9, "effort": 1}]);
        let (status, _) = post(app, "198.51.100.4", json!({"email": "a@b.co", "tasks": tasks})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn sixth_request_in_window_gets_429() {
        let app = router(RoadmapDelivery::LogOnly, default_limiter());
        let body = json!({"email": "founder@example.com", "tasks": tasks_json()});
        for _ in 0..5 {
            let (status, _) = post(app.clone(), "203.0.113.9", body.clone()).await;
            assert_eq!(status, StatusCode::OK);
        }
        let (status, body_6) = post(app.clone(), "203.0.113.9", body.clone()).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body_6["error"], "Too many requests. Please try again later.");

        // a different client is still served
        let (status, _) = post(app, "203.0.113.10", body).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn limit_lifts_after_window_resets() {
        let app = router(
            RoadmapDelivery::LogOnly,
            FixedWindowLimiter::new(5, Duration::from_millis(100)),
        );
        let body = json!({"email": "founder@example.com", "tasks": tasks_json()});
        for _ in 0..5 {
            post(app.clone(), "203.0.113.20", body.clone()).await;
        }
        let (status, _) = post(app.clone(), "203.0.113.20", body.clone()).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

        tokio::time::sleep(Duration::from_millis(150)).await;
        let (status, _) = post(app, "203.0.113.20", body).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn email_delivery_returns_provider_status() {
        let mut mailer = MockRoadmapMailer::new();
        mailer
            .expect_send_html()
            .withf(|to, subject, html| {
                to.contains("founder@example.com")
                    && subject.contains("Automation Roadmap")
                    && html.contains("Auto-create invoices")
            })
            .times(1)
            .returning(|_, _, _| Ok(202));

        let app = router(RoadmapDelivery::Email(Arc::new(mailer)), default_limiter());
        let (status, body) = post(app, "198.51.100.5", json!({"email": "founder@example.com", "tasks": tasks_json()})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "statusCode": 202}));
    }

    #[tokio::test]
    async fn provider_failure_surfaces_as_500() {
        let mut mailer = MockRoadmapMailer::new();
        mailer.expect_send_html().returning(|_, _, _| {
            Err(MailError::Provider {
                status: 401,
                body: "bad key".to_string(),
            })
        });

        let app = router(RoadmapDelivery::Email(Arc::new(mailer)), default_limiter());
        let (status, body) = post(app, "198.51.100.6", json!({"email": "founder@example.com", "tasks": tasks_json()})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "SendGrid returned 401: bad key");
    }

    #[tokio::test]
    async fn oversized_estimate_still_sends_the_roadmap() {
        let mut mailer = MockRoadmapMailer::new();
        mailer
            .expect_send_html()
            .withf(|_, _, html| html.contains("6500000002"))
            .times(1)
            .returning(|_, _, _| Ok(202));

        let tasks = json!([{
            "id": "1",
            "name": "Migrate the archive",
            "category": "Admin & Operations",
            "impact": 3,
            "effort": 5,
            "score": 4,
            "analysis": {
                "impactSummary": "Frees the team.",
                "effortSummary": "Large data set.",
                "difficulty": "Hard",
                "estimatedTime": "1000000000 weeks"
            }
        }]);
        let app = router(RoadmapDelivery::Email(Arc::new(mailer)), default_limiter());
        let (status, body) = post(app, "198.51.100.8", json!({"email": "founder@example.com", "tasks": tasks})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_the_mailer() {
        let mut mailer = MockRoadmapMailer::new();
        mailer.expect_send_html().never();

        let app = router(RoadmapDelivery::Email(Arc::new(mailer)), default_limiter());
        let (status, _) = post(app, "198.51.100.7", json!({"email": "nobody", "tasks": tasks_json()})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
