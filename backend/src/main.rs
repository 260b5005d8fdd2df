use dotenvy::dotenv;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config {
    pub mod app_config;
}
mod handlers {
    pub mod analysis_handlers;
    pub mod roadmap_handlers;
}
mod api {
    pub mod gemini;
    pub mod sendgrid;
}
mod models {
    pub mod task_models;
}
mod utils {
    pub mod rate_limit;
    pub mod roadmap_email;
    pub mod scoring;
    pub mod task_analysis;
    pub mod timeline;
}
mod jobs {
    pub mod scheduler;
}

use api::gemini::{GeminiClient, TaskAnalyzer};
use api::sendgrid::SendGridMailer;
use config::app_config::{AppConfig, DeliveryMode};
use handlers::analysis_handlers;
use handlers::roadmap_handlers::{self, RoadmapDelivery};
use utils::rate_limit::{FixedWindowLimiter, RateLimitStore};

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    pub analyzer: Arc<dyn TaskAnalyzer>,
    pub roadmap_delivery: RoadmapDelivery,
    pub rate_limiter: Arc<dyn RateLimitStore>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/analyze-task", post(analysis_handlers::analyze_task))
        .route("/api/send-roadmap", post(roadmap_handlers::send_roadmap))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

fn cors_layer(frontend_url: Option<&str>) -> anyhow::Result<CorsLayer> {
    let origin = match frontend_url {
        Some(url) => AllowOrigin::exact(HeaderValue::from_str(url)?),
        None => AllowOrigin::from(Any),
    };
    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(origin)
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_TYPE]))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Fail fast: nothing is served with a half-configured environment
    let config = AppConfig::from_env()?;

    let _sentry_guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let http_client = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()?;

    let analyzer: Arc<dyn TaskAnalyzer> = Arc::new(GeminiClient::new(
        http_client.clone(),
        config.gemini_api_url.clone(),
        config.gemini_api_key.clone(),
    ));

    let roadmap_delivery = match (config.delivery, config.sendgrid.as_ref()) {
        (DeliveryMode::Email, Some(sendgrid)) => RoadmapDelivery::Email(Arc::new(SendGridMailer::new(
            http_client.clone(),
            sendgrid.api_key.clone(),
            sendgrid.from_email.clone(),
        ))),
        _ => RoadmapDelivery::LogOnly,
    };
    tracing::info!("Roadmap delivery mode: {:?}", config.delivery);

    let state = Arc::new(AppState {
        analyzer,
        roadmap_delivery,
        rate_limiter: Arc::new(FixedWindowLimiter::new(
            config.rate_limit_max_requests,
            config.rate_limit_window,
        )),
    });

    let state_for_scheduler = state.clone();
    tokio::spawn(async move {
        jobs::scheduler::start_scheduler(state_for_scheduler).await;
    });

    let app = build_router(state).layer(cors_layer(config.frontend_url.as_deref())?);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::time::Duration;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_check_answers_ok() {
        let state = Arc::new(AppState {
            analyzer: Arc::new(api::gemini::MockTaskAnalyzer::new()),
            roadmap_delivery: RoadmapDelivery::LogOnly,
            rate_limiter: Arc::new(FixedWindowLimiter::new(5, Duration::from_secs(60))),
        });
        let response = build_router(state)
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }

    #[test]
    fn cors_rejects_unparseable_origin() {
        assert!(cors_layer(None).is_ok());
        assert!(cors_layer(Some("https://nexark.io")).is_ok());
        assert!(cors_layer(Some("bad\norigin")).is_err());
    }
}
