// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{admin, articles};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

/// `allowed_origins` empty means any origin.
pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "ignoring unparsable CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/articles", get(articles::list_articles))
        .route(
            "/api/v1/articles/by-slug/{slug}",
            get(articles::get_article_page),
        )
        .route(
            "/api/v1/admin/articles",
            get(admin::list_registrations).post(admin::create_registration),
        )
        .route(
            "/api/v1/admin/articles/{id}",
            put(admin::update_registration).delete(admin::delete_registration),
        )
        .route(
            "/api/v1/admin/articles/refresh/{slug}",
            post(admin::refresh_article),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
