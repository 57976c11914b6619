pub mod auth;
pub mod db;
pub mod error;
pub mod posts;
pub mod res;
pub mod users;

use axum::{Json, Router, debug_handler, extract::FromRef, routing::get};
use serde_json::json;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

pub use error::{ApiError, ApiResult};

use auth::TokenKeys;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub keys: TokenKeys,
}

pub fn app(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(res::terminal))
        .route("/api/health", get(health))
        .nest("/api/auth", auth::router())
        .nest("/api/posts", posts::router())
        .nest("/api/users", users::router())
        .with_state(app_state)
        .layer(CorsLayer::permissive())
}

#[debug_handler]
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

/// RFC 3339 with microseconds so TEXT ordering matches insertion order.
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}
