use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

/// Every handler-level failure collapses to one of these; each variant is a
/// fixed status+message pair so nothing internal leaks to the client.
#[derive(Debug)]
pub enum ApiError {
    DuplicateUsername,
    InvalidCredentials,
    SelfFollow,
    NotFound,
    Unauthorized,
    Forbidden,
    Internal(anyhow::Error),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::DuplicateUsername => (StatusCode::BAD_REQUEST, "Username already exists"),
            ApiError::InvalidCredentials => (StatusCode::BAD_REQUEST, "Invalid credentials"),
            ApiError::SelfFollow => (StatusCode::BAD_REQUEST, "Cannot follow yourself"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "User not found"),
            ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Access denied. No token provided.")
            }
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "Invalid token"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(err) = &self {
            tracing::error!("internal error: {err:#}");
        }
        let (status, message) = self.parts();
        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}
