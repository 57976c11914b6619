use axum::{Json, debug_handler, extract::State};
use sqlx::SqlitePool;

use crate::{ApiError, ApiResult, AppState, now_iso};

use super::{AuthResponse, Credentials, TokenKeys, UserSummary, password};

#[debug_handler(state = AppState)]
pub(crate) async fn register(
    State(db_pool): State<SqlitePool>,
    State(keys): State<TokenKeys>,
    Json(Credentials { username, password }): Json<Credentials>,
) -> ApiResult<Json<AuthResponse>> {
    if sqlx::query("SELECT 1 FROM users WHERE username=?")
        .bind(&username)
        .fetch_optional(&db_pool)
        .await?
        .is_some()
    {
        return Err(ApiError::DuplicateUsername);
    }

    let digest = password::hash(&password)?;

    // The UNIQUE constraint backstops the check above under concurrent
    // identical registrations.
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO users (username, password_hash, created_at) VALUES (?,?,?) RETURNING id",
    )
    .bind(&username)
    .bind(&digest)
    .bind(now_iso())
    .fetch_one(&db_pool)
    .await
    .map_err(|err| {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return ApiError::DuplicateUsername;
            }
        }
        ApiError::from(err)
    })?;

    tracing::info!("registered @{username} (#{id})");

    let token = keys.issue(id)?;
    Ok(Json(AuthResponse {
        token,
        user: UserSummary { id, username },
    }))
}
