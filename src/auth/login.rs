use axum::{Json, debug_handler, extract::State};
use sqlx::SqlitePool;

use crate::{ApiError, ApiResult, AppState};

use super::{AuthResponse, Credentials, TokenKeys, UserSummary, password};

/// An unknown username and a wrong password take the same exit so the reply
/// carries no enumeration signal.
#[debug_handler(state = AppState)]
pub(crate) async fn login(
    State(db_pool): State<SqlitePool>,
    State(keys): State<TokenKeys>,
    Json(Credentials { username, password }): Json<Credentials>,
) -> ApiResult<Json<AuthResponse>> {
    let Some((id, digest)): Option<(i64, String)> =
        sqlx::query_as("SELECT id,password_hash FROM users WHERE username=?")
            .bind(&username)
            .fetch_optional(&db_pool)
            .await?
    else {
        return Err(ApiError::InvalidCredentials);
    };

    if !password::verify(&password, &digest)? {
        return Err(ApiError::InvalidCredentials);
    }

    let token = keys.issue(id)?;
    Ok(Json(AuthResponse {
        token,
        user: UserSummary { id, username },
    }))
}
