use axum::{
    Json, debug_handler,
    extract::{Path, State},
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{ApiError, ApiResult, AppState, auth::AuthUser};

#[debug_handler(state = AppState)]
pub(crate) async fn toggle_follow(
    State(db_pool): State<SqlitePool>,
    AuthUser(follower_id): AuthUser,
    Path(following_id): Path<i64>,
) -> ApiResult<Json<serde_json::Value>> {
    if follower_id == following_id {
        return Err(ApiError::SelfFollow);
    }

    let mut tx = db_pool.begin().await?;

    let following = sqlx::query("SELECT 1 FROM follows WHERE follower_id=? AND following_id=?")
        .bind(follower_id)
        .bind(following_id)
        .fetch_optional(&mut *tx)
        .await?
        .is_some();

    let message = if following {
        sqlx::query("DELETE FROM follows WHERE follower_id=? AND following_id=?")
            .bind(follower_id)
            .bind(following_id)
            .execute(&mut *tx)
            .await?;
        "User unfollowed"
    } else {
        sqlx::query("INSERT INTO follows (follower_id,following_id) VALUES (?,?)")
            .bind(follower_id)
            .bind(following_id)
            .execute(&mut *tx)
            .await?;
        "User followed"
    };

    tx.commit().await?;

    Ok(Json(json!({ "message": message })))
}
