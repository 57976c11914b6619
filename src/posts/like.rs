use axum::{
    Json, debug_handler,
    extract::{Path, State},
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{ApiResult, AppState, auth::AuthUser};

/// Idempotent toggle. The relation row and the denormalized counter on the
/// post move together inside one transaction.
#[debug_handler(state = AppState)]
pub(crate) async fn toggle_like(
    State(db_pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
    Path(post_id): Path<i64>,
) -> ApiResult<Json<serde_json::Value>> {
    let mut tx = db_pool.begin().await?;

    let liked = sqlx::query("SELECT 1 FROM likes WHERE user_id=? AND post_id=?")
        .bind(user_id)
        .bind(post_id)
        .fetch_optional(&mut *tx)
        .await?
        .is_some();

    let message = if liked {
        sqlx::query("DELETE FROM likes WHERE user_id=? AND post_id=?")
            .bind(user_id)
            .bind(post_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("UPDATE posts SET likes = likes - 1 WHERE id=?")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;
        "Post unliked"
    } else {
        sqlx::query("INSERT INTO likes (user_id,post_id) VALUES (?,?)")
            .bind(user_id)
            .bind(post_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("UPDATE posts SET likes = likes + 1 WHERE id=?")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;
        "Post liked"
    };

    tx.commit().await?;

    Ok(Json(json!({ "message": message })))
}
