use axum::{Json, debug_handler, extract::State};
use sqlx::SqlitePool;

use crate::{ApiResult, AppState, auth::AuthUser};

use super::FeedPost;

const FEED_LIMIT: i64 = 50;

/// Derived view, recomputed per request: newest posts by the caller or
/// anyone the caller follows. No pagination beyond the flat limit.
#[debug_handler(state = AppState)]
pub(crate) async fn feed(
    State(db_pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<Vec<FeedPost>>> {
    let posts: Vec<FeedPost> = sqlx::query_as(
        "SELECT p.id,p.user_id,u.username,p.content,p.created_at,p.likes, \
           (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS like_count \
         FROM posts p \
         JOIN users u ON u.id = p.user_id \
         WHERE p.user_id = ? \
            OR p.user_id IN (SELECT following_id FROM follows WHERE follower_id = ?) \
         ORDER BY p.created_at DESC, p.id DESC \
         LIMIT ?",
    )
    .bind(user_id)
    .bind(user_id)
    .bind(FEED_LIMIT)
    .fetch_all(&db_pool)
    .await?;

    Ok(Json(posts))
}
