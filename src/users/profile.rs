use axum::{
    Json, debug_handler,
    extract::{Path, State},
};
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};

use crate::{ApiError, ApiResult, AppState, auth::AuthUser};

#[derive(Serialize, FromRow)]
pub(crate) struct Profile {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) created_at: String,
    pub(crate) followers_count: i64,
    pub(crate) following_count: i64,
    pub(crate) posts_count: i64,
    pub(crate) is_following: bool,
}

/// Aggregate counts are computed per request from the relations; nothing is
/// materialized.
#[debug_handler(state = AppState)]
pub(crate) async fn profile(
    State(db_pool): State<SqlitePool>,
    AuthUser(caller_id): AuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<Profile>> {
    let profile: Option<Profile> = sqlx::query_as(
        "SELECT u.id, u.username, u.created_at, \
           (SELECT COUNT(*) FROM follows WHERE following_id = u.id) AS followers_count, \
           (SELECT COUNT(*) FROM follows WHERE follower_id = u.id) AS following_count, \
           (SELECT COUNT(*) FROM posts WHERE user_id = u.id) AS posts_count, \
           EXISTS(SELECT 1 FROM follows WHERE follower_id = ? AND following_id = u.id) \
             AS is_following \
         FROM users u WHERE u.username = ?",
    )
    .bind(caller_id)
    .bind(&username)
    .fetch_optional(&db_pool)
    .await?;

    profile.map(Json).ok_or(ApiError::NotFound)
}
