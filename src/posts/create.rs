use axum::{Json, debug_handler, extract::State};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{ApiResult, AppState, auth::AuthUser, now_iso};

use super::Post;

#[derive(Deserialize)]
pub(crate) struct NewPost {
    content: String,
}

#[debug_handler(state = AppState)]
pub(crate) async fn create_post(
    State(db_pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
    Json(NewPost { content }): Json<NewPost>,
) -> ApiResult<Json<Post>> {
    let created: Post = sqlx::query_as(
        "INSERT INTO posts (user_id,content,created_at) VALUES (?,?,?) \
         RETURNING id,user_id,content,created_at,likes",
    )
    .bind(user_id)
    .bind(&content)
    .bind(now_iso())
    .fetch_one(&db_pool)
    .await?;

    Ok(Json(created))
}
