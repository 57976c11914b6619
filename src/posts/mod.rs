mod create;
mod feed;
mod like;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Serialize;
use sqlx::prelude::FromRow;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create::create_post))
        .route("/feed", get(feed::feed))
        .route("/{id}/like", post(like::toggle_like))
}

#[derive(Serialize, FromRow)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) user_id: i64,
    pub(crate) content: String,
    pub(crate) created_at: String,
    pub(crate) likes: i64,
}

/// A feed row carries both the stored counter (`likes`) and the live count
/// from the relation (`like_count`); the two must agree.
#[derive(Serialize, FromRow)]
pub(crate) struct FeedPost {
    pub(crate) id: i64,
    pub(crate) user_id: i64,
    pub(crate) username: String,
    pub(crate) content: String,
    pub(crate) created_at: String,
    pub(crate) likes: i64,
    pub(crate) like_count: i64,
}
