mod follow;
mod profile;

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/follow/{id}", post(follow::toggle_follow))
        .route("/profile/{username}", get(profile::profile))
}
