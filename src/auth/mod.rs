pub mod gate;
pub mod password;
pub mod token;

mod login;
mod register;

pub use gate::AuthUser;
pub use token::TokenKeys;

use axum::{Router, routing::post};
use serde::{Deserialize, Serialize};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register::register))
        .route("/login", post(login::login))
}

#[derive(Deserialize)]
pub(crate) struct Credentials {
    pub(crate) username: String,
    pub(crate) password: String,
}

#[derive(Serialize)]
pub(crate) struct UserSummary {
    pub(crate) id: i64,
    pub(crate) username: String,
}

#[derive(Serialize)]
pub(crate) struct AuthResponse {
    pub(crate) token: String,
    pub(crate) user: UserSummary,
}
