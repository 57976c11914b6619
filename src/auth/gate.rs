use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use crate::ApiError;

use super::TokenKeys;

/// The verified caller identity. Extracting this is the only place a
/// cross-cutting authorization decision is made; downstream handlers trust
/// the attached id unconditionally.
///
/// Missing `Authorization: Bearer` header rejects with 401; a present but
/// unverifiable token rejects with 403.
pub struct AuthUser(pub i64);

impl<S> FromRequestParts<S> for AuthUser
where
    TokenKeys: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(ApiError::Unauthorized)?;

        let keys = TokenKeys::from_ref(state);
        let user_id = keys.verify(token).ok_or(ApiError::Forbidden)?;
        Ok(AuthUser(user_id))
    }
}
