//! Stateless signed identity assertions. Validity is purely a function of
//! signature and expiry; there is no revocation list.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Fallback when `JWT_SECRET` is unset. A known weakness kept on purpose for
/// development; `main` warns loudly when it is in effect.
pub const DEV_SECRET: &str = "default_secret";

pub const VALIDITY_HOURS: i64 = 24;

#[derive(Serialize, Deserialize)]
struct Claims {
    id: i64,
    exp: i64,
}

#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    pub fn issue(&self, user_id: i64) -> anyhow::Result<String> {
        self.issue_with_expiry(user_id, Utc::now() + Duration::hours(VALIDITY_HOURS))
    }

    /// Seam for tests that need to simulate the clock.
    pub fn issue_with_expiry(
        &self,
        user_id: i64,
        expires_at: DateTime<Utc>,
    ) -> anyhow::Result<String> {
        let claims = Claims {
            id: user_id,
            exp: expires_at.timestamp(),
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Uniform failure: expired, tampered, and structurally broken tokens are
    /// indistinguishable to the caller.
    pub fn verify(&self, token: &str) -> Option<i64> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims.id)
            .ok()
    }
}
