//! Salted one-way password hashing. A fresh salt is generated per call by the
//! primitive; verification is constant-time.

const COST: u32 = 10;

pub fn hash(password: &str) -> anyhow::Result<String> {
    bcrypt::hash(password, COST).map_err(|e| anyhow::anyhow!("failed to hash password: {e}"))
}

/// A clean mismatch is `Ok(false)`; a digest that cannot be parsed is an
/// error, since we only ever store digests we produced ourselves.
pub fn verify(password: &str, digest: &str) -> anyhow::Result<bool> {
    bcrypt::verify(password, digest).map_err(|e| anyhow::anyhow!("malformed password digest: {e}"))
}
