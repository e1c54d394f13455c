use std::fmt;

use thiserror::Error;

/// Secret used when no override is configured.
pub const DEFAULT_TOKEN: &str = "token-secreto";

const SCHEME: &str = "Bearer ";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing Authorization header")]
    MissingHeader,

    #[error("Authorization header is not a Bearer credential")]
    InvalidScheme,

    #[error("bearer token does not match")]
    InvalidToken,
}

/// Pull the token candidate out of an `Authorization` header value.
///
/// The value must start with the literal `"Bearer "` (case-sensitive). The
/// candidate is the second space-separated segment, so `"Bearer a b"` yields
/// `"a"` and `"Bearer  a"` yields the empty string.
pub fn extract_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingHeader)?;
    if !header.starts_with(SCHEME) {
        return Err(AuthError::InvalidScheme);
    }
    Ok(header.split(' ').nth(1).unwrap_or_default())
}

/// Validates a bearer token candidate.
pub trait TokenValidator: Send + Sync {
    fn validate(&self, token: &str) -> Result<(), AuthError>;
}

/// Compares tokens for exact equality against one immutable secret.
#[derive(Clone)]
pub struct StaticTokenValidator {
    secret: String,
}

impl StaticTokenValidator {
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into() }
    }
}

impl Default for StaticTokenValidator {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN)
    }
}

// Keep the secret out of logs.
impl fmt::Debug for StaticTokenValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTokenValidator").field("secret", &"***").finish()
    }
}

impl TokenValidator for StaticTokenValidator {
    fn validate(&self, token: &str) -> Result<(), AuthError> {
        if token == self.secret {
            Ok(())
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}
