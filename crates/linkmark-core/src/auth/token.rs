//! Signed session tokens
//!
//! Stateless JWTs (HS256) carrying the owning user id and a seven-day
//! expiry. Verification is deliberately uniform: expired, malformed, and
//! forged tokens are indistinguishable to the caller, which prevents the
//! token check from acting as an oracle.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::AuthResult;
use crate::config::Config;

/// Token lifetime in days
const TOKEN_TTL_DAYS: i64 = 7;

/// Fallback secret when the configuration provides none
///
/// Known security gap: anyone with this string can forge tokens. Its use
/// is logged at construction and it is not meant to survive past local
/// development.
const INSECURE_DEFAULT_SECRET: &str = "linkmark-insecure-default-secret";

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Owning user id
    sub: i64,
    /// Issued at (seconds since epoch)
    iat: i64,
    /// Expiry (seconds since epoch)
    exp: i64,
}

/// Issues and verifies signed session tokens
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenSigner {
    /// Create a signer from configuration
    ///
    /// Falls back to the compiled-in default secret when the
    /// configuration does not provide one.
    pub fn new(config: &Config) -> Self {
        match &config.token_secret {
            Some(secret) => Self::from_secret(secret),
            None => {
                warn!("no token secret configured; using insecure default");
                Self::from_secret(INSECURE_DEFAULT_SECRET)
            }
        }
    }

    /// Create a signer from a raw secret
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Generate a token for the given user, valid for seven days
    pub fn generate(&self, user_id: i64) -> AuthResult<String> {
        self.generate_with_expiry(user_id, Utc::now() + Duration::days(TOKEN_TTL_DAYS))
    }

    fn generate_with_expiry(
        &self,
        user_id: i64,
        expires_at: DateTime<Utc>,
    ) -> AuthResult<String> {
        let claims = Claims {
            sub: user_id,
            iat: Utc::now().timestamp(),
            exp: expires_at.timestamp(),
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify a token and return the embedded user id
    ///
    /// Returns `None` for expired, malformed, and forged tokens alike.
    pub fn verify(&self, token: &str) -> Option<i64> {
        decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .ok()
            .map(|data| data.claims.sub)
    }
}
