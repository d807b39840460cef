use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Lifetime of every session token.
const SESSION_LIFETIME_DAYS: i64 = 4;

/// Mints signed session tokens for authenticated principals.
///
/// Built once at startup from the process-wide signing secret and shared
/// read-only afterwards. [`TokenIssuer::verify`] checks tokens against the
/// same key and expiry contract.
pub struct TokenIssuer {
    jwt_handler: JwtHandler,
    lifetime: Duration,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `secret` - HMAC signing secret
    ///
    /// # Errors
    /// * `MissingSecret` - The secret is empty; this is a configuration
    ///   error and must stop the process before it serves requests
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        Ok(Self {
            jwt_handler: JwtHandler::new(secret)?,
            lifetime: Duration::days(SESSION_LIFETIME_DAYS),
        })
    }

    /// Issue a token for a principal.
    ///
    /// # Arguments
    /// * `subject` - Principal identifier, encoded as its string form
    /// * `email` - Principal email
    /// * `role` - Role claim, omitted from the token when `None`
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(
        &self,
        subject: impl ToString,
        email: &str,
        role: Option<&str>,
    ) -> Result<String, JwtError> {
        let claims = Claims::for_principal(subject, email, role, Utc::now(), self.lifetime);
        self.jwt_handler.encode(&claims)
    }

    /// Validate a token and return its claims.
    ///
    /// # Errors
    /// * `TokenExpired` - Token is past its expiry
    /// * `DecodingFailed` - Token signature is invalid or malformed
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}
