use auth::PasswordError;
use auth::PasswordHasher;
use auth::TokenIssuer;

use crate::account::errors::AuthError;
use crate::account::models::Principal;

/// Password verification and token issuance shared by both principal types.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    // Verified against when the email is unknown so both failure paths cost one hash check.
    decoy_hash: String,
}

impl Authenticator {
    /// Create a new authenticator around the process-wide token issuer.
    ///
    /// # Errors
    /// * `HashingFailed` - Decoy hash could not be produced
    pub fn new(token_issuer: TokenIssuer) -> Result<Self, PasswordError> {
        let password_hasher = PasswordHasher::new();
        let decoy_hash = password_hasher.hash("decoy-password")?;

        Ok(Self {
            password_hasher,
            token_issuer,
            decoy_hash,
        })
    }

    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        Ok(self.password_hasher.hash(password)?)
    }

    /// Check a password against the looked-up principal.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No principal, or the password does not match.
    ///   The two cases are indistinguishable.
    pub fn authenticate<P: Principal>(
        &self,
        found: Option<P>,
        password: &str,
    ) -> Result<P, AuthError> {
        match found {
            Some(principal) if self.password_hasher.verify(password, principal.password_hash()) => {
                Ok(principal)
            }
            Some(_) => Err(AuthError::InvalidCredentials),
            None => {
                let _ = self.password_hasher.verify(password, &self.decoy_hash);
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Issue a session token for a principal.
    pub fn issue_token<P: Principal>(&self, principal: &P) -> Result<String, AuthError> {
        Ok(self
            .token_issuer
            .issue(principal.id(), principal.email(), P::ROLE)?)
    }

    pub fn token_issuer(&self) -> &TokenIssuer {
        &self.token_issuer
    }
}
