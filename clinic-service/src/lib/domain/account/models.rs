use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::account::errors::AuthError;

/// Store-assigned principal identifier.
///
/// Unique and monotonic within one principal type only; a patient and a
/// doctor may share the same numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PrincipalId(pub i64);

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Capabilities shared by every authenticated identity.
pub trait Principal {
    /// Role claim written into issued tokens. Patients carry none.
    const ROLE: Option<&'static str>;

    fn id(&self) -> PrincipalId;
    fn email(&self) -> &str;
    fn password_hash(&self) -> &str;
}

/// Raw login payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login payload with both fields present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    /// # Errors
    /// * `MissingCredentials` - Email or password absent or empty
    pub fn into_credentials(self) -> Result<Credentials, AuthError> {
        match (self.email, self.password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Ok(Credentials { email, password })
            }
            _ => Err(AuthError::MissingCredentials),
        }
    }
}

/// Outcome of a successful registration or login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session<V> {
    pub principal: V,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_credentials() {
        let credentials = LoginRequest::new("a@example.com", "secret")
            .into_credentials()
            .unwrap();
        assert_eq!(credentials.email, "a@example.com");
        assert_eq!(credentials.password, "secret");
    }

    #[test]
    fn test_into_credentials_missing_or_empty() {
        let cases = [
            LoginRequest::default(),
            LoginRequest {
                email: Some("a@example.com".into()),
                password: None,
            },
            LoginRequest::new("", "secret"),
            LoginRequest::new("a@example.com", ""),
        ];

        for request in cases {
            assert!(matches!(
                request.into_credentials(),
                Err(AuthError::MissingCredentials)
            ));
        }
    }

    #[test]
    fn test_principal_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&PrincipalId(12)).unwrap(), "12");
        assert_eq!(PrincipalId(12).to_string(), "12");
    }
}
