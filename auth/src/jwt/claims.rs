use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token claims.
///
/// `role` is only present on tokens issued to principals that carry one
/// (doctors); patient tokens omit the claim entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (principal identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Principal email address
    pub email: String,

    /// Principal role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Claims {
    /// Build claims for a principal, issued at `issued_at` and valid for `lifetime`.
    ///
    /// # Arguments
    /// * `subject` - Principal identifier (stored as its string form)
    /// * `email` - Principal email
    /// * `role` - Optional role claim
    /// * `issued_at` - Issue instant
    /// * `lifetime` - Validity window
    pub fn for_principal(
        subject: impl ToString,
        email: impl Into<String>,
        role: Option<&str>,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
            email: email.into(),
            role: role.map(str::to_string),
        }
    }
}
