use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

/// Error for LicenseNumber validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LicenseNumberError {
    #[error("License number must be 2 letters followed by 6 digits, got {0:?}")]
    InvalidFormat(String),
}

/// Broad classification of [`AuthError`], used by the request boundary to
/// choose a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing input.
    Validation,
    /// Hospital PIN rejected.
    Authorization,
    /// Uniqueness violation.
    Conflict,
    /// Bad login. Deliberately generic.
    Authentication,
    /// Persistence or connectivity failure.
    Storage,
    /// Hashing or signing failure.
    Internal,
}

/// Top-level error for registration and login
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Invalid license number format. Must be 2 letters followed by 6 digits")]
    BadLicenseFormat,

    #[error("Invalid hospital PIN code")]
    InvalidPin,

    #[error("Email already registered")]
    EmailExists,

    #[error("License number already registered")]
    LicenseExists,

    // Shared by "no such account" and "wrong password"
    #[error("Invalid email or password")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Database error: {0}")]
    Storage(String),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] JwtError),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields
            | AuthError::MissingCredentials
            | AuthError::BadLicenseFormat => ErrorKind::Validation,
            AuthError::InvalidPin => ErrorKind::Authorization,
            AuthError::EmailExists | AuthError::LicenseExists => ErrorKind::Conflict,
            AuthError::InvalidCredentials => ErrorKind::Authentication,
            AuthError::Storage(_) => ErrorKind::Storage,
            AuthError::Password(_) | AuthError::Token(_) => ErrorKind::Internal,
        }
    }

    /// Stable machine-readable key for the error.
    pub fn key(&self) -> &'static str {
        match self {
            AuthError::MissingFields => "missing_fields",
            AuthError::MissingCredentials => "missing_credentials",
            AuthError::BadLicenseFormat => "bad_license_format",
            AuthError::InvalidPin => "invalid_pin",
            AuthError::EmailExists => "email_exists",
            AuthError::LicenseExists => "license_exists",
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::Storage(_) => "storage",
            AuthError::Password(_) => "password",
            AuthError::Token(_) => "token",
        }
    }
}

impl From<LicenseNumberError> for AuthError {
    fn from(_: LicenseNumberError) -> Self {
        AuthError::BadLicenseFormat
    }
}
