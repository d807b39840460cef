use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::account::errors::AuthError;
use crate::account::errors::ErrorKind;
use crate::account::models::Session;
use crate::doctor::models::DoctorView;
use crate::patient::models::PatientView;

pub mod health;
pub mod login_doctor;
pub mod login_patient;
pub mod register_doctor;
pub mod register_patient;

const REGISTERED: &str = "Registration successful";
const LOGGED_IN: &str = "Login successful";
const LOGIN_FAILED: &str = "Authentication failed";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiErrorData { error: message })).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err.kind() {
            ErrorKind::Validation | ErrorKind::Conflict => ApiError::BadRequest(err.to_string()),
            ErrorKind::Authorization | ErrorKind::Authentication => {
                ApiError::Forbidden(err.to_string())
            }
            ErrorKind::Storage | ErrorKind::Internal => {
                tracing::error!(error = %err, key = err.key(), "Request failed");
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl ApiError {
    /// Login answers storage and internal failures with a generic body; the
    /// detail only goes to the log.
    pub fn from_login(err: AuthError) -> Self {
        match err.kind() {
            ErrorKind::Storage | ErrorKind::Internal => {
                tracing::error!(error = %err, key = err.key(), "Login failed");
                ApiError::InternalServerError(LOGIN_FAILED.to_string())
            }
            _ => ApiError::from(err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientResponseData {
    pub message: String,
    pub patient: PatientView,
    pub token: String,
}

impl PatientResponseData {
    fn new(message: &str, session: Session<PatientView>) -> Self {
        Self {
            message: message.to_string(),
            patient: session.principal,
            token: session.token,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorResponseData {
    pub message: String,
    pub doctor: DoctorView,
    pub token: String,
}

impl DoctorResponseData {
    fn new(message: &str, session: Session<DoctorView>) -> Self {
        Self {
            message: message.to_string(),
            doctor: session.principal,
            token: session.token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(AuthError::MissingFields),
            ApiError::BadRequest("All fields are required".to_string())
        );
        assert_eq!(
            ApiError::from(AuthError::EmailExists),
            ApiError::BadRequest("Email already registered".to_string())
        );
        assert_eq!(
            ApiError::from(AuthError::InvalidPin),
            ApiError::Forbidden("Invalid hospital PIN code".to_string())
        );
        assert_eq!(
            ApiError::from(AuthError::InvalidCredentials),
            ApiError::Forbidden("Invalid email or password".to_string())
        );
        assert_eq!(
            ApiError::from(AuthError::Storage("disk full".to_string())),
            ApiError::InternalServerError("Database error: disk full".to_string())
        );
    }

    #[test]
    fn test_login_mapping_hides_storage_detail() {
        assert_eq!(
            ApiError::from_login(AuthError::Storage("relation \"doctors\" does not exist".to_string())),
            ApiError::InternalServerError("Authentication failed".to_string())
        );
        assert_eq!(
            ApiError::from_login(AuthError::InvalidCredentials),
            ApiError::Forbidden("Invalid email or password".to_string())
        );
        assert_eq!(
            ApiError::from_login(AuthError::MissingCredentials),
            ApiError::BadRequest("Email and password are required".to_string())
        );
    }

    #[test]
    fn test_error_response_status() {
        let response = ApiError::Forbidden("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
