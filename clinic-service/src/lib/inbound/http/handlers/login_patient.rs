use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::PatientResponseData;
use super::LOGGED_IN;
use crate::account::models::LoginRequest;
use crate::inbound::http::router::AppState;

pub async fn login_patient(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<PatientResponseData>, ApiError> {
    let Json(body) = payload?;

    state
        .patient_service
        .login(body)
        .await
        .map_err(ApiError::from_login)
        .map(|session| {
            ApiSuccess::new(StatusCode::OK, PatientResponseData::new(LOGGED_IN, session))
        })
}
