use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::DoctorResponseData;
use super::LOGGED_IN;
use crate::account::models::LoginRequest;
use crate::inbound::http::router::AppState;

pub async fn login_doctor(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<DoctorResponseData>, ApiError> {
    let Json(body) = payload?;

    state
        .doctor_service
        .login(body)
        .await
        .map_err(ApiError::from_login)
        .map(|session| ApiSuccess::new(StatusCode::OK, DoctorResponseData::new(LOGGED_IN, session)))
}
