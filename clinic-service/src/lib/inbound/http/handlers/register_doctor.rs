use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::DoctorResponseData;
use super::REGISTERED;
use crate::doctor::models::RegisterDoctorRequest;
use crate::inbound::http::router::AppState;

pub async fn register_doctor(
    State(state): State<AppState>,
    payload: Result<Json<RegisterDoctorRequest>, JsonRejection>,
) -> Result<ApiSuccess<DoctorResponseData>, ApiError> {
    let Json(body) = payload?;

    state
        .doctor_service
        .register(body)
        .await
        .map_err(ApiError::from)
        .map(|session| {
            ApiSuccess::new(
                StatusCode::CREATED,
                DoctorResponseData::new(REGISTERED, session),
            )
        })
}
