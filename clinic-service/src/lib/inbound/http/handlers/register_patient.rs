use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::PatientResponseData;
use super::REGISTERED;
use crate::inbound::http::router::AppState;
use crate::patient::models::RegisterPatientRequest;

pub async fn register_patient(
    State(state): State<AppState>,
    payload: Result<Json<RegisterPatientRequest>, JsonRejection>,
) -> Result<ApiSuccess<PatientResponseData>, ApiError> {
    let Json(body) = payload?;

    state
        .patient_service
        .register(body)
        .await
        .map_err(ApiError::from)
        .map(|session| {
            ApiSuccess::new(
                StatusCode::CREATED,
                PatientResponseData::new(REGISTERED, session),
            )
        })
}
