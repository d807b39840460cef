use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::health::health;
use super::handlers::login_doctor::login_doctor;
use super::handlers::login_patient::login_patient;
use super::handlers::register_doctor::register_doctor;
use super::handlers::register_patient::register_patient;
use crate::doctor::ports::DoctorServicePort;
use crate::patient::ports::PatientServicePort;

#[derive(Clone)]
pub struct AppState {
    pub patient_service: Arc<dyn PatientServicePort>,
    pub doctor_service: Arc<dyn DoctorServicePort>,
}

pub fn create_router(
    patient_service: Arc<dyn PatientServicePort>,
    doctor_service: Arc<dyn DoctorServicePort>,
) -> Router {
    let state = AppState {
        patient_service,
        doctor_service,
    };

    let auth_routes = Router::new()
        .route("/registerpatient", post(register_patient))
        .route("/loginpatient", post(login_patient))
        .route("/registerdoctor", post(register_doctor))
        .route("/logindoctor", post(login_doctor));

    // Headers stay out of the span so Authorization values never reach the logs
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/health", get(health))
        .merge(auth_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
