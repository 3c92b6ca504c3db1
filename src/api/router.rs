use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, catalog, slots, draft, appointment};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Shop catalog
        .route("/api/v1/professionals", get(catalog::list_professionals))
        .route("/api/v1/services", get(catalog::list_services))
        .route("/api/v1/calendar/week", get(catalog::get_week))
        .route("/api/v1/slots", get(slots::get_slots))

        // Booking draft
        .route("/api/v1/draft", get(draft::get_draft).delete(draft::reset_draft))
        .route("/api/v1/draft/professional", put(draft::select_professional))
        .route("/api/v1/draft/service", put(draft::select_service))
        .route("/api/v1/draft/date", put(draft::select_date))
        .route("/api/v1/draft/time", put(draft::select_time))
        .route("/api/v1/draft/confirmation", post(draft::open_confirmation).delete(draft::close_confirmation))
        .route("/api/v1/draft/submit", post(draft::submit_draft))

        // Appointments
        .route("/api/v1/appointments", get(appointment::list_appointments))
        .route("/api/v1/appointments/{appointment_id}", get(appointment::get_appointment))
        .route("/api/v1/appointments/{appointment_id}/status", put(appointment::update_status))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
