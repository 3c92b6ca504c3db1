use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::{
    requests::{SelectDateRequest, SelectProfessionalRequest, SelectServiceRequest, SelectTimeRequest, SubmitBookingRequest},
    responses::{AppointmentView, DraftResponse},
};
use crate::api::handlers::slots::{blocked_for, parse_date};
use crate::domain::services::booking::confirm_booking;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn get_draft(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let tracker = state.tracker.lock().await;
    Json(DraftResponse::from(tracker.draft()))
}

pub async fn select_professional(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SelectProfessionalRequest>,
) -> Result<impl IntoResponse, AppError> {
    let professional = state.catalog.find_professional(&payload.professional_id)
        .ok_or(AppError::NotFound("Professional not found".into()))?
        .clone();

    let mut tracker = state.tracker.lock().await;
    tracker.select_professional(professional);
    Ok(Json(DraftResponse::from(tracker.draft())))
}

pub async fn select_service(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SelectServiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = state.catalog.find_service(&payload.service_id)
        .ok_or(AppError::NotFound("Service not found".into()))?
        .clone();

    let mut tracker = state.tracker.lock().await;
    tracker.select_service(service);
    Ok(Json(DraftResponse::from(tracker.draft())))
}

pub async fn select_date(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SelectDateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&payload.date)?;

    let mut tracker = state.tracker.lock().await;
    tracker.select_date(date);
    Ok(Json(DraftResponse::from(tracker.draft())))
}

/// Only offers what the slot listing would show as selectable.
pub async fn select_time(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SelectTimeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let time = payload.time.trim().to_string();
    if !state.catalog.has_slot(&time) {
        return Err(AppError::Validation(format!("Unknown time slot '{}'", time)));
    }

    let mut tracker = state.tracker.lock().await;
    let draft = tracker.draft();
    let professional_id = draft.professional.as_ref().map(|p| p.id.clone());
    let blocked = blocked_for(&state, professional_id.as_deref(), draft.date).await?;

    if blocked.contains(&time) {
        warn!("Time selection rejected: {} is blocked on {}", time, draft.date);
        return Err(AppError::Conflict("Selected time slot is not available".into()));
    }

    tracker.select_time(time);
    Ok(Json(DraftResponse::from(tracker.draft())))
}

pub async fn open_confirmation(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let mut tracker = state.tracker.lock().await;
    tracker.open_confirmation()?;
    Ok(Json(DraftResponse::from(tracker.draft())))
}

pub async fn close_confirmation(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut tracker = state.tracker.lock().await;
    tracker.close_confirmation();
    Json(DraftResponse::from(tracker.draft()))
}

pub async fn submit_draft(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmitBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut tracker = state.tracker.lock().await;

    // The professional or date may have changed after the time was picked.
    let draft = tracker.draft();
    if let Some(time) = draft.time.as_deref() {
        let professional_id = draft.professional.as_ref().map(|p| p.id.clone());
        let blocked = blocked_for(&state, professional_id.as_deref(), draft.date).await?;
        if blocked.contains(time) {
            warn!("Booking rejected: {} is no longer available on {}", time, draft.date);
            return Err(AppError::Conflict("Selected time slot is not available".into()));
        }
    }

    let created = confirm_booking(
        &mut tracker,
        state.appointment_repo.as_ref(),
        &payload.customer_name,
        &payload.customer_phone,
    )
    .await?;

    Ok(Json(AppointmentView::new(created, &state.catalog)))
}

pub async fn reset_draft(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut tracker = state.tracker.lock().await;
    tracker.reset();
    info!("Booking draft reset");
    Json(DraftResponse::from(tracker.draft()))
}
