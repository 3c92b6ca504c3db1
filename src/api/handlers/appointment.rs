use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::api::dtos::{requests::UpdateStatusRequest, responses::AppointmentView};
use crate::domain::services::booking::change_status;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let appointments = state.appointment_repo.list().await?;
    let views: Vec<AppointmentView> = appointments
        .into_iter()
        .map(|a| AppointmentView::new(a, &state.catalog))
        .collect();
    Ok(Json(views))
}

pub async fn get_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = state.appointment_repo.find_by_id(&appointment_id).await?
        .ok_or(AppError::NotFound("Appointment not found".into()))?;
    Ok(Json(AppointmentView::new(appointment, &state.catalog)))
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = change_status(state.appointment_repo.as_ref(), &appointment_id, payload.status).await?;
    Ok(Json(AppointmentView::new(updated, &state.catalog)))
}
