use axum::{extract::{Query, State}, response::IntoResponse, Json};
use crate::api::dtos::{requests::SlotsQuery, responses::SlotsResponse};
use crate::domain::services::availability::{booked_times, filter_slots};
use crate::error::AppError;
use crate::state::AppState;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::Arc;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))
}

/// Configured blocked times plus, when a professional is known, the times
/// their scheduled appointments already hold on that date.
pub(crate) async fn blocked_for(
    state: &AppState,
    professional_id: Option<&str>,
    date: NaiveDate,
) -> Result<HashSet<String>, AppError> {
    let mut blocked = (*state.blocked_times).clone();
    if let Some(professional_id) = professional_id {
        let appointments = state.appointment_repo.list_by_professional_and_date(professional_id, date).await?;
        blocked.extend(booked_times(&appointments));
    }
    Ok(blocked)
}

pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (draft_date, draft_professional) = {
        let tracker = state.tracker.lock().await;
        let draft = tracker.draft();
        (draft.date, draft.professional.as_ref().map(|p| p.id.clone()))
    };

    let date = match query.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => draft_date,
    };
    let professional_id = query.professional_id.or(draft_professional);

    if let Some(ref id) = professional_id
        && state.catalog.find_professional(id).is_none() {
        return Err(AppError::NotFound("Professional not found".into()));
    }

    let blocked = blocked_for(&state, professional_id.as_deref(), date).await?;
    let slots = filter_slots(state.catalog.time_slots(), &blocked);

    Ok(Json(SlotsResponse {
        date: date.format("%Y-%m-%d").to_string(),
        professional_id,
        slots,
    }))
}
