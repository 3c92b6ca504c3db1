use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::responses::WeekResponse;
use crate::domain::services::calendar::week_view;
use crate::state::AppState;
use std::sync::Arc;

pub async fn list_professionals(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.professionals().to_vec())
}

pub async fn list_services(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.services().to_vec())
}

pub async fn get_week(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let today = state.clock.today();
    let selected = state.tracker.lock().await.draft().date;

    Json(WeekResponse {
        today,
        selected,
        days: week_view(today, selected),
    })
}
