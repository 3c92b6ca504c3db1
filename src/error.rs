use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::domain::models::appointment::AppointmentStatus;

/// Failures raised by the booking core itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Professional, service and time must be selected before booking")]
    IncompleteSelection,
    #[error("Customer name and phone are required")]
    InvalidCustomerInfo,
    #[error("Cannot change appointment status from {from} to {to}")]
    InvalidStatusTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Booking(e) => {
                let status = match e {
                    BookingError::InvalidCustomerInfo => StatusCode::BAD_REQUEST,
                    BookingError::IncompleteSelection
                    | BookingError::InvalidStatusTransition { .. } => StatusCode::CONFLICT,
                };
                (status, e.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Config(_) | AppError::Io(_) | AppError::Internal(_) => {
                error!("Internal error: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_errors_map_to_client_statuses() {
        let incomplete = AppError::from(BookingError::IncompleteSelection).into_response();
        assert_eq!(incomplete.status(), StatusCode::CONFLICT);

        let customer = AppError::from(BookingError::InvalidCustomerInfo).into_response();
        assert_eq!(customer.status(), StatusCode::BAD_REQUEST);

        let transition = AppError::from(BookingError::InvalidStatusTransition {
            from: AppointmentStatus::Cancelled,
            to: AppointmentStatus::Completed,
        })
        .into_response();
        assert_eq!(transition.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let res = AppError::Internal("lock poisoned".into()).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
