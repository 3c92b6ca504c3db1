use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BookingError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// Only scheduled appointments move, and only to a terminal state.
    pub fn transition_to(self, next: AppointmentStatus) -> Result<AppointmentStatus, BookingError> {
        match (self, next) {
            (AppointmentStatus::Scheduled, AppointmentStatus::Completed)
            | (AppointmentStatus::Scheduled, AppointmentStatus::Cancelled) => Ok(next),
            (from, to) => Err(BookingError::InvalidStatusTransition { from, to }),
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub professional_id: String,
    pub service_id: String,
    pub date: NaiveDate,
    pub time: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

pub struct NewAppointmentParams {
    pub id: String,
    pub professional_id: String,
    pub service_id: String,
    pub date: NaiveDate,
    pub time: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn new(params: NewAppointmentParams) -> Self {
        Self {
            id: params.id,
            professional_id: params.professional_id,
            service_id: params.service_id,
            date: params.date,
            time: params.time,
            customer_name: params.customer_name,
            customer_phone: params.customer_phone,
            status: AppointmentStatus::Scheduled,
            created_at: params.created_at,
        }
    }
}
