use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::models::{appointment::Appointment, catalog::Catalog, draft::BookingDraft};
use crate::domain::services::{availability::TimeSlot, calendar::CalendarDay};

#[derive(Serialize)]
pub struct DraftResponse {
    #[serde(flatten)]
    pub draft: BookingDraft,
    pub ready: bool,
}

impl From<&BookingDraft> for DraftResponse {
    fn from(draft: &BookingDraft) -> Self {
        Self {
            draft: draft.clone(),
            ready: draft.is_ready(),
        }
    }
}

#[derive(Serialize)]
pub struct SlotsResponse {
    pub date: String,
    pub professional_id: Option<String>,
    pub slots: Vec<TimeSlot>,
}

#[derive(Serialize)]
pub struct WeekResponse {
    pub today: NaiveDate,
    pub selected: NaiveDate,
    pub days: Vec<CalendarDay>,
}

/// An appointment joined with the names shown in the listing.
#[derive(Serialize)]
pub struct AppointmentView {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub professional_name: Option<String>,
    pub service_name: Option<String>,
    pub price: Option<Decimal>,
}

impl AppointmentView {
    pub fn new(appointment: Appointment, catalog: &Catalog) -> Self {
        let professional = catalog.find_professional(&appointment.professional_id);
        let service = catalog.find_service(&appointment.service_id);
        Self {
            professional_name: professional.map(|p| p.name.clone()),
            service_name: service.map(|s| s.name.clone()),
            price: service.map(|s| s.price),
            appointment,
        }
    }
}
