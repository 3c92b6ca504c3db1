use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

use crate::domain::models::{
    appointment::{Appointment, NewAppointmentParams},
    draft::BookingDraft,
    professional::Professional,
    service::Service,
};
use crate::domain::ports::{Clock, IdGenerator};
use crate::error::BookingError;

/// Tracks the four draft fields of the active booking session.
///
/// Any field may change in any order; readiness is recomputed from the
/// current fields on every call. The tracker never checks a chosen time
/// against the blocked set, callers filter selectable slots themselves.
pub struct SelectionTracker {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    draft: BookingDraft,
}

impl SelectionTracker {
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        let draft = BookingDraft::new(clock.today());
        Self { clock, ids, draft }
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn select_professional(&mut self, professional: Professional) {
        debug!(professional_id = %professional.id, "professional selected");
        self.draft.professional = Some(professional);
    }

    pub fn select_service(&mut self, service: Service) {
        debug!(service_id = %service.id, "service selected");
        self.draft.service = Some(service);
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        debug!(%date, "date selected");
        self.draft.date = date;
    }

    pub fn select_time(&mut self, time: impl Into<String>) {
        let time = time.into();
        debug!(%time, "time selected");
        self.draft.time = Some(time);
    }

    pub fn is_ready(&self) -> bool {
        self.draft.is_ready()
    }

    pub fn open_confirmation(&mut self) -> Result<(), BookingError> {
        if !self.is_ready() {
            return Err(BookingError::IncompleteSelection);
        }
        self.draft.confirming = true;
        Ok(())
    }

    pub fn close_confirmation(&mut self) {
        self.draft.confirming = false;
    }

    /// Validates the draft and builds the appointment without touching the draft.
    pub fn prepare(&self, customer_name: &str, customer_phone: &str) -> Result<Appointment, BookingError> {
        if !self.is_ready() {
            return Err(BookingError::IncompleteSelection);
        }
        let (Some(professional), Some(service), Some(time)) = (
            self.draft.professional.as_ref(),
            self.draft.service.as_ref(),
            self.draft.time.as_ref(),
        ) else {
            return Err(BookingError::IncompleteSelection);
        };

        let name = customer_name.trim();
        let phone = customer_phone.trim();
        if name.is_empty() || phone.is_empty() {
            return Err(BookingError::InvalidCustomerInfo);
        }

        Ok(Appointment::new(NewAppointmentParams {
            id: self.ids.next_id(),
            professional_id: professional.id.clone(),
            service_id: service.id.clone(),
            date: self.draft.date,
            time: time.clone(),
            customer_name: name.to_string(),
            customer_phone: phone.to_string(),
            created_at: self.clock.now(),
        }))
    }

    pub fn submit(&mut self, customer_name: &str, customer_phone: &str) -> Result<Appointment, BookingError> {
        let appointment = self.prepare(customer_name, customer_phone)?;
        self.reset();
        Ok(appointment)
    }

    pub fn reset(&mut self) {
        self.draft = BookingDraft::new(self.clock.today());
    }
}
