use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::{professional::Professional, service::Service};

/// The in-progress booking selection.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BookingDraft {
    pub professional: Option<Professional>,
    pub service: Option<Service>,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub confirming: bool,
}

impl BookingDraft {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            professional: None,
            service: None,
            date,
            time: None,
            confirming: false,
        }
    }

    // Date always has a value, so it never gates readiness.
    pub fn is_ready(&self) -> bool {
        self.professional.is_some()
            && self.service.is_some()
            && self.time.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}
