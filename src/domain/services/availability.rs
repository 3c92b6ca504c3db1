use serde::Serialize;
use std::collections::HashSet;

use crate::domain::models::appointment::{Appointment, AppointmentStatus};

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub time: String,
    pub available: bool,
}

/// Pairs every catalog slot, in catalog order, with whether it is selectable.
pub fn filter_slots(catalog: &[String], blocked: &HashSet<String>) -> Vec<TimeSlot> {
    catalog
        .iter()
        .map(|time| TimeSlot {
            time: time.clone(),
            available: !blocked.contains(time),
        })
        .collect()
}

/// Times still held by the given appointments. Completed and cancelled ones free their slot.
pub fn booked_times(appointments: &[Appointment]) -> HashSet<String> {
    appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Scheduled)
        .map(|a| a.time.clone())
        .collect()
}
