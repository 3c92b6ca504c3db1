use tracing::info;

use crate::domain::models::appointment::{Appointment, AppointmentStatus};
use crate::domain::ports::AppointmentRepository;
use crate::domain::services::selection::SelectionTracker;
use crate::error::AppError;

/// Stores the drafted appointment, then clears the draft.
///
/// The draft survives a failed store so the customer can retry.
pub async fn confirm_booking(
    tracker: &mut SelectionTracker,
    repo: &dyn AppointmentRepository,
    customer_name: &str,
    customer_phone: &str,
) -> Result<Appointment, AppError> {
    let appointment = tracker.prepare(customer_name, customer_phone)?;
    let created = repo.create(&appointment).await?;
    tracker.reset();

    info!(
        appointment_id = %created.id,
        professional_id = %created.professional_id,
        date = %created.date,
        time = %created.time,
        "Appointment booked"
    );
    Ok(created)
}

pub async fn change_status(
    repo: &dyn AppointmentRepository,
    id: &str,
    next: AppointmentStatus,
) -> Result<Appointment, AppError> {
    let mut appointment = repo.find_by_id(id).await?
        .ok_or(AppError::NotFound("Appointment not found".into()))?;

    appointment.status = appointment.status.transition_to(next)?;
    let updated = repo.update(&appointment).await?;

    info!(appointment_id = %updated.id, status = %updated.status, "Appointment status changed");
    Ok(updated)
}
