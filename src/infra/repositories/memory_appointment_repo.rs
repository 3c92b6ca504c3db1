use crate::domain::{models::appointment::Appointment, ports::AppointmentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

/// Session-lifetime appointment store, in insertion order.
pub struct MemoryAppointmentRepo {
    appointments: RwLock<Vec<Appointment>>,
}

impl MemoryAppointmentRepo {
    pub fn new() -> Self {
        Self::with_appointments(Vec::new())
    }

    pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
        Self {
            appointments: RwLock::new(appointments),
        }
    }
}

impl Default for MemoryAppointmentRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppointmentRepository for MemoryAppointmentRepo {
    async fn create(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        let mut appointments = self.appointments.write().await;
        if appointments.iter().any(|a| a.id == appointment.id) {
            return Err(AppError::Conflict(format!("Appointment {} already exists", appointment.id)));
        }
        appointments.push(appointment.clone());
        Ok(appointment.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, AppError> {
        let appointments = self.appointments.read().await;
        Ok(appointments.iter().find(|a| a.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Appointment>, AppError> {
        Ok(self.appointments.read().await.clone())
    }

    async fn list_by_professional_and_date(&self, professional_id: &str, date: NaiveDate) -> Result<Vec<Appointment>, AppError> {
        let appointments = self.appointments.read().await;
        Ok(appointments
            .iter()
            .filter(|a| a.professional_id == professional_id && a.date == date)
            .cloned()
            .collect())
    }

    async fn update(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        let mut appointments = self.appointments.write().await;
        let existing = appointments
            .iter_mut()
            .find(|a| a.id == appointment.id)
            .ok_or(AppError::NotFound("Appointment not found".into()))?;
        *existing = appointment.clone();
        Ok(appointment.clone())
    }
}
