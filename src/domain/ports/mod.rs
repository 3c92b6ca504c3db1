use crate::domain::models::{
    appointment::Appointment, professional::Professional, service::Service,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn create(&self, appointment: &Appointment) -> Result<Appointment, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, AppError>;
    async fn list(&self) -> Result<Vec<Appointment>, AppError>;
    async fn list_by_professional_and_date(&self, professional_id: &str, date: NaiveDate) -> Result<Vec<Appointment>, AppError>;
    async fn update(&self, appointment: &Appointment) -> Result<Appointment, AppError>;
}

/// Supplies the static shop data. Collections come back in a stable order.
pub trait FixtureProvider: Send + Sync {
    fn professionals(&self) -> Vec<Professional>;
    fn services(&self) -> Vec<Service>;
    fn time_slots(&self) -> Vec<String>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
    fn today(&self) -> NaiveDate;
}

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}
