use rust_decimal::Decimal;

use crate::domain::models::{professional::Professional, service::Service};
use crate::domain::ports::FixtureProvider;
use crate::error::AppError;

/// Read-only shop data loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    professionals: Vec<Professional>,
    services: Vec<Service>,
    time_slots: Vec<String>,
}

impl Catalog {
    pub fn new(
        professionals: Vec<Professional>,
        services: Vec<Service>,
        time_slots: Vec<String>,
    ) -> Result<Self, AppError> {
        for p in &professionals {
            if !(0.0..=5.0).contains(&p.rating) {
                return Err(AppError::Validation(format!(
                    "Professional {} has rating {} outside 0-5", p.id, p.rating
                )));
            }
        }

        for s in &services {
            if s.price < Decimal::ZERO {
                return Err(AppError::Validation(format!("Service {} has a negative price", s.id)));
            }
            if s.duration_min == 0 {
                return Err(AppError::Validation(format!("Service {} has no duration", s.id)));
            }
        }

        Ok(Self { professionals, services, time_slots })
    }

    pub fn load(provider: &dyn FixtureProvider) -> Result<Self, AppError> {
        Self::new(provider.professionals(), provider.services(), provider.time_slots())
    }

    pub fn professionals(&self) -> &[Professional] {
        &self.professionals
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn time_slots(&self) -> &[String] {
        &self.time_slots
    }

    pub fn find_professional(&self, id: &str) -> Option<&Professional> {
        self.professionals.iter().find(|p| p.id == id)
    }

    pub fn find_service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn has_slot(&self, time: &str) -> bool {
        self.time_slots.iter().any(|t| t == time)
    }
}
