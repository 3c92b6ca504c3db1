use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bookable haircut or grooming service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub duration_min: u32,
    pub description: String,
}

impl Service {
    pub fn new(id: &str, name: &str, price: Decimal, duration_min: u32, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            duration_min,
            description: description.to_string(),
        }
    }
}
