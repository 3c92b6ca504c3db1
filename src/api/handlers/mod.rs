pub mod appointment;
pub mod catalog;
pub mod draft;
pub mod health;
pub mod slots;
