pub mod appointment;
pub mod catalog;
pub mod draft;
pub mod professional;
pub mod service;
