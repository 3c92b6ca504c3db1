pub mod memory_appointment_repo;
