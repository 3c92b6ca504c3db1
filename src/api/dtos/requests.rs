use serde::Deserialize;

use crate::domain::models::appointment::AppointmentStatus;

#[derive(Deserialize)]
pub struct SelectProfessionalRequest {
    pub professional_id: String,
}

#[derive(Deserialize)]
pub struct SelectServiceRequest {
    pub service_id: String,
}

#[derive(Deserialize)]
pub struct SelectDateRequest {
    pub date: String,
}

#[derive(Deserialize)]
pub struct SelectTimeRequest {
    pub time: String,
}

#[derive(Deserialize)]
pub struct SubmitBookingRequest {
    pub customer_name: String,
    pub customer_phone: String,
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: AppointmentStatus,
}

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: Option<String>,
    pub professional_id: Option<String>,
}
