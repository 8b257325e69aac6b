use serde::{Deserialize, Serialize};

use crate::models::appointments::AppointmentStatus;

#[derive(Default, Serialize, Deserialize)]
pub struct ViewDashboardRequest {}

#[derive(Default, Serialize, Deserialize)]
pub struct SearchAppointRequest {
    pub status: Option<AppointmentStatus>,
}

#[derive(Default, Serialize, Deserialize)]
pub struct DecideAppointRequest {
    pub appointment_id: String,
}
