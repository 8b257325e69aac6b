use serde::{Deserialize, Serialize};

use crate::{
    models::appointments::Appointment,
    store::Summary,
    utils::{format_date_str, format_time_str},
};

#[derive(Default, Serialize, Deserialize)]
pub struct IdentifyResponse {
    pub success: bool,
    pub err: String,
    pub reseeded: bool,
    pub count: usize,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointItem {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub professor_name: String,
    pub subject: String,
    pub date: String,
    pub time: String,
    pub status: String,
    pub tone: String,
}

impl From<&Appointment> for AppointItem {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id.clone(),
            student_id: appointment.student_id.clone(),
            student_name: appointment.student_name.clone(),
            professor_name: appointment.professor_name.clone(),
            subject: appointment.subject.clone(),
            date: format_date_str(&appointment.date),
            time: format_time_str(&appointment.time),
            status: appointment.status.to_string(),
            tone: appointment.status.tone().to_string(),
        }
    }
}

#[derive(Default, Serialize, Deserialize)]
pub struct ViewDashboardResponse {
    pub success: bool,
    pub err: String,
    pub subject: String,
    pub subject_assigned: bool,
    pub message: String,
    pub summary: Summary,
    pub pending: Vec<AppointItem>,
    pub appointments: Vec<AppointItem>,
}

#[derive(Default, Serialize, Deserialize)]
pub struct SearchAppointResponse {
    pub success: bool,
    pub err: String,
    pub appointments: Vec<AppointItem>,
}

#[derive(Default, Serialize, Deserialize)]
pub struct DecideAppointResponse {
    pub success: bool,
    pub err: String,
    pub applied: bool,
}

crate::impl_err_response! {
    IdentifyResponse,
    ViewDashboardResponse,
    SearchAppointResponse,
    DecideAppointResponse,
}
