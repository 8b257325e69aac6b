use thiserror::Error;

use crate::models::appointments::AppointmentStatus;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Appointment '{id}' is already {from}, cannot mark it {to}")]
    InvalidTransition {
        id: String,
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
}
