//! Sources of appointment requests for the store.

use crate::{
    models::{
        appointments::{Appointment, AppointmentStatus},
        identities::Identity,
    },
    utils::{parse_date_str, parse_time_str},
};

/// Supplies the appointment requests addressed to a professor.
pub trait AppointmentProvider: Send + Sync {
    fn appointments_for(&self, identity: &Identity) -> anyhow::Result<Vec<Appointment>>;
}

/// Fixed requests used until a real scheduling backend is wired in.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockProvider;

// (id, student id, student name, date, time)
const MOCK_REQUESTS: &[(&str, &str, &str, &str, &str)] = &[
    ("1", "1", "John Student", "2024-12-20", "10:00"),
    ("2", "4", "Jane Student", "2024-12-21", "14:00"),
];

impl AppointmentProvider for MockProvider {
    fn appointments_for(&self, identity: &Identity) -> anyhow::Result<Vec<Appointment>> {
        let subject = match identity.subject() {
            Some(subject) => subject,
            None => return Ok(Vec::new()),
        };

        MOCK_REQUESTS
            .iter()
            .map(|&(id, student_id, student_name, date, time)| -> anyhow::Result<Appointment> {
                Ok(Appointment {
                    id: id.to_string(),
                    student_id: student_id.to_string(),
                    professor_id: identity.professor_id().to_string(),
                    student_name: student_name.to_string(),
                    professor_name: identity.professor_name().to_string(),
                    subject: subject.to_string(),
                    date: parse_date_str(date)?,
                    time: parse_time_str(time)?,
                    status: AppointmentStatus::Pending,
                })
            })
            .collect()
    }
}
