use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Appointment {
    pub id: String,
    pub student_id: String,
    pub professor_id: String,
    pub student_name: String,
    pub professor_name: String,
    pub subject: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: AppointmentStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Approved,
    Rejected,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Approved => "approved",
            AppointmentStatus::Rejected => "rejected",
        }
    }

    /// Badge colour the dashboard shows next to the status.
    pub fn tone(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "yellow",
            AppointmentStatus::Approved => "green",
            AppointmentStatus::Rejected => "red",
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self != AppointmentStatus::Pending
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a professor can do with a pending request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn status(&self) -> AppointmentStatus {
        match self {
            Decision::Approve => AppointmentStatus::Approved,
            Decision::Reject => AppointmentStatus::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_are_lowercase() {
        assert_eq!(AppointmentStatus::Pending.to_string(), "pending");
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::Approved).unwrap(),
            "\"approved\""
        );
        let status: AppointmentStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(status, AppointmentStatus::Rejected);
    }

    #[test]
    fn only_pending_is_open() {
        assert!(!AppointmentStatus::Pending.is_terminal());
        assert!(AppointmentStatus::Approved.is_terminal());
        assert!(AppointmentStatus::Rejected.is_terminal());
    }

    #[test]
    fn decisions_map_to_terminal_states() {
        assert_eq!(Decision::Approve.status(), AppointmentStatus::Approved);
        assert_eq!(Decision::Reject.status(), AppointmentStatus::Rejected);
    }
}
