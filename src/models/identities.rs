use serde::{Deserialize, Serialize};

pub const DEFAULT_PROFESSOR_ID: &str = "2";
pub const DEFAULT_PROFESSOR_NAME: &str = "Prof. Santos";

/// The professor currently using the dashboard, as reported by the identity
/// collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Option<String>,
    pub name: Option<String>,
    pub subject: Option<String>,
}

impl Identity {
    /// Assigned subject, treating an empty string as unassigned.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref().filter(|s| !s.is_empty())
    }

    /// Professor id as reported, treating an empty string as absent.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|s| !s.is_empty())
    }

    pub fn professor_id(&self) -> &str {
        self.id().unwrap_or(DEFAULT_PROFESSOR_ID)
    }

    pub fn professor_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_PROFESSOR_NAME)
    }
}
