//! In-memory appointment requests for the professor currently on the dashboard.
//!
//! The collection is only ever replaced as a whole: seeding swaps in a fresh
//! set from the provider, and a transition swaps in a mapped copy.

pub mod error;
pub mod provider;

use std::collections::HashSet;

use anyhow::bail;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::{
    appointments::{Appointment, AppointmentStatus, Decision},
    identities::Identity,
};

use self::{error::StoreError, provider::AppointmentProvider};

/// Whether a decision may overwrite a request that is no longer pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPolicy {
    Lenient,
    Strict,
}

impl Default for TransitionPolicy {
    fn default() -> Self {
        TransitionPolicy::Lenient
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionOutcome {
    Applied,
    NotFound,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl Summary {
    pub fn of(appointments: &[&Appointment]) -> Self {
        let count = |status: AppointmentStatus| {
            appointments
                .iter()
                .filter(|appointment| appointment.status == status)
                .count()
        };
        Self {
            total: appointments.len(),
            pending: count(AppointmentStatus::Pending),
            approved: count(AppointmentStatus::Approved),
            rejected: count(AppointmentStatus::Rejected),
        }
    }
}

/// Builds the collection for `identity`. Without an assigned subject the
/// provider is not consulted and the collection is empty.
pub fn seed(
    identity: &Identity,
    provider: &dyn AppointmentProvider,
) -> anyhow::Result<Vec<Appointment>> {
    if identity.subject().is_none() {
        return Ok(Vec::new());
    }

    let appointments = provider.appointments_for(identity)?;
    let mut ids = HashSet::new();
    for appointment in &appointments {
        if !ids.insert(appointment.id.as_str()) {
            bail!("Duplicate appointment id '{}'", appointment.id);
        }
    }

    Ok(appointments)
}

/// Returns a copy of `appointments` where the request `appointment_id` carries
/// the status of `decision`. An unknown id yields an unchanged copy.
pub fn transition(
    appointments: &[Appointment],
    appointment_id: &str,
    decision: Decision,
) -> Vec<Appointment> {
    appointments
        .iter()
        .map(|appointment| {
            if appointment.id == appointment_id {
                Appointment {
                    status: decision.status(),
                    ..appointment.clone()
                }
            } else {
                appointment.clone()
            }
        })
        .collect()
}

pub fn filter_by_subject_and_professor<'a, I>(
    appointments: I,
    subject: &str,
    professor_id: &str,
) -> Vec<&'a Appointment>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    appointments
        .into_iter()
        .filter(|appointment| {
            appointment.subject == subject && appointment.professor_id == professor_id
        })
        .collect()
}

pub fn filter_by_status<'a, I>(appointments: I, status: AppointmentStatus) -> Vec<&'a Appointment>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    appointments
        .into_iter()
        .filter(|appointment| appointment.status == status)
        .collect()
}

#[derive(Debug, Default)]
pub struct AppointmentStore {
    identity: Identity,
    appointments: Vec<Appointment>,
    policy: TransitionPolicy,
}

impl AppointmentStore {
    pub fn new(policy: TransitionPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Reseeds when `identity` differs from the current one. Returns whether
    /// the collection was replaced.
    pub fn on_identity_change(
        &mut self,
        identity: Identity,
        provider: &dyn AppointmentProvider,
    ) -> anyhow::Result<bool> {
        if identity == self.identity {
            return Ok(false);
        }

        self.appointments = seed(&identity, provider)?;
        info!(
            professor_id = ?identity.id(),
            subject = ?identity.subject(),
            count = self.appointments.len(),
            "seeded appointments"
        );
        self.identity = identity;
        Ok(true)
    }

    /// Applies `decision` to a request the current professor can see. Requests
    /// outside `visible()` are treated like unknown ids.
    pub fn decide(
        &mut self,
        appointment_id: &str,
        decision: Decision,
    ) -> Result<TransitionOutcome, StoreError> {
        let current = match self.visible().into_iter().find(|a| a.id == appointment_id) {
            Some(appointment) => appointment.status,
            None => {
                warn!(appointment_id, to = %decision.status(), "no such appointment for professor");
                return Ok(TransitionOutcome::NotFound);
            }
        };

        if self.policy == TransitionPolicy::Strict && current.is_terminal() {
            warn!(appointment_id, from = %current, to = %decision.status(), "rejected transition");
            return Err(StoreError::InvalidTransition {
                id: appointment_id.to_string(),
                from: current,
                to: decision.status(),
            });
        }

        self.appointments = transition(&self.appointments, appointment_id, decision);
        info!(appointment_id, from = %current, to = %decision.status(), "appointment decided");
        Ok(TransitionOutcome::Applied)
    }

    /// Requests the current professor may see: their subject, their id.
    pub fn visible(&self) -> Vec<&Appointment> {
        match (self.identity.subject(), self.identity.id()) {
            (Some(subject), Some(professor_id)) => {
                filter_by_subject_and_professor(&self.appointments, subject, professor_id)
            }
            _ => Vec::new(),
        }
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.visible())
    }
}
