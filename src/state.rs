use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;

use crate::{
    models::identities::Identity,
    store::{provider::AppointmentProvider, AppointmentStore, TransitionPolicy},
};

/// Shared by every worker; the store is swapped under the write lock so a
/// reader sees either the old collection or the new one.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<AppointmentStore>>,
    provider: Arc<dyn AppointmentProvider>,
}

impl AppState {
    pub fn new(policy: TransitionPolicy, provider: Arc<dyn AppointmentProvider>) -> Self {
        Self {
            store: Arc::new(RwLock::new(AppointmentStore::new(policy))),
            provider,
        }
    }

    pub fn get_store(&self) -> anyhow::Result<RwLockReadGuard<'_, AppointmentStore>> {
        self.store.read().map_err(|_| anyhow!("Store lock poisoned"))
    }

    pub fn get_store_mut(&self) -> anyhow::Result<RwLockWriteGuard<'_, AppointmentStore>> {
        self.store.write().map_err(|_| anyhow!("Store lock poisoned"))
    }

    /// Identity-change event from the identity collaborator.
    pub fn identify(&self, identity: Identity) -> anyhow::Result<(bool, usize)> {
        let mut store = self.get_store_mut()?;
        let reseeded = store.on_identity_change(identity, self.provider.as_ref())?;
        Ok((reseeded, store.appointments().len()))
    }
}
