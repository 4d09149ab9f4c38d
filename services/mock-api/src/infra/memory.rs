use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;
use serde_json::Value;

use crate::domain::repository::{
    DoctorStatusRepository, DonationRequestRepository, ProfileRepository, StoreRepository,
};
use crate::domain::types::{DoctorStatus, DonationRequest, Profile, Table};
use crate::error::MockApiError;

#[derive(Debug, Default)]
struct Tables {
    profiles: BTreeMap<String, Profile>,
    donation_requests: BTreeMap<String, DonationRequest>,
    doctor_status: BTreeMap<String, DoctorStatus>,
    posts: BTreeMap<String, Value>,
    comments: BTreeMap<String, Value>,
    notifications: BTreeMap<String, Value>,
}

impl Tables {
    fn len(&self, table: Table) -> usize {
        match table {
            Table::Profiles => self.profiles.len(),
            Table::DonationRequests => self.donation_requests.len(),
            Table::DoctorStatus => self.doctor_status.len(),
            Table::Posts => self.posts.len(),
            Table::Comments => self.comments.len(),
            Table::Notifications => self.notifications.len(),
        }
    }

    fn reserved_mut(&mut self, table: Table) -> Option<&mut BTreeMap<String, Value>> {
        match table {
            Table::Posts => Some(&mut self.posts),
            Table::Comments => Some(&mut self.comments),
            Table::Notifications => Some(&mut self.notifications),
            Table::Profiles | Table::DonationRequests | Table::DoctorStatus => None,
        }
    }
}

/// Process-local store of every table. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, MockApiError> {
        self.tables
            .read()
            .map_err(|_| anyhow!("store lock poisoned").into())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, MockApiError> {
        self.tables
            .write()
            .map_err(|_| anyhow!("store lock poisoned").into())
    }

    /// Number of records currently held in `table`.
    pub fn len(&self, table: Table) -> Result<usize, MockApiError> {
        Ok(self.read()?.len(table))
    }

    /// Store an opaque record in one of the reserved tables.
    ///
    /// No route writes to posts, comments or notifications, so this is how
    /// integration fixtures populate them before exercising clear. Returns
    /// `false` if `table` is not a reserved table.
    pub fn seed_reserved(
        &self,
        table: Table,
        id: impl Into<String>,
        value: Value,
    ) -> Result<bool, MockApiError> {
        let mut tables = self.write()?;
        match tables.reserved_mut(table) {
            Some(map) => {
                map.insert(id.into(), value);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// `false` once a writer panicked while holding the lock.
    pub fn is_healthy(&self) -> bool {
        !self.tables.is_poisoned()
    }
}

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MemoryProfileRepository {
    pub store: MemoryStore,
}

impl ProfileRepository for MemoryProfileRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Profile>, MockApiError> {
        Ok(self.store.read()?.profiles.get(id).cloned())
    }

    async fn upsert(&self, profile: &Profile) -> Result<(), MockApiError> {
        self.store
            .write()?
            .profiles
            .insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    async fn replace(&self, id: &str, profile: &Profile) -> Result<bool, MockApiError> {
        let mut tables = self.store.write()?;
        match tables.profiles.get_mut(id) {
            Some(slot) => {
                *slot = profile.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ── Donation request repository ──────────────────────────────────────────────

#[derive(Clone)]
pub struct MemoryDonationRequestRepository {
    pub store: MemoryStore,
}

impl DonationRequestRepository for MemoryDonationRequestRepository {
    async fn upsert(&self, donation: &DonationRequest) -> Result<(), MockApiError> {
        self.store
            .write()?
            .donation_requests
            .insert(donation.id.clone(), donation.clone());
        Ok(())
    }

    async fn list(&self, user_id: Option<&str>) -> Result<Vec<DonationRequest>, MockApiError> {
        let tables = self.store.read()?;
        Ok(tables
            .donation_requests
            .values()
            .filter(|d| user_id.is_none_or(|u| d.user_id == u))
            .cloned()
            .collect())
    }

    async fn set_fulfilled(
        &self,
        id: &str,
        fulfilled: bool,
    ) -> Result<Option<DonationRequest>, MockApiError> {
        let mut tables = self.store.write()?;
        Ok(tables.donation_requests.get_mut(id).map(|d| {
            d.fulfilled = fulfilled;
            d.clone()
        }))
    }
}

// ── Doctor status repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct MemoryDoctorStatusRepository {
    pub store: MemoryStore,
}

impl DoctorStatusRepository for MemoryDoctorStatusRepository {
    async fn find_by_id(&self, doctor_id: &str) -> Result<Option<DoctorStatus>, MockApiError> {
        Ok(self.store.read()?.doctor_status.get(doctor_id).cloned())
    }

    async fn upsert(&self, status: &DoctorStatus) -> Result<(), MockApiError> {
        self.store
            .write()?
            .doctor_status
            .insert(status.doctor_id.clone(), status.clone());
        Ok(())
    }
}

// ── Store maintenance ────────────────────────────────────────────────────────

impl StoreRepository for MemoryStore {
    async fn clear(&self) -> Result<usize, MockApiError> {
        let mut tables = self.write()?;
        let removed = Table::ALL.iter().map(|t| tables.len(*t)).sum();
        *tables = Tables::default();
        Ok(removed)
    }
}
