use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::infra::clock::SystemClock;
use crate::infra::memory::{
    MemoryDoctorStatusRepository, MemoryDonationRequestRepository, MemoryProfileRepository,
    MemoryStore,
};

/// Shared application state passed to every handler via axum `State`.
///
/// Each `AppState` owns its own store, so separate instances never observe
/// each other's records.
#[derive(Clone)]
pub struct AppState {
    pub store: MemoryStore,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: MemoryStore::new(),
            clock,
        }
    }

    pub fn with_system_clock() -> Self {
        Self::new(Arc::new(SystemClock))
    }

    pub fn profile_repo(&self) -> MemoryProfileRepository {
        MemoryProfileRepository {
            store: self.store.clone(),
        }
    }

    pub fn donation_request_repo(&self) -> MemoryDonationRequestRepository {
        MemoryDonationRequestRepository {
            store: self.store.clone(),
        }
    }

    pub fn doctor_status_repo(&self) -> MemoryDoctorStatusRepository {
        MemoryDoctorStatusRepository {
            store: self.store.clone(),
        }
    }
}
