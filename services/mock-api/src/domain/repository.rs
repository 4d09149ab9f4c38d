#![allow(async_fn_in_trait)]

use crate::domain::types::{DoctorStatus, DonationRequest, Profile};
use crate::error::MockApiError;

/// Repository for user profiles.
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Profile>, MockApiError>;

    /// Insert or overwrite the profile stored under `profile.id`.
    async fn upsert(&self, profile: &Profile) -> Result<(), MockApiError>;

    /// Overwrite the profile stored under `id`. Returns `false` (and writes
    /// nothing) if no profile is stored there.
    async fn replace(&self, id: &str, profile: &Profile) -> Result<bool, MockApiError>;
}

/// Repository for donation requests.
pub trait DonationRequestRepository: Send + Sync {
    /// Insert or overwrite the request stored under `donation.id`.
    async fn upsert(&self, donation: &DonationRequest) -> Result<(), MockApiError>;

    /// All requests, restricted to `user_id` when given.
    async fn list(&self, user_id: Option<&str>) -> Result<Vec<DonationRequest>, MockApiError>;

    /// Set only the `fulfilled` flag. Returns the patched record, or `None` if absent.
    async fn set_fulfilled(
        &self,
        id: &str,
        fulfilled: bool,
    ) -> Result<Option<DonationRequest>, MockApiError>;
}

/// Repository for doctor availability.
pub trait DoctorStatusRepository: Send + Sync {
    async fn find_by_id(&self, doctor_id: &str) -> Result<Option<DoctorStatus>, MockApiError>;

    /// Insert or overwrite the status stored under `status.doctor_id`.
    async fn upsert(&self, status: &DoctorStatus) -> Result<(), MockApiError>;
}

/// Whole-store maintenance.
pub trait StoreRepository: Send + Sync {
    /// Empty every table. Returns the number of records removed.
    async fn clear(&self) -> Result<usize, MockApiError>;
}
