use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::clock::Clock;
use crate::domain::repository::ProfileRepository;
use crate::domain::types::Profile;
use crate::error::MockApiError;

/// Caller-controlled profile fields. Timestamps are always server-assigned.
#[derive(Debug, Clone)]
pub struct ProfileInput {
    pub id: String,
    pub username: String,
    pub usertype: String,
    pub locality: Option<String>,
    pub licensenumber: Option<String>,
    pub isverified: Option<bool>,
    pub phone: Option<String>,
}

impl ProfileInput {
    fn into_profile(self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Profile {
        Profile {
            id: self.id,
            username: self.username,
            usertype: self.usertype,
            locality: self.locality,
            licensenumber: self.licensenumber,
            isverified: self.isverified.unwrap_or(false),
            phone: self.phone,
            created_at,
            updated_at,
        }
    }
}

// ── CreateProfile ────────────────────────────────────────────────────────────

pub struct CreateProfileUseCase<R: ProfileRepository> {
    pub repo: R,
    pub clock: Arc<dyn Clock>,
}

impl<R: ProfileRepository> CreateProfileUseCase<R> {
    pub async fn execute(&self, input: ProfileInput) -> Result<Profile, MockApiError> {
        let now = self.clock.now();
        let profile = input.into_profile(now, now);
        self.repo.upsert(&profile).await?;
        Ok(profile)
    }
}

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> GetProfileUseCase<R> {
    pub async fn execute(&self, profile_id: &str) -> Result<Profile, MockApiError> {
        self.repo
            .find_by_id(profile_id)
            .await?
            .ok_or(MockApiError::ProfileNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileUseCase<R: ProfileRepository> {
    pub repo: R,
    pub clock: Arc<dyn Clock>,
}

impl<R: ProfileRepository> UpdateProfileUseCase<R> {
    /// Replace the whole profile stored under `profile_id`, keeping its
    /// original `created_at`.
    pub async fn execute(
        &self,
        profile_id: &str,
        input: ProfileInput,
    ) -> Result<Profile, MockApiError> {
        let existing = self
            .repo
            .find_by_id(profile_id)
            .await?
            .ok_or(MockApiError::ProfileNotFound)?;
        let profile = input.into_profile(existing.created_at, self.clock.now());
        if !self.repo.replace(profile_id, &profile).await? {
            // Cleared between the lookup and the write.
            return Err(MockApiError::ProfileNotFound);
        }
        Ok(profile)
    }
}
