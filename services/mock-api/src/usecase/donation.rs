use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::repository::DonationRequestRepository;
use crate::domain::types::DonationRequest;
use crate::error::MockApiError;

// ── CreateDonationRequest ────────────────────────────────────────────────────

pub struct CreateDonationRequestInput {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub amount: f64,
    pub fulfilled: bool,
}

pub struct CreateDonationRequestUseCase<R: DonationRequestRepository> {
    pub repo: R,
    pub clock: Arc<dyn Clock>,
}

impl<R: DonationRequestRepository> CreateDonationRequestUseCase<R> {
    pub async fn execute(
        &self,
        input: CreateDonationRequestInput,
    ) -> Result<DonationRequest, MockApiError> {
        let donation = DonationRequest {
            id: input.id,
            user_id: input.user_id,
            title: input.title,
            description: input.description,
            amount: input.amount,
            created_at: self.clock.now(),
            fulfilled: input.fulfilled,
        };
        self.repo.upsert(&donation).await?;
        Ok(donation)
    }
}

// ── ListDonationRequests ─────────────────────────────────────────────────────

pub struct ListDonationRequestsUseCase<R: DonationRequestRepository> {
    pub repo: R,
}

impl<R: DonationRequestRepository> ListDonationRequestsUseCase<R> {
    /// An empty `user_id` is treated the same as no filter.
    pub async fn execute(
        &self,
        user_id: Option<&str>,
    ) -> Result<Vec<DonationRequest>, MockApiError> {
        let user_id = user_id.filter(|u| !u.is_empty());
        self.repo.list(user_id).await
    }
}

// ── UpdateDonationRequest ────────────────────────────────────────────────────

pub struct UpdateDonationRequestUseCase<R: DonationRequestRepository> {
    pub repo: R,
}

impl<R: DonationRequestRepository> UpdateDonationRequestUseCase<R> {
    pub async fn execute(
        &self,
        donation_id: &str,
        fulfilled: bool,
    ) -> Result<DonationRequest, MockApiError> {
        self.repo
            .set_fulfilled(donation_id, fulfilled)
            .await?
            .ok_or(MockApiError::DonationRequestNotFound)
    }
}
