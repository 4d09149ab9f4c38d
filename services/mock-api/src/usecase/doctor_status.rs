use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::repository::DoctorStatusRepository;
use crate::domain::types::DoctorStatus;
use crate::error::MockApiError;

// ── CreateDoctorStatus ───────────────────────────────────────────────────────

pub struct CreateDoctorStatusInput {
    pub doctor_id: String,
    pub is_online: bool,
    pub phone_number: String,
}

pub struct CreateDoctorStatusUseCase<R: DoctorStatusRepository> {
    pub repo: R,
    pub clock: Arc<dyn Clock>,
}

impl<R: DoctorStatusRepository> CreateDoctorStatusUseCase<R> {
    pub async fn execute(
        &self,
        input: CreateDoctorStatusInput,
    ) -> Result<DoctorStatus, MockApiError> {
        let status = DoctorStatus {
            doctor_id: input.doctor_id,
            is_online: input.is_online,
            phone_number: input.phone_number,
            created_at: self.clock.now(),
        };
        self.repo.upsert(&status).await?;
        Ok(status)
    }
}

// ── GetDoctorStatus ──────────────────────────────────────────────────────────

pub struct GetDoctorStatusUseCase<R: DoctorStatusRepository> {
    pub repo: R,
}

impl<R: DoctorStatusRepository> GetDoctorStatusUseCase<R> {
    pub async fn execute(&self, doctor_id: &str) -> Result<DoctorStatus, MockApiError> {
        self.repo
            .find_by_id(doctor_id)
            .await?
            .ok_or(MockApiError::DoctorStatusNotFound)
    }
}
