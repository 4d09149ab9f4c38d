use tracing::info;

use crate::domain::repository::StoreRepository;
use crate::error::MockApiError;

// ── ClearStore ───────────────────────────────────────────────────────────────

pub struct ClearStoreUseCase<R: StoreRepository> {
    pub repo: R,
}

impl<R: StoreRepository> ClearStoreUseCase<R> {
    pub async fn execute(&self) -> Result<(), MockApiError> {
        let removed = self.repo.clear().await?;
        info!(removed, "store cleared");
        Ok(())
    }
}
