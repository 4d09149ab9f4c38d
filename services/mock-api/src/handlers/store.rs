use axum::{Json, extract::State};

use crate::error::MockApiError;
use crate::handlers::Ack;
use crate::state::AppState;
use crate::usecase::store::ClearStoreUseCase;

// ── POST /test/clear ─────────────────────────────────────────────────────────

pub async fn clear_store(State(state): State<AppState>) -> Result<Json<Ack>, MockApiError> {
    let usecase = ClearStoreUseCase {
        repo: state.store.clone(),
    };
    usecase.execute().await?;
    Ok(Json(Ack::success()))
}
