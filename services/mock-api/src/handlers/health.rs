use axum::{extract::State, http::StatusCode};

use tailmate_core::health::readiness;

use crate::state::AppState;

/// Handler for `GET /readyz`. Ready while the store lock is usable.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    readiness(state.store.is_healthy())
}
