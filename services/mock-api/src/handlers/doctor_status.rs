use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::domain::types::DoctorStatus;
use crate::error::MockApiError;
use crate::handlers::extract::ValidJson;
use crate::handlers::{Data, Success};
use crate::state::AppState;
use crate::usecase::doctor_status::{
    CreateDoctorStatusInput, CreateDoctorStatusUseCase, GetDoctorStatusUseCase,
};

#[derive(Deserialize)]
pub struct DoctorStatusRequest {
    pub doctor_id: String,
    pub is_online: bool,
    pub phone_number: String,
}

#[derive(Serialize)]
pub struct DoctorStatusResponse {
    pub doctor_id: String,
    pub is_online: bool,
    pub phone_number: String,
    #[serde(serialize_with = "tailmate_core::serde::to_rfc3339_us")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<DoctorStatus> for DoctorStatusResponse {
    fn from(s: DoctorStatus) -> Self {
        Self {
            doctor_id: s.doctor_id,
            is_online: s.is_online,
            phone_number: s.phone_number,
            created_at: s.created_at,
        }
    }
}

// ── POST /doctor_status ──────────────────────────────────────────────────────

pub async fn create_doctor_status(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<DoctorStatusRequest>,
) -> Result<Json<Success<DoctorStatusResponse>>, MockApiError> {
    let usecase = CreateDoctorStatusUseCase {
        repo: state.doctor_status_repo(),
        clock: state.clock.clone(),
    };
    let status = usecase
        .execute(CreateDoctorStatusInput {
            doctor_id: body.doctor_id,
            is_online: body.is_online,
            phone_number: body.phone_number,
        })
        .await?;
    Ok(Json(Success::new(status.into())))
}

// ── GET /doctor_status/{doctor_id} ───────────────────────────────────────────

pub async fn get_doctor_status(
    State(state): State<AppState>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Data<DoctorStatusResponse>>, MockApiError> {
    let usecase = GetDoctorStatusUseCase {
        repo: state.doctor_status_repo(),
    };
    let status = usecase.execute(&doctor_id).await?;
    Ok(Json(Data {
        data: status.into(),
    }))
}
