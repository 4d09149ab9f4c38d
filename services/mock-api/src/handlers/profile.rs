use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::domain::types::Profile;
use crate::error::MockApiError;
use crate::handlers::extract::ValidJson;
use crate::handlers::{Data, Success};
use crate::state::AppState;
use crate::usecase::profile::{
    CreateProfileUseCase, GetProfileUseCase, ProfileInput, UpdateProfileUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

/// Profile body for both create and full-replace update. Any `created_at` /
/// `updated_at` sent by the caller is ignored.
#[derive(Deserialize)]
pub struct ProfileRequest {
    pub id: String,
    pub username: String,
    pub usertype: String,
    pub locality: Option<String>,
    pub licensenumber: Option<String>,
    pub isverified: Option<bool>,
    pub phone: Option<String>,
}

impl From<ProfileRequest> for ProfileInput {
    fn from(body: ProfileRequest) -> Self {
        Self {
            id: body.id,
            username: body.username,
            usertype: body.usertype,
            locality: body.locality,
            licensenumber: body.licensenumber,
            isverified: body.isverified,
            phone: body.phone,
        }
    }
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub usertype: String,
    pub locality: Option<String>,
    pub licensenumber: Option<String>,
    pub isverified: bool,
    pub phone: Option<String>,
    #[serde(serialize_with = "tailmate_core::serde::to_rfc3339_us")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "tailmate_core::serde::to_rfc3339_us")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            username: p.username,
            usertype: p.usertype,
            locality: p.locality,
            licensenumber: p.licensenumber,
            isverified: p.isverified,
            phone: p.phone,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

// ── POST /profiles ───────────────────────────────────────────────────────────

pub async fn create_profile(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<ProfileRequest>,
) -> Result<Json<Success<ProfileResponse>>, MockApiError> {
    let usecase = CreateProfileUseCase {
        repo: state.profile_repo(),
        clock: state.clock.clone(),
    };
    let profile = usecase.execute(body.into()).await?;
    Ok(Json(Success::new(profile.into())))
}

// ── GET /profiles/{profile_id} ───────────────────────────────────────────────

pub async fn get_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> Result<Json<Data<ProfileResponse>>, MockApiError> {
    let usecase = GetProfileUseCase {
        repo: state.profile_repo(),
    };
    let profile = usecase.execute(&profile_id).await?;
    Ok(Json(Data {
        data: profile.into(),
    }))
}

// ── PUT /profiles/{profile_id} ───────────────────────────────────────────────

pub async fn update_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
    ValidJson(body): ValidJson<ProfileRequest>,
) -> Result<Json<Success<ProfileResponse>>, MockApiError> {
    let usecase = UpdateProfileUseCase {
        repo: state.profile_repo(),
        clock: state.clock.clone(),
    };
    let profile = usecase.execute(&profile_id, body.into()).await?;
    Ok(Json(Success::new(profile.into())))
}
