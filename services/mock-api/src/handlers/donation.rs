use axum::{
    Json,
    extract::{Path, RawQuery, State},
};
use serde::{Deserialize, Serialize};

use crate::domain::types::DonationRequest;
use crate::error::MockApiError;
use crate::handlers::extract::{ValidJson, parse_query};
use crate::handlers::{Data, Success};
use crate::state::AppState;
use crate::usecase::donation::{
    CreateDonationRequestInput, CreateDonationRequestUseCase, ListDonationRequestsUseCase,
    UpdateDonationRequestUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateDonationRequestBody {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub fulfilled: bool,
}

#[derive(Deserialize)]
pub struct UpdateDonationRequestBody {
    pub fulfilled: bool,
}

#[derive(Deserialize, Default)]
pub struct DonationListQuery {
    pub user_id: Option<String>,
}

#[derive(Serialize)]
pub struct DonationRequestResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub amount: f64,
    #[serde(serialize_with = "tailmate_core::serde::to_rfc3339_us")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub fulfilled: bool,
}

impl From<DonationRequest> for DonationRequestResponse {
    fn from(d: DonationRequest) -> Self {
        Self {
            id: d.id,
            user_id: d.user_id,
            title: d.title,
            description: d.description,
            amount: d.amount,
            created_at: d.created_at,
            fulfilled: d.fulfilled,
        }
    }
}

// ── POST /donation_requests ──────────────────────────────────────────────────

pub async fn create_donation_request(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<CreateDonationRequestBody>,
) -> Result<Json<Success<DonationRequestResponse>>, MockApiError> {
    let usecase = CreateDonationRequestUseCase {
        repo: state.donation_request_repo(),
        clock: state.clock.clone(),
    };
    let donation = usecase
        .execute(CreateDonationRequestInput {
            id: body.id,
            user_id: body.user_id,
            title: body.title,
            description: body.description,
            amount: body.amount,
            fulfilled: body.fulfilled,
        })
        .await?;
    Ok(Json(Success::new(donation.into())))
}

// ── GET /donation_requests ───────────────────────────────────────────────────

pub async fn list_donation_requests(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Data<Vec<DonationRequestResponse>>>, MockApiError> {
    let query: DonationListQuery = parse_query(raw_query.as_deref())?;
    let usecase = ListDonationRequestsUseCase {
        repo: state.donation_request_repo(),
    };
    let donations = usecase.execute(query.user_id.as_deref()).await?;
    Ok(Json(Data {
        data: donations.into_iter().map(Into::into).collect(),
    }))
}

// ── PUT /donation_requests/{donation_id} ─────────────────────────────────────

pub async fn update_donation_request(
    State(state): State<AppState>,
    Path(donation_id): Path<String>,
    ValidJson(body): ValidJson<UpdateDonationRequestBody>,
) -> Result<Json<Success<DonationRequestResponse>>, MockApiError> {
    let usecase = UpdateDonationRequestUseCase {
        repo: state.donation_request_repo(),
    };
    let donation = usecase.execute(&donation_id, body.fulfilled).await?;
    Ok(Json(Success::new(donation.into())))
}
