use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Mock API domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum MockApiError {
    #[error("Profile not found")]
    ProfileNotFound,
    #[error("Donation request not found")]
    DonationRequestNotFound,
    #[error("Doctor status not found")]
    DoctorStatusNotFound,
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("invalid query string: {0}")]
    InvalidQuery(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl MockApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::DonationRequestNotFound => "DONATION_REQUEST_NOT_FOUND",
            Self::DoctorStatusNotFound => "DOCTOR_STATUS_NOT_FOUND",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidQuery(_) => "INVALID_QUERY",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for MockApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::ProfileNotFound | Self::DonationRequestNotFound | Self::DoctorStatusNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
