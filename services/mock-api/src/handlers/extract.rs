use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::error::MockApiError;

/// JSON body extractor that rejects with [`MockApiError::InvalidBody`].
///
/// Deserialization into the typed request record is the body's only schema
/// check; the handler never sees a request that failed it.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = MockApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(MockApiError::InvalidBody(rejection.body_text())),
        }
    }
}

/// Parse an optional raw query string into `T`, defaulting when absent.
pub fn parse_query<T>(raw_query: Option<&str>) -> Result<T, MockApiError>
where
    T: DeserializeOwned + Default,
{
    raw_query
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|e| MockApiError::InvalidQuery(e.to_string()))
        .map(Option::unwrap_or_default)
}
