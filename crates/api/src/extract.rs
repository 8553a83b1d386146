//! Request extractors with the lenient parsing the people endpoints use.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use swapi_core::types::DbId;

use crate::error::AppError;
use crate::query::PaginationParams;

pub const INVALID_BODY_MESSAGE: &str = "Body is not valid JSON";

/// Identity taken from the `{id}` path segment.
///
/// A segment that is not an integer becomes `0`, which matches no row, so
/// lookups answer 404 rather than rejecting the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonId(pub DbId);

impl PersonId {
    pub fn parse(raw: &str) -> Self {
        PersonId(raw.parse().unwrap_or(0))
    }
}

impl<S> FromRequestParts<S> for PersonId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => PersonId::parse(&raw),
            Err(rejection) => {
                tracing::debug!(%rejection, "Unreadable id path segment");
                PersonId(0)
            }
        };
        Ok(id)
    }
}

/// Pagination parameters read from the query string.
///
/// Repeated keys keep their first value. A query string that does not
/// decode reads as empty, so the defaults apply.
#[derive(Debug, Default)]
pub struct Pagination(pub PaginationParams);

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
            Ok(Query(pairs)) => pairs,
            Err(rejection) => {
                tracing::debug!(%rejection, "Unreadable query string");
                Vec::new()
            }
        };
        Ok(Pagination(PaginationParams::from_pairs(pairs)))
    }
}

/// JSON request body decoded regardless of `Content-Type`.
///
/// Any failure to read or decode the body is reported as a 400 with
/// [`INVALID_BODY_MESSAGE`].
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::BadRequest(INVALID_BODY_MESSAGE.into()))?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|err| {
            tracing::debug!(error = %err, "Rejected request body");
            AppError::BadRequest(INVALID_BODY_MESSAGE.into())
        })
    }
}
