//! Request extractors that report rejections as [`ApiError`].
//!
//! axum's own `Json` and `Path` reject with plain-text 400/415/422
//! responses. These wrappers route every malformed body or id through the
//! JSON error format with status 422, the same as a failed field rule.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use notes_core::NoteId;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Note id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct NoteIdPath(pub NoteId);

impl<S> FromRequestParts<S> for NoteIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<NoteId>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}
