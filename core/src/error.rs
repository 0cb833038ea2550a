//! Error types for the catalog API client.
//!
//! # Design
//! Two failure families matter to callers: the backend answered with a
//! non-2xx status (`Http`, carrying everything needed to debug it), or the
//! request never completed (`Network`, wrapping the transport failure
//! unchanged). `Deserialization` covers the remaining boundary case of a
//! 2xx body that does not match the expected schema. There is no recovery
//! and no retry at this layer; every variant propagates to the caller.

use thiserror::Error;

use crate::http::{HttpResponse, TransportError};

/// Errors returned by the catalog and sync-log clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend responded with a non-2xx status.
    #[error("HTTP {status} {status_text}: {body}")]
    Http {
        status: u16,
        status_text: String,
        body: String,
    },

    /// The request failed before a response was obtained.
    #[error("network error: {0}")]
    Network(#[from] TransportError),

    /// A 2xx body could not be deserialized into the expected shape.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

/// Reject non-2xx responses, preserving status, reason phrase, and body text.
pub(crate) fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        status_text: reason_phrase(response.status).to_string(),
        body: response.body.clone(),
    })
}

/// Canonical reason phrase for a status code, empty when unassigned.
pub(crate) fn reason_phrase(status: u16) -> &'static str {
    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("")
}
