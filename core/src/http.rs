//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP exchanges as plain data. The core crate builds
//! `HttpRequest` values and parses `HttpResponse` values without ever owning
//! a connection — the actual round-trip goes through the [`Transport`] trait,
//! implemented by the caller. This keeps the core deterministic and easy to
//! test, and keeps authentication entirely outside this crate: a transport
//! arrives already configured and already authenticated.
//!
//! Every catalog operation is a GET, so requests carry no method and no body.

use thiserror::Error;

/// An HTTP GET request described as plain data.
///
/// `url` is absolute for the product endpoints (the client owns the base URL)
/// and relative for the sync-log endpoint, where the transport is expected to
/// resolve it against its own configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data, constructed by the transport
/// after executing an [`HttpRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes GET requests on behalf of the core.
///
/// Implementations own all transport concerns this crate deliberately does
/// not: connection setup, timeouts, auth headers, and resolution of relative
/// request URLs against a base. Non-2xx responses must be returned as data,
/// not as errors — status interpretation belongs to the core.
pub trait Transport {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// A request that failed before any response was obtained.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(pub String);
