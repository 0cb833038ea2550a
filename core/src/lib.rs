//! Synchronous API client core for the product catalog backend.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern); thin executing wrappers
//! compose the two over an injected `Transport`. Three independent pieces:
//! the product query client, the sync-log client, and a pure mapper that
//! turns sync run logs into display-oriented batch records.
//!
//! # Design
//! - `CatalogClient` is stateless — it holds only `base_url`, resolved once
//!   from the environment or passed in explicitly.
//! - The sync-log client owns no transport configuration at all; the
//!   pre-authenticated transport is a call parameter.
//! - Responses normalize at the boundary: a product page deserializes to a
//!   fully populated record or fails with an explicit error, never a
//!   partially undefined value. Sync-log pages pass through verbatim.
//! - Failures are logged once with structured context, then propagated
//!   unchanged. No retries, no timeouts, no caching at this layer.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod batch;
pub mod client;
pub mod error;
pub mod http;
pub mod sync;
pub mod types;

pub use batch::{to_batches, BatchRecord, BatchResults, BatchStatus};
pub use client::CatalogClient;
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse, Transport, TransportError};
pub use sync::{build_list_sync_logs, list_sync_logs, parse_list_sync_logs};
pub use types::{
    Category, Image, Product, ProductPage, ProductQuery, Requirements, Restrictions, SyncLogPage,
    SyncLogQuery, SyncLogRecord, Video,
};
