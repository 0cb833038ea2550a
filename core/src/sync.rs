//! Sync-log client.
//!
//! # Design
//! This module owns no transport configuration at all: the pre-authenticated
//! [`Transport`] arrives as a call parameter and the request URL is relative,
//! left for the collaborator to resolve against its own base. Unlike the
//! product client there is no diagnostic logging and no normalization —
//! responses come back verbatim and failures propagate unmodified.

use crate::error::{check_status, ApiError};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{SyncLogPage, SyncLogQuery};

pub fn build_list_sync_logs(query: &SyncLogQuery) -> HttpRequest {
    HttpRequest {
        url: format!("/sync-logs/?skip={}&limit={}", query.skip, query.limit),
        headers: Vec::new(),
    }
}

pub fn parse_list_sync_logs(response: HttpResponse) -> Result<SyncLogPage, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Fetch one page of sync run logs through the supplied transport.
pub fn list_sync_logs(
    transport: &impl Transport,
    query: &SyncLogQuery,
) -> Result<SyncLogPage, ApiError> {
    let request = build_list_sync_logs(query);
    let response = transport.get(&request)?;
    parse_list_sync_logs(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_uses_relative_url_with_defaults() {
        let req = build_list_sync_logs(&SyncLogQuery::default());
        assert_eq!(req.url, "/sync-logs/?skip=0&limit=50");
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_serializes_explicit_paging() {
        let req = build_list_sync_logs(&SyncLogQuery { skip: 100, limit: 25 });
        assert_eq!(req.url, "/sync-logs/?skip=100&limit=25");
    }

    #[test]
    fn parse_returns_page_verbatim() {
        let response = HttpResponse {
            status: 200,
            body: r#"{"logs":[{"id":3,"run_at":"2024-02-01T03:00:00Z",
                "total_synced":1200,"new_products":40,"updated_products":1100,
                "inactive_products":60,"status":"partial",
                "error_message":"upstream timeout on page 9"}],
                "total":87,"skip":0,"limit":50}"#
                .to_string(),
        };
        let page = parse_list_sync_logs(response).unwrap();
        assert_eq!(page.total, 87);
        assert_eq!(page.logs.len(), 1);
        assert_eq!(page.logs[0].status, "partial");
        assert_eq!(
            page.logs[0].error_message.as_deref(),
            Some("upstream timeout on page 9")
        );
    }

    #[test]
    fn parse_does_not_default_missing_fields() {
        let response = HttpResponse {
            status: 200,
            body: "{}".to_string(),
        };
        let err = parse_list_sync_logs(response).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn non_2xx_propagates_as_http_error() {
        let response = HttpResponse {
            status: 403,
            body: r#"{"detail":"Manager or admin role required"}"#.to_string(),
        };
        let err = parse_list_sync_logs(response).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 403, .. }));
    }
}
