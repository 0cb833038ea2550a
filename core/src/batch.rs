//! Maps sync run logs into display-oriented batch records.
//!
//! # Design
//! Pure, total, order-preserving: one [`BatchRecord`] per input log, no I/O,
//! no error handling of its own. Timestamps the backend emits without an
//! offset are interpreted as UTC; an unparseable `run_at` degrades to epoch
//! millisecond `0` in the id and the raw string as `ts` rather than failing
//! the whole mapping.

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

use crate::types::SyncLogRecord;

/// Display status of a sync run.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum BatchStatus {
    Completed,
    Failed,
    Partial,
    Unknown,
}

impl BatchStatus {
    /// Case-insensitive mapping from the backend's status strings; anything
    /// unrecognized becomes `Unknown`.
    fn from_backend(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "success" => Self::Completed,
            "failed" => Self::Failed,
            "partial" => Self::Partial,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Completed => "Completed",
            Self::Failed => "Failed",
            Self::Partial => "Partial",
            Self::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

/// Per-run row counters surfaced in the UI.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BatchResults {
    pub inserted: i64,
    pub updated: i64,
    pub skipped: i64,
    /// Always zero: the sync log carries no validation counter. Incomplete
    /// backend integration, kept as a constant rather than invented here.
    pub validated: i64,
}

/// A sync run log transformed for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BatchRecord {
    /// `BATCH-{log id}-{epoch milliseconds of run_at}`.
    pub id: String,
    pub rows: i64,
    pub results: BatchResults,
    /// Share of inactive rows in percent, rounded to one decimal place.
    pub error_rate: f64,
    pub status: BatchStatus,
    /// `run_at` rendered as `YYYY-MM-DD HH:MM:SS` in the local time zone.
    pub ts: String,
}

/// Transform sync logs into batch records, preserving order.
pub fn to_batches(logs: &[SyncLogRecord]) -> Vec<BatchRecord> {
    logs.iter().map(to_batch).collect()
}

fn to_batch(log: &SyncLogRecord) -> BatchRecord {
    let run_at = parse_run_at(&log.run_at);
    let error_rate = if log.total_synced > 0 {
        round_to_tenth(log.inactive_products as f64 / log.total_synced as f64 * 100.0)
    } else {
        0.0
    };
    BatchRecord {
        id: format!(
            "BATCH-{}-{}",
            log.id,
            run_at.map(|t| t.timestamp_millis()).unwrap_or(0)
        ),
        rows: log.total_synced,
        results: BatchResults {
            inserted: log.new_products,
            updated: log.updated_products,
            skipped: log.inactive_products,
            validated: 0,
        },
        error_rate,
        status: BatchStatus::from_backend(&log.status),
        ts: run_at
            .map(|t| {
                t.with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
            })
            .unwrap_or_else(|| log.run_at.clone()),
    }
}

/// RFC 3339 first; the backend also emits naive datetimes without an offset,
/// which are taken as UTC.
fn parse_run_at(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Some(t.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|t| Utc.from_utc_datetime(&t))
}

/// Round half away from zero on the scaled value, so `33.33..` becomes `33.3`
/// and `0.05` becomes `0.1`.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(id: i64, total: i64, inactive: i64, status: &str) -> SyncLogRecord {
        SyncLogRecord {
            id,
            run_at: "2024-01-15T10:00:00Z".to_string(),
            total_synced: total,
            new_products: 80,
            updated_products: 15,
            inactive_products: inactive,
            status: status.to_string(),
            error_message: None,
        }
    }

    #[test]
    fn maps_successful_run() {
        let batches = to_batches(&[log(1, 100, 5, "Success")]);
        assert_eq!(batches.len(), 1);
        let batch = &batches[0];
        assert_eq!(batch.id, "BATCH-1-1705312800000");
        assert_eq!(batch.rows, 100);
        assert_eq!(batch.status, BatchStatus::Completed);
        assert_eq!(batch.error_rate, 5.0);
        assert_eq!(batch.results.inserted, 80);
        assert_eq!(batch.results.updated, 15);
        assert_eq!(batch.results.skipped, 5);
        assert_eq!(batch.results.validated, 0);
    }

    #[test]
    fn empty_input_maps_to_empty_output() {
        assert!(to_batches(&[]).is_empty());
    }

    #[test]
    fn preserves_input_order() {
        let batches = to_batches(&[log(3, 10, 0, "failed"), log(1, 10, 0, "partial")]);
        assert!(batches[0].id.starts_with("BATCH-3-"));
        assert!(batches[1].id.starts_with("BATCH-1-"));
        assert_eq!(batches[0].status, BatchStatus::Failed);
        assert_eq!(batches[1].status, BatchStatus::Partial);
    }

    #[test]
    fn status_mapping_is_case_insensitive() {
        assert_eq!(to_batches(&[log(1, 1, 0, "SUCCESS")])[0].status, BatchStatus::Completed);
        assert_eq!(to_batches(&[log(1, 1, 0, "Failed")])[0].status, BatchStatus::Failed);
        assert_eq!(to_batches(&[log(1, 1, 0, "pArTiAl")])[0].status, BatchStatus::Partial);
    }

    #[test]
    fn unknown_status_maps_to_unknown() {
        let batch = &to_batches(&[log(1, 1, 0, "retrying")])[0];
        assert_eq!(batch.status, BatchStatus::Unknown);
        assert_eq!(batch.status.to_string(), "Unknown");
    }

    #[test]
    fn error_rate_rounds_to_one_decimal() {
        assert_eq!(to_batches(&[log(1, 3, 1, "success")])[0].error_rate, 33.3);
        assert_eq!(to_batches(&[log(1, 3, 2, "success")])[0].error_rate, 66.7);
    }

    #[test]
    fn zero_total_synced_yields_zero_error_rate() {
        assert_eq!(to_batches(&[log(1, 0, 0, "failed")])[0].error_rate, 0.0);
    }

    #[test]
    fn ts_has_fixed_local_format() {
        let ts = &to_batches(&[log(1, 1, 0, "success")])[0].ts;
        // Local-time rendering, so assert shape rather than exact instant.
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }

    #[test]
    fn naive_run_at_is_taken_as_utc() {
        let mut record = log(2, 1, 0, "success");
        record.run_at = "2024-01-15T10:00:00".to_string();
        let batch = &to_batches(&[record])[0];
        assert_eq!(batch.id, "BATCH-2-1705312800000");
    }

    #[test]
    fn unparseable_run_at_degrades_without_failing() {
        let mut record = log(9, 1, 0, "success");
        record.run_at = "yesterday-ish".to_string();
        let batch = &to_batches(&[record])[0];
        assert_eq!(batch.id, "BATCH-9-0");
        assert_eq!(batch.ts, "yesterday-ish");
    }
}
