//! # Extraction Module
//!
//! Per-layout extraction passes. Each pass is independent: a missing table
//! or an incompatible query yields an empty contribution from that pass and
//! never aborts the others. That tolerance is the contract of [`run_pass`],
//! not a side effect.

pub mod chromium;
pub mod firefox;

use tracing::debug;

use crate::record::HistoryRecord;

/// Run one extraction pass, recovering a failure into an empty contribution.
pub(crate) fn run_pass<F>(name: &str, pass: F) -> Vec<HistoryRecord>
where
    F: FnOnce() -> rusqlite::Result<Vec<HistoryRecord>>,
{
    match pass() {
        Ok(records) => {
            debug!("{name} pass extracted {} records", records.len());
            records
        }
        Err(err) => {
            debug!("{name} pass yielded no records: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::VisitRecord;

    #[test]
    fn recovers_failed_pass_into_empty_contribution() {
        let records = run_pass("failing", || {
            Err(rusqlite::Error::InvalidQuery)
        });
        assert!(records.is_empty());
    }

    #[test]
    fn passes_through_extracted_records() {
        let records = run_pass("ok", || {
            Ok(vec![HistoryRecord::Visit(VisitRecord {
                url: "https://example.com".to_string(),
                title: None,
                visit_count: None,
                last_visit: None,
                visit_time: None,
            })])
        });
        assert_eq!(records.len(), 1);
    }
}
