pub mod csv;
pub mod jsonl;

use std::path::Path;

use thiserror::Error;

use crate::record::HistoryRecord;

/// Output backend for the exported record table.
#[derive(Debug, Clone, Copy)]
pub enum ExportBackendKind {
    Csv,
    Jsonl,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Sink for the final record sequence. Implementations write a header (where
/// the format has one) on construction, then one row per record.
pub trait RecordWriter {
    fn write_record(&mut self, record: &HistoryRecord) -> Result<(), ExportError>;
    fn flush(&mut self) -> Result<(), ExportError>;
}

pub fn build_writer(
    backend: ExportBackendKind,
    path: &Path,
) -> Result<Box<dyn RecordWriter>, ExportError> {
    match backend {
        ExportBackendKind::Csv => Ok(Box::new(csv::CsvExporter::create(path)?)),
        ExportBackendKind::Jsonl => Ok(Box::new(jsonl::JsonlExporter::create(path)?)),
    }
}

/// Write the complete, already-materialized sequence and flush. An empty
/// sequence produces a header-only file.
pub fn export_records(
    mut writer: Box<dyn RecordWriter>,
    records: &[HistoryRecord],
) -> Result<usize, ExportError> {
    for record in records {
        writer.write_record(record)?;
    }
    writer.flush()?;
    Ok(records.len())
}
