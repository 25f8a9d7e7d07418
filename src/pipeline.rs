//! # Pipeline Module
//!
//! Orchestrates one export run: snapshot acquisition, schema detection,
//! extraction, and export. Fully synchronous; the record sequence is
//! completely materialized before the exporter sees it. Resource release is
//! scoped: the database handle closes before the snapshot directory is
//! removed, on fatal early returns as well.

use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::artifact::ArtifactHandle;
use crate::cli::{CliOptions, ExportFormat};
use crate::export::{self, ExportBackendKind, ExportError};
use crate::extract::{chromium, firefox};
use crate::record::HistoryRecord;
use crate::schema::{BrowserKind, detect_browser};
use crate::snapshot::{self, Snapshot, SnapshotError};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("history database not found: {0}")]
    MissingArtifact(PathBuf),
    #[error("unknown or unsupported browser history database")]
    UnrecognizedSchema,
    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
    #[error("sqlite error: {0}")]
    Artifact(#[from] rusqlite::Error),
    #[error("export error: {0}")]
    Export(#[from] ExportError),
}

impl RunError {
    /// Fatal-but-expected conditions: reported as a diagnostic, not a
    /// process failure.
    pub fn is_reportable(&self) -> bool {
        matches!(
            self,
            RunError::MissingArtifact(_) | RunError::UnrecognizedSchema
        )
    }
}

#[derive(Debug)]
pub struct RunOutcome {
    pub browser: BrowserKind,
    pub records_exported: usize,
    pub output_path: PathBuf,
}

pub fn run(opts: &CliOptions) -> Result<RunOutcome, RunError> {
    if !opts.input.exists() {
        return Err(RunError::MissingArtifact(opts.input.clone()));
    }

    if opts.artifact_sha256 {
        let digest = snapshot::compute_sha256(&opts.input)?;
        info!("artifact sha256={digest}");
    }

    let run_id = snapshot::generate_run_id();
    let snapshot = Snapshot::acquire(&opts.input, &run_id)?;

    // Handle is declared after the snapshot so it drops first.
    let handle = ArtifactHandle::open(snapshot.path())?;
    let tables = handle.table_names()?;
    let browser = detect_browser(&tables);
    info!("detected {} database", browser.label());

    let records: Vec<HistoryRecord> = match browser {
        BrowserKind::Chromium => chromium::extract(handle.conn()),
        BrowserKind::Firefox => firefox::extract(handle.conn()),
        BrowserKind::Unknown => return Err(RunError::UnrecognizedSchema),
    };

    drop(handle);
    drop(snapshot);

    let backend = backend_from_cli(opts.format);
    let writer = export::build_writer(backend, &opts.output)?;
    let records_exported = export::export_records(writer, &records)?;

    Ok(RunOutcome {
        browser,
        records_exported,
        output_path: opts.output.clone(),
    })
}

fn backend_from_cli(format: ExportFormat) -> ExportBackendKind {
    match format {
        ExportFormat::Csv => ExportBackendKind::Csv,
        ExportFormat::Jsonl => ExportBackendKind::Jsonl,
    }
}
