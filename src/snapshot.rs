//! # Snapshot Module
//!
//! Lock-free acquisition of a history database. The source file may be held
//! open (and locked) by a running browser, so every run works against a
//! private copy in a per-run temporary directory. The copy is removed when
//! the [`Snapshot`] drops, on fatal paths included.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tempfile::TempDir;
use thiserror::Error;
use tracing::debug;

/// Sidecar suffixes copied alongside the main database so a WAL-mode
/// artifact stays self-consistent.
const SIDECAR_SUFFIXES: [&str; 2] = ["-wal", "-shm"];

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Private copy of a source artifact, scoped to one run.
pub struct Snapshot {
    // Held for its Drop: removing the directory removes the copy.
    _dir: TempDir,
    path: PathBuf,
}

impl Snapshot {
    pub fn acquire(source: &Path, run_id: &str) -> Result<Self, SnapshotError> {
        let dir = tempfile::Builder::new().prefix("webhist_").tempdir()?;
        let file_name = format!("history_{run_id}.sqlite");
        let path = dir.path().join(&file_name);
        fs::copy(source, &path)?;

        for suffix in SIDECAR_SUFFIXES {
            let sidecar = sidecar_path(source, suffix);
            if sidecar.exists() {
                fs::copy(&sidecar, dir.path().join(format!("{file_name}{suffix}")))?;
                debug!("copied sidecar {}", sidecar.display());
            }
        }

        debug!("snapshot acquired at {}", path.display());
        Ok(Self { _dir: dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn sidecar_path(source: &Path, suffix: &str) -> PathBuf {
    let mut name = source.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    source.with_file_name(name)
}

/// Unique identifier for one run, used to name the snapshot copy.
pub fn generate_run_id() -> String {
    let now = chrono::Utc::now();
    format!("{}_{}", now.format("%Y%m%dT%H%M%SZ"), nano_suffix())
}

fn nano_suffix() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    format!("{nanos:08x}")
}

/// Streaming SHA-256 of a file, reported as lowercase hex.
pub fn compute_sha256(path: &Path) -> Result<String, SnapshotError> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; 1024 * 1024];
    loop {
        let read = file.read(&mut buf)?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}
