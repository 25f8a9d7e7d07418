//! Forensic browser history exporter. Snapshots a Chromium or Firefox
//! history database, classifies its layout, and exports normalized visit and
//! download records as a fixed-shape table.

pub mod artifact;
pub mod cli;
pub mod export;
pub mod extract;
pub mod logging;
pub mod pipeline;
pub mod record;
pub mod schema;
pub mod snapshot;
pub mod timestamp;
