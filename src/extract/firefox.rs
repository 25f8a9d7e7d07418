use rusqlite::Connection;
use serde::Deserialize;

use crate::extract::run_pass;
use crate::record::{DownloadRecord, HistoryRecord, VisitRecord};
use crate::timestamp::unix_micros_to_utc;

/// Annotation naming the destination file URI of a download.
const DEST_URI_ANNO: &str = "downloads/destinationFileURI";
/// Annotation carrying the JSON metadata blob of a download.
const METADATA_ANNO: &str = "downloads/metaData";

/// Extract visit and download records from a Firefox-family database.
///
/// Three passes run in a fixed order (history, legacy downloads, annotation
/// downloads) and their outputs are concatenated without deduplication. Each
/// pass tolerates its own failure; older profiles carry `moz_downloads`,
/// newer ones store downloads as annotation pairs, and many carry neither.
pub fn extract(conn: &Connection) -> Vec<HistoryRecord> {
    let mut records = run_pass("firefox history", || history_pass(conn));
    records.extend(run_pass("firefox legacy downloads", || {
        legacy_downloads_pass(conn)
    }));
    records.extend(run_pass("firefox annotation downloads", || {
        annotation_downloads_pass(conn)
    }));
    records
}

fn history_pass(conn: &Connection) -> rusqlite::Result<Vec<HistoryRecord>> {
    let mut stmt = conn.prepare(
        "SELECT moz_places.url, moz_places.title, moz_places.visit_count, \
                moz_places.last_visit_date, moz_historyvisits.visit_date \
         FROM moz_historyvisits JOIN moz_places ON moz_historyvisits.place_id = moz_places.id \
         ORDER BY moz_historyvisits.visit_date DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(VisitRecord {
            url: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
            title: row.get(1)?,
            visit_count: row.get(2)?,
            last_visit: unix_micros_to_utc(row.get(3)?),
            visit_time: unix_micros_to_utc(row.get(4)?),
        })
    })?;
    rows.map(|row| row.map(HistoryRecord::Visit)).collect()
}

fn legacy_downloads_pass(conn: &Connection) -> rusqlite::Result<Vec<HistoryRecord>> {
    let mut stmt =
        conn.prepare("SELECT source, target, startTime, totalBytes FROM moz_downloads")?;
    let rows = stmt.query_map([], |row| {
        Ok(DownloadRecord {
            url: row.get(0)?,
            path: row.get(1)?,
            start_time: unix_micros_to_utc(row.get(2)?),
            size_bytes: row.get(3)?,
            referrer: None,
        })
    })?;
    rows.map(|row| row.map(HistoryRecord::Download)).collect()
}

/// Download metadata blob stored under `downloads/metaData`. Unknown fields
/// are ignored; missing fields default so a sparse blob still yields a row.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DownloadMetadata {
    file_size: Option<i64>,
    start_time: Option<i64>,
}

fn annotation_downloads_pass(conn: &Connection) -> rusqlite::Result<Vec<HistoryRecord>> {
    let mut stmt = conn.prepare(
        "SELECT moz_places.url, dest.content, meta.content \
         FROM moz_annos AS dest \
         JOIN moz_anno_attributes AS dest_attr ON dest.anno_attribute_id = dest_attr.id \
         JOIN moz_places ON dest.place_id = moz_places.id \
         LEFT JOIN moz_anno_attributes AS meta_attr ON meta_attr.name = ?2 \
         LEFT JOIN moz_annos AS meta \
                ON meta.place_id = dest.place_id AND meta.anno_attribute_id = meta_attr.id \
         WHERE dest_attr.name = ?1",
    )?;
    let rows = stmt.query_map([DEST_URI_ANNO, METADATA_ANNO], |row| {
        let url: Option<String> = row.get(0)?;
        let dest_uri: Option<String> = row.get(1)?;
        let blob: Option<String> = row.get(2)?;
        let metadata = parse_metadata(blob.as_deref());
        Ok(DownloadRecord {
            url,
            path: dest_uri.map(strip_file_uri),
            size_bytes: metadata.file_size,
            start_time: unix_micros_to_utc(metadata.start_time),
            referrer: None,
        })
    })?;
    rows.map(|row| row.map(HistoryRecord::Download)).collect()
}

/// A malformed or absent blob degrades to defaults; the row is still emitted.
fn parse_metadata(blob: Option<&str>) -> DownloadMetadata {
    blob.and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or_default()
}

fn strip_file_uri(uri: String) -> String {
    match uri.strip_prefix("file://") {
        Some(path) => path.to_string(),
        None => uri,
    }
}
