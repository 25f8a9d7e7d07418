use rusqlite::Connection;

use crate::extract::run_pass;
use crate::record::{DownloadRecord, HistoryRecord, VisitRecord};
use crate::timestamp::webkit_micros_to_utc;

/// Extract visit and download records from a Chromium-family database.
/// Both passes are attempted; each tolerates its own failure.
pub fn extract(conn: &Connection) -> Vec<HistoryRecord> {
    let mut records = run_pass("chromium history", || history_pass(conn));
    records.extend(run_pass("chromium downloads", || downloads_pass(conn)));
    records
}

fn history_pass(conn: &Connection) -> rusqlite::Result<Vec<HistoryRecord>> {
    let mut stmt = conn.prepare(
        "SELECT urls.url, urls.title, urls.visit_count, urls.last_visit_time, visits.visit_time \
         FROM visits JOIN urls ON visits.url = urls.id \
         ORDER BY visits.visit_time DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(VisitRecord {
            url: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
            title: row.get(1)?,
            visit_count: row.get(2)?,
            last_visit: webkit_micros_to_utc(row.get(3)?),
            visit_time: webkit_micros_to_utc(row.get(4)?),
        })
    })?;
    rows.map(|row| row.map(HistoryRecord::Visit)).collect()
}

fn downloads_pass(conn: &Connection) -> rusqlite::Result<Vec<HistoryRecord>> {
    let mut stmt = conn.prepare(
        "SELECT tab_url, tab_referrer_url, target_path, current_path, total_bytes, start_time \
         FROM downloads",
    )?;
    let rows = stmt.query_map([], |row| {
        let target: Option<String> = row.get(2)?;
        let current: Option<String> = row.get(3)?;
        Ok(DownloadRecord {
            url: row.get(0)?,
            referrer: row.get(1)?,
            // Completed downloads carry the final target path; fall back to
            // the in-progress path for interrupted ones.
            path: target.filter(|path| !path.is_empty()).or(current),
            size_bytes: row.get(4)?,
            start_time: webkit_micros_to_utc(row.get(5)?),
        })
    })?;
    rows.map(|row| row.map(HistoryRecord::Download)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn history_db(conn: &Connection) {
        conn.execute(
            "CREATE TABLE urls (id INTEGER PRIMARY KEY, url TEXT, title TEXT, \
             visit_count INTEGER, last_visit_time INTEGER)",
            [],
        )
        .expect("create urls");
        conn.execute(
            "CREATE TABLE visits (id INTEGER PRIMARY KEY, url INTEGER, visit_time INTEGER)",
            [],
        )
        .expect("create visits");
    }

    #[test]
    fn extracts_visits_ordered_most_recent_first() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("History");
        let conn = Connection::open(&path).expect("conn");
        history_db(&conn);
        conn.execute(
            "INSERT INTO urls (id, url, title, visit_count, last_visit_time) \
             VALUES (1, 'https://example.com', 'Example', 2, 13303449600000000)",
            [],
        )
        .expect("insert url");
        conn.execute(
            "INSERT INTO visits (url, visit_time) VALUES (1, 13303449500000000)",
            [],
        )
        .expect("insert older visit");
        conn.execute(
            "INSERT INTO visits (url, visit_time) VALUES (1, 13303449600000000)",
            [],
        )
        .expect("insert newer visit");

        let records = extract(&conn);
        assert_eq!(records.len(), 2);
        let times: Vec<String> = records
            .iter()
            .map(|record| match record {
                HistoryRecord::Visit(visit) => visit.visit_time.clone().expect("visit time"),
                HistoryRecord::Download(_) => panic!("unexpected download"),
            })
            .collect();
        assert_eq!(times[0], "7/28/2022  12:00:00 AM UTC");
        assert_eq!(times[1], "7/27/2022  11:58:20 PM UTC");
    }

    #[test]
    fn missing_downloads_table_yields_only_visits() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("History");
        let conn = Connection::open(&path).expect("conn");
        history_db(&conn);
        conn.execute(
            "INSERT INTO urls (id, url, title, visit_count, last_visit_time) \
             VALUES (1, 'https://example.com', 'Example', 1, 13303449600000000)",
            [],
        )
        .expect("insert url");
        conn.execute(
            "INSERT INTO visits (url, visit_time) VALUES (1, 13303449600000000)",
            [],
        )
        .expect("insert visit");

        let records = extract(&conn);
        assert_eq!(records.len(), 1);
        assert!(matches!(records[0], HistoryRecord::Visit(_)));
    }

    #[test]
    fn download_falls_back_to_current_path() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("History");
        let conn = Connection::open(&path).expect("conn");
        history_db(&conn);
        conn.execute(
            "CREATE TABLE downloads (id INTEGER PRIMARY KEY, current_path TEXT, \
             target_path TEXT, start_time INTEGER, total_bytes INTEGER, \
             tab_url TEXT, tab_referrer_url TEXT)",
            [],
        )
        .expect("create downloads");
        conn.execute(
            "INSERT INTO downloads (current_path, target_path, start_time, total_bytes, \
             tab_url, tab_referrer_url) \
             VALUES ('/tmp/partial.crdownload', '', 13303449600000000, 4096, \
             'https://example.com/file', 'https://example.com')",
            [],
        )
        .expect("insert download");

        let records = extract(&conn);
        let download = records
            .iter()
            .find_map(|record| match record {
                HistoryRecord::Download(download) => Some(download),
                HistoryRecord::Visit(_) => None,
            })
            .expect("download record");
        assert_eq!(download.path.as_deref(), Some("/tmp/partial.crdownload"));
        assert_eq!(download.size_bytes, Some(4096));
        assert_eq!(download.referrer.as_deref(), Some("https://example.com"));
        assert_eq!(
            download.start_time.as_deref(),
            Some("7/28/2022  12:00:00 AM UTC")
        );
    }
}
