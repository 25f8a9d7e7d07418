use std::collections::HashSet;
use std::path::Path;

use rusqlite::{Connection, OpenFlags};

/// Read-only connection to a snapshot copy of a history database.
///
/// Owned by exactly one run and dropped before the snapshot directory is
/// removed.
pub struct ArtifactHandle {
    conn: Connection,
}

impl ArtifactHandle {
    pub fn open(path: &Path) -> rusqlite::Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Names of all tables present in the artifact.
    pub fn table_names(&self) -> rusqlite::Result<HashSet<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        rows.collect()
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn enumerates_table_names() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("History");
        let conn = Connection::open(&path).expect("conn");
        conn.execute("CREATE TABLE urls (id INTEGER PRIMARY KEY, url TEXT)", [])
            .expect("create urls");
        conn.execute("CREATE TABLE visits (id INTEGER PRIMARY KEY)", [])
            .expect("create visits");
        drop(conn);

        let handle = ArtifactHandle::open(&path).expect("open");
        let tables = handle.table_names().expect("tables");
        assert!(tables.contains("urls"));
        assert!(tables.contains("visits"));
    }

    #[test]
    fn rejects_writes() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("History");
        let conn = Connection::open(&path).expect("conn");
        conn.execute("CREATE TABLE urls (id INTEGER PRIMARY KEY)", [])
            .expect("create");
        drop(conn);

        let handle = ArtifactHandle::open(&path).expect("open");
        let result = handle.conn().execute("INSERT INTO urls (id) VALUES (1)", []);
        assert!(result.is_err());
    }
}
