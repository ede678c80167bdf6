//! Lesender Zugriff auf die Partitions-Tabelle (SQLite).

use super::TileKind;
use crate::core::MapError;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use std::path::Path;

/// Koordinaten-Spalten einer Partitionszeile, roh als Text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointColumns {
    /// `"lon,lat,alt"` des Referenzpunkts (WGS84)
    pub ref_point: String,
    /// `"a,b,id"`, die Ziel-Id steht an dritter Stelle
    pub target_prk_id: String,
    /// `"lon,lat,alt"` des Fahrtziels
    pub trace_dest: String,
}

impl PointColumns {
    const COLUMNS: &'static str = "ref_point, target_prk_id, trace_dest";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Option<Self>> {
        let ref_point: Option<String> = row.get(0)?;
        let target_prk_id: Option<String> = row.get(1)?;
        let trace_dest: Option<String> = row.get(2)?;
        Ok(match (ref_point, target_prk_id, trace_dest) {
            (Some(ref_point), Some(target_prk_id), Some(trace_dest)) => Some(Self {
                ref_point,
                target_prk_id,
                trace_dest,
            }),
            _ => None,
        })
    }
}

/// Read-only-Verbindung auf eine Partitions-Datenbank.
///
/// Lebt nur für die Dauer einer Konstruktion und wird danach verworfen.
#[derive(Debug)]
pub struct PartitionStore {
    conn: Connection,
    table: String,
}

impl PartitionStore {
    /// Öffnet die Datenbank schreibgeschützt.
    ///
    /// `table` muss ein einfacher SQL-Bezeichner sein (`[A-Za-z_][A-Za-z0-9_]*`),
    /// da er in die Abfrage eingesetzt wird.
    pub fn open(path: &Path, table: &str) -> Result<Self, MapError> {
        if !is_valid_identifier(table) {
            return Err(MapError::InvalidTableName(table.to_string()));
        }

        let open_failed = |source: rusqlite::Error| MapError::DatabaseOpen {
            path: path.to_path_buf(),
            source,
        };
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(open_failed)?;

        // SQLite liest den Header erst bei der ersten Abfrage
        conn.query_row("PRAGMA schema_version", [], |row| row.get::<_, i64>(0))
            .map_err(open_failed)?;

        log::debug!("Partitions-Datenbank geoeffnet: {}", path.display());
        Ok(Self {
            conn,
            table: table.to_string(),
        })
    }

    /// Liest `ref_point`, `target_prk_id` und `trace_dest` in einer Abfrage.
    pub fn point_columns(&self, partition_id: i64) -> Result<PointColumns, MapError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE partition_id = ?1",
            PointColumns::COLUMNS,
            self.table
        );
        self.conn
            .query_row(&sql, params![partition_id], PointColumns::from_row)
            .optional()
            .map_err(|e| MapError::query(format!("Koordinaten von Partition {partition_id}"), e))?
            .ok_or_else(|| self.missing(partition_id, PointColumns::COLUMNS))?
            .ok_or_else(|| {
                MapError::no_data(format!(
                    "Partition {partition_id}: Koordinaten-Spalte ist NULL"
                ))
            })
    }

    /// Liest den Tile-Blob der gewählten Art.
    pub fn tile_blob(&self, partition_id: i64, kind: TileKind) -> Result<Vec<u8>, MapError> {
        self.column::<Vec<u8>>(partition_id, kind.blob_column())
    }

    /// Liest den eingebetteten Grundriss (`render_data`).
    pub fn render_data(&self, partition_id: i64) -> Result<String, MapError> {
        self.column::<String>(partition_id, "render_data")
    }

    fn column<T: rusqlite::types::FromSql>(
        &self,
        partition_id: i64,
        column: &str,
    ) -> Result<T, MapError> {
        let sql = format!(
            "SELECT {column} FROM {} WHERE partition_id = ?1",
            self.table
        );
        let value: Option<T> = self
            .conn
            .query_row(&sql, params![partition_id], |row| row.get(0))
            .optional()
            .map_err(|e| MapError::query(format!("{column} von Partition {partition_id}"), e))?
            .ok_or_else(|| self.missing(partition_id, column))?;

        value.ok_or_else(|| {
            MapError::no_data(format!("Partition {partition_id}: Spalte {column} ist NULL"))
        })
    }

    fn missing(&self, partition_id: i64, columns: &str) -> MapError {
        MapError::no_data(format!(
            "Keine Daten fuer partition_id {partition_id} in {} ({columns})",
            self.table
        ))
    }
}

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use std::path::PathBuf;

    fn create_db(dir: &Path) -> PathBuf {
        let path = dir.join("partitions.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE LPNP_table (
                partition_id INTEGER PRIMARY KEY,
                ref_point TEXT, target_prk_id TEXT, trace_dest TEXT,
                render_data TEXT, blob_data BLOB, road_mark BLOB
            );
            INSERT INTO LPNP_table VALUES
                (1, '121.47,31.23,10', '0,0,77', '121.471,31.231,10', '{}', x'0a00', x'1a00'),
                (2, NULL, '0,0,1', '1,2,3', NULL, NULL, NULL);",
        )
        .unwrap();
        path
    }

    #[test]
    fn test_identifier_validation() {
        assert!(is_valid_identifier("LPNP_table"));
        assert!(is_valid_identifier("_t2"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("2table"));
        assert!(!is_valid_identifier("LPNP_table; DROP TABLE x"));
        assert!(!is_valid_identifier("\"quoted\""));
    }

    #[test]
    fn test_invalid_table_name_is_rejected_before_open() {
        let err = PartitionStore::open(Path::new("/nicht/vorhanden.db"), "a b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Query);
        assert!(matches!(err, MapError::InvalidTableName(_)));
    }

    #[test]
    fn test_reads_columns_of_existing_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = PartitionStore::open(&create_db(dir.path()), "LPNP_table").unwrap();

        let cols = store.point_columns(1).unwrap();
        assert_eq!(cols.ref_point, "121.47,31.23,10");
        assert_eq!(cols.target_prk_id, "0,0,77");
        assert_eq!(store.render_data(1).unwrap(), "{}");
        assert_eq!(
            store.tile_blob(1, TileKind::Navigation).unwrap(),
            vec![0x0a, 0x00]
        );
        assert_eq!(
            store.tile_blob(1, TileKind::Localization).unwrap(),
            vec![0x1a, 0x00]
        );
    }

    #[test]
    fn test_missing_row_and_null_columns_are_query_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = PartitionStore::open(&create_db(dir.path()), "LPNP_table").unwrap();

        assert_eq!(store.point_columns(99).unwrap_err().kind(), ErrorKind::Query);
        assert_eq!(store.point_columns(2).unwrap_err().kind(), ErrorKind::Query);
        assert_eq!(store.render_data(2).unwrap_err().kind(), ErrorKind::Query);
        assert_eq!(
            store.tile_blob(2, TileKind::Navigation).unwrap_err().kind(),
            ErrorKind::Query
        );
    }

    #[test]
    fn test_unknown_table_is_query_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = PartitionStore::open(&create_db(dir.path()), "other_table").unwrap();
        assert_eq!(store.render_data(1).unwrap_err().kind(), ErrorKind::Query);
    }

    #[test]
    fn test_missing_database_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PartitionStore::open(&dir.path().join("fehlt.db"), "LPNP_table").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_non_database_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kaputt.db");
        std::fs::write(&path, "dies ist keine SQLite-Datenbank, nur Text.\n".repeat(20)).unwrap();

        let err = PartitionStore::open(&path, "LPNP_table").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(matches!(err, MapError::DatabaseOpen { .. }));
    }
}
