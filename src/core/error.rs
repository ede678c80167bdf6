//! Fehlertypen der Map-Loader.

use std::path::PathBuf;

/// Grobe Fehlerklasse, unabhängig von der konkreten Ursache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// JSON oder Tile-Blob fehlerhaft, ungültige Werte
    Parse,
    /// Unbekannte Etage oder fehlender Pflicht-Schlüssel
    KeyNotFound,
    /// Datei oder Datenbank nicht lesbar
    Io,
    /// SQL-Fehler oder keine Daten für die Partition
    Query,
    /// Koordinaten-String mit zu wenigen oder ungültigen Werten
    MalformedPoint,
}

/// Fehler beim Laden oder Abfragen einer Karte.
///
/// Alle Varianten ausser [`MapError::KeyNotFound`] treten nur während der
/// Konstruktion auf; ein fertig geladenes Modell liefert sonst keine Fehler.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Parse-Fehler: {0}")]
    Parse(String),
    #[error("Schluessel nicht gefunden: {0}")]
    KeyNotFound(String),
    #[error("Datei '{}' konnte nicht gelesen werden", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Datenbank '{}' konnte nicht geoeffnet werden", .path.display())]
    DatabaseOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("SQL-Abfrage fehlgeschlagen: {message}")]
    Query {
        message: String,
        #[source]
        source: Option<rusqlite::Error>,
    },
    #[error("Ungueltiger Koordinaten-String '{input}': {expected} Zahlen erwartet, {found} gefunden")]
    MalformedPoint {
        input: String,
        expected: usize,
        found: usize,
    },
    #[error("Ungueltiger Wert '{token}' im Koordinaten-String '{input}'")]
    InvalidPointValue { input: String, token: String },
    #[error("Ungueltiger Tabellenname '{0}'")]
    InvalidTableName(String),
}

impl MapError {
    /// Ordnet den Fehler einer [`ErrorKind`] zu.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MapError::Parse(_) => ErrorKind::Parse,
            MapError::KeyNotFound(_) => ErrorKind::KeyNotFound,
            MapError::Io { .. } | MapError::DatabaseOpen { .. } => ErrorKind::Io,
            MapError::Query { .. } | MapError::InvalidTableName(_) => ErrorKind::Query,
            MapError::MalformedPoint { .. } | MapError::InvalidPointValue { .. } => {
                ErrorKind::MalformedPoint
            }
        }
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        MapError::Parse(message.into())
    }

    pub(crate) fn query(message: impl Into<String>, source: rusqlite::Error) -> Self {
        MapError::Query {
            message: message.into(),
            source: Some(source),
        }
    }

    pub(crate) fn no_data(message: impl Into<String>) -> Self {
        MapError::Query {
            message: message.into(),
            source: None,
        }
    }
}
