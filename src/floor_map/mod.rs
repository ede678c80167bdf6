//! Grundriss-Karte: Etagen mit Säulen, Parkflächen, Bodenschwellen und Straßen.
//!
//! Die Koordinaten im Dokument sind bereits lokal projiziert; es findet keine
//! geodätische Umrechnung statt.

pub mod parser;

pub use parser::parse_floor_map;

use crate::core::{Floor, FloorKey, MapError, ParkingSpace, Pillar, Road, SpeedBump};
use crate::partition::PartitionStore;
use crate::shared::MapOptions;
use glam::DVec3;
use indexmap::IndexMap;
use std::path::Path;

/// Quelle eines Grundriss-Dokuments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadType {
    /// Argument ist ein Dateipfad
    File,
    /// Argument ist der JSON-Text selbst
    Data,
}

/// Geladene Grundriss-Karte, nach der Konstruktion unveränderlich.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorMap {
    /// Etagen in Dokument-Reihenfolge
    floors: IndexMap<FloorKey, Floor>,
    start: DVec3,
    end: DVec3,
    target_id: i64,
}

impl FloorMap {
    /// Lädt eine Karte aus Datei (`LoadType::File`) oder JSON-Text (`LoadType::Data`).
    pub fn load(input: &str, load_type: LoadType) -> Result<Self, MapError> {
        match load_type {
            LoadType::File => Self::from_file(input),
            LoadType::Data => Self::from_json_str(input),
        }
    }

    /// Lädt eine Karte aus einer JSON-Datei.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::from_json_str(&content)?;
        log::info!("Grundriss geladen aus: {}", path.display());
        Ok(map)
    }

    /// Lädt eine Karte aus einem JSON-String.
    pub fn from_json_str(json: &str) -> Result<Self, MapError> {
        let map = parse_floor_map(json)?;
        log::info!(
            "Grundriss: {} Etagen, Ziel-Parkflaeche {}",
            map.floors.len(),
            map.target_id
        );
        Ok(map)
    }

    /// Lädt den in der Partitionszeile eingebetteten Grundriss (`render_data`).
    pub fn from_partition(
        db_path: impl AsRef<Path>,
        partition_id: i64,
        options: &MapOptions,
    ) -> Result<Self, MapError> {
        let store = PartitionStore::open(db_path.as_ref(), &options.table_name)?;
        let json = store.render_data(partition_id)?;
        drop(store);
        Self::from_json_str(&json)
    }

    /// Etagenwerte in Dokument-Reihenfolge (nur Anzeige).
    pub fn floor_names(&self) -> Vec<f64> {
        self.floors.values().map(|floor| floor.name).collect()
    }

    /// Kanonische Etagen-Schlüssel in Dokument-Reihenfolge.
    pub fn floor_keys(&self) -> Vec<FloorKey> {
        self.floors.keys().copied().collect()
    }

    /// Alle Etagen in Dokument-Reihenfolge.
    pub fn floors(&self) -> impl Iterator<Item = &Floor> {
        self.floors.values()
    }

    /// Anzahl der Etagen
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Etage zum Etagenwert `floor` (z.B. `-1.0`).
    pub fn floor(&self, floor: f64) -> Result<&Floor, MapError> {
        self.floor_by_key(FloorKey::from_value(floor))
    }

    /// Etage zum kanonischen Schlüssel.
    pub fn floor_by_key(&self, key: FloorKey) -> Result<&Floor, MapError> {
        self.floors
            .get(&key)
            .ok_or_else(|| MapError::KeyNotFound(format!("Etage {key}")))
    }

    pub fn pillars(&self, floor: f64) -> Result<&[Pillar], MapError> {
        Ok(&self.floor(floor)?.pillars)
    }

    pub fn parking_spaces(&self, floor: f64) -> Result<&[ParkingSpace], MapError> {
        Ok(&self.floor(floor)?.parking_spaces)
    }

    pub fn speed_bumps(&self, floor: f64) -> Result<&[SpeedBump], MapError> {
        Ok(&self.floor(floor)?.speed_bumps)
    }

    pub fn roads(&self, floor: f64) -> Result<&[Road], MapError> {
        Ok(&self.floor(floor)?.roads)
    }

    /// Id der Ziel-Parkfläche
    pub fn target_id(&self) -> i64 {
        self.target_id
    }

    /// Startpunkt der Lernfahrt
    pub fn start_point(&self) -> DVec3 {
        self.start
    }

    /// Endpunkt der Lernfahrt
    pub fn end_point(&self) -> DVec3 {
        self.end
    }
}
