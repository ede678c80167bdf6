//! Partitions-Karte: Tile-Blob aus SQLite, projiziert in ein lokales ENU-System.
//!
//! Ablauf bei der Konstruktion:
//! 1. `ref_point` lesen, Länge/Breite nach GCJ02 korrigieren, Bezugssystem bilden
//! 2. `target_prk_id` und `trace_dest` lesen
//! 3. Tile-Blob der gewählten Art dekodieren
//! 4. alle Formpunkte einmalig projizieren

pub mod points;
pub mod store;
pub mod tile;

pub use points::{parse_point, parse_target_prk_id};
pub use store::{PartitionStore, PointColumns};
pub use tile::{decode_tile, project_tile, TileEntities};

use crate::core::{MapError, ParkingSpace, Poi, Road, RoadMark, RoadObstacle};
use crate::shared::MapOptions;
use glam::DVec3;
use lpnp_geodesy::{wgs84_to_gcj02, ReferenceFrame};
use std::path::Path;

/// Art des Tile-Blobs einer Partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileKind {
    /// Navigations-Tile (`blob_data`)
    #[default]
    Navigation,
    /// Lokalisierungs-Tile (`road_mark`)
    Localization,
}

impl TileKind {
    /// Spalte mit dem Blob dieser Art
    pub fn blob_column(self) -> &'static str {
        match self {
            TileKind::Navigation => "blob_data",
            TileKind::Localization => "road_mark",
        }
    }
}

/// Geladene Partitions-Karte, nach der Konstruktion unveränderlich.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionMap {
    partition_id: i64,
    tile_kind: TileKind,
    frame: ReferenceFrame,
    start: DVec3,
    end: DVec3,
    target_id: i64,
    entities: TileEntities,
}

impl PartitionMap {
    /// Lädt eine Partition mit Standard-Optionen.
    pub fn open(
        db_path: impl AsRef<Path>,
        partition_id: i64,
        tile_kind: TileKind,
    ) -> Result<Self, MapError> {
        Self::open_with(db_path, partition_id, tile_kind, &MapOptions::default())
    }

    /// Lädt eine Partition; Tabellenname aus `options`.
    pub fn open_with(
        db_path: impl AsRef<Path>,
        partition_id: i64,
        tile_kind: TileKind,
        options: &MapOptions,
    ) -> Result<Self, MapError> {
        let store = PartitionStore::open(db_path.as_ref(), &options.table_name)?;
        let columns = store.point_columns(partition_id)?;

        let ref_wgs84 = parse_point(&columns.ref_point)?;
        let ref_gcj02 = wgs84_to_gcj02(ref_wgs84.x, ref_wgs84.y);
        let frame = ReferenceFrame::new(ref_gcj02.x, ref_gcj02.y, ref_wgs84.z);

        let target_id = parse_target_prk_id(&columns.target_prk_id)?;
        let dest = parse_point(&columns.trace_dest)?;

        let start = frame.project_origin();
        let end = frame.project(dest.x, dest.y, dest.z);

        let blob = store.tile_blob(partition_id, tile_kind)?;
        drop(store);

        let tile = decode_tile(&blob)?;
        let entities = project_tile(&tile, &frame)?;

        log::info!(
            "Partition {} ({:?}) geladen: {} Strassen, {} POIs, {} Markierungen, {} Hindernisse, {} Parkflaechen",
            partition_id,
            tile_kind,
            entities.roads.len(),
            entities.pois.len(),
            entities.road_marks.len(),
            entities.obstacles.len(),
            entities.parking_spaces.len()
        );
        log::debug!(
            "Partition {}: Start ({:.3}, {:.3}, {:.3}), Ziel ({:.3}, {:.3}, {:.3})",
            partition_id,
            start.x,
            start.y,
            start.z,
            end.x,
            end.y,
            end.z
        );

        Ok(Self {
            partition_id,
            tile_kind,
            frame,
            start,
            end,
            target_id,
            entities,
        })
    }

    pub fn partition_id(&self) -> i64 {
        self.partition_id
    }

    pub fn tile_kind(&self) -> TileKind {
        self.tile_kind
    }

    /// Bezugssystem (Referenzpunkt in GCJ02-Länge/Breite)
    pub fn frame(&self) -> &ReferenceFrame {
        &self.frame
    }

    pub fn roads(&self) -> &[Road] {
        &self.entities.roads
    }

    pub fn pois(&self) -> &[Poi] {
        &self.entities.pois
    }

    pub fn road_marks(&self) -> &[RoadMark] {
        &self.entities.road_marks
    }

    pub fn obstacles(&self) -> &[RoadObstacle] {
        &self.entities.obstacles
    }

    pub fn parking_spaces(&self) -> &[ParkingSpace] {
        &self.entities.parking_spaces
    }

    /// Alle projizierten Entitäten
    pub fn entities(&self) -> &TileEntities {
        &self.entities
    }

    /// Referenzpunkt im eigenen Bezugssystem (≈ Ursprung)
    pub fn start_point(&self) -> DVec3 {
        self.start
    }

    /// Projiziertes Fahrtziel (`trace_dest`)
    pub fn end_point(&self) -> DVec3 {
        self.end
    }

    /// Id der Ziel-Parkfläche
    pub fn target_id(&self) -> i64 {
        self.target_id
    }
}
