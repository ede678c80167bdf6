//! Einheitlicher Einstieg: wählt den passenden Loader zur Datenquelle.

use crate::core::MapError;
use crate::floor_map::FloorMap;
use crate::partition::{PartitionMap, TileKind};
use crate::shared::MapOptions;
use glam::DVec3;
use std::fmt;
use std::path::PathBuf;

/// Herkunft der Kartendaten
#[derive(Debug, Clone, PartialEq)]
pub enum MapSource {
    /// Grundriss-JSON aus Datei
    JsonFile(PathBuf),
    /// Grundriss-JSON als Text
    JsonString(String),
    /// Tile-Blob einer Partitionszeile
    Partition {
        db_path: PathBuf,
        partition_id: i64,
        tile_kind: TileKind,
    },
    /// Grundriss-JSON aus der Spalte `render_data` einer Partitionszeile
    EmbeddedFloorMap { db_path: PathBuf, partition_id: i64 },
}

/// Geladene Karte, je nach Quelle Grundriss oder Partition.
#[derive(Debug, Clone, PartialEq)]
pub enum ParkingMap {
    Floor(FloorMap),
    Partition(PartitionMap),
}

/// Entitäts-Zählung für Logausgaben und den Inspector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapSummary {
    pub floors: usize,
    pub pillars: usize,
    pub parking_spaces: usize,
    pub speed_bumps: usize,
    pub roads: usize,
    pub pois: usize,
    pub road_marks: usize,
    pub obstacles: usize,
}

impl fmt::Display for MapSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Etagen, {} Saeulen, {} Parkflaechen, {} Schwellen, {} Strassen, {} POIs, {} Markierungen, {} Hindernisse",
            self.floors,
            self.pillars,
            self.parking_spaces,
            self.speed_bumps,
            self.roads,
            self.pois,
            self.road_marks,
            self.obstacles
        )
    }
}

/// Lädt eine Karte aus der angegebenen Quelle.
pub fn load_map(source: &MapSource, options: &MapOptions) -> Result<ParkingMap, MapError> {
    let map = match source {
        MapSource::JsonFile(path) => ParkingMap::Floor(FloorMap::from_file(path)?),
        MapSource::JsonString(json) => ParkingMap::Floor(FloorMap::from_json_str(json)?),
        MapSource::Partition {
            db_path,
            partition_id,
            tile_kind,
        } => ParkingMap::Partition(PartitionMap::open_with(
            db_path,
            *partition_id,
            *tile_kind,
            options,
        )?),
        MapSource::EmbeddedFloorMap {
            db_path,
            partition_id,
        } => ParkingMap::Floor(FloorMap::from_partition(db_path, *partition_id, options)?),
    };
    log::info!("Karte geladen: {}", map.summary());
    Ok(map)
}

impl ParkingMap {
    pub fn start_point(&self) -> DVec3 {
        match self {
            ParkingMap::Floor(map) => map.start_point(),
            ParkingMap::Partition(map) => map.start_point(),
        }
    }

    pub fn end_point(&self) -> DVec3 {
        match self {
            ParkingMap::Floor(map) => map.end_point(),
            ParkingMap::Partition(map) => map.end_point(),
        }
    }

    /// Id der Ziel-Parkfläche
    pub fn target_id(&self) -> i64 {
        match self {
            ParkingMap::Floor(map) => map.target_id(),
            ParkingMap::Partition(map) => map.target_id(),
        }
    }

    pub fn summary(&self) -> MapSummary {
        match self {
            ParkingMap::Floor(map) => {
                let mut summary = MapSummary {
                    floors: map.floor_count(),
                    ..MapSummary::default()
                };
                for floor in map.floors() {
                    summary.pillars += floor.pillars.len();
                    summary.parking_spaces += floor.parking_spaces.len();
                    summary.speed_bumps += floor.speed_bumps.len();
                    summary.roads += floor.roads.len();
                }
                summary
            }
            ParkingMap::Partition(map) => MapSummary {
                parking_spaces: map.parking_spaces().len(),
                roads: map.roads().len(),
                pois: map.pois().len(),
                road_marks: map.road_marks().len(),
                obstacles: map.obstacles().len(),
                ..MapSummary::default()
            },
        }
    }

    pub fn as_floor_map(&self) -> Option<&FloorMap> {
        match self {
            ParkingMap::Floor(map) => Some(map),
            ParkingMap::Partition(_) => None,
        }
    }

    pub fn as_partition_map(&self) -> Option<&PartitionMap> {
        match self {
            ParkingMap::Partition(map) => Some(map),
            ParkingMap::Floor(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    const SMALL_MAP: &str = r#"{
        "floor": [{
            "floorName": 1,
            "pillar": [],
            "psd": [{"psdId": 9, "roadId": [1], "points": [
                {"x": 0, "y": 0, "z": 0}, {"x": 2, "y": 0, "z": 0},
                {"x": 2, "y": 5, "z": 0}, {"x": 0, "y": 5, "z": 0}
            ]}],
            "speedBump": [],
            "road": []
        }],
        "info": {
            "learningStart": {"x": 0, "y": 0, "z": 0},
            "learningEnd": {"x": 1, "y": 1, "z": 0},
            "targetPrk": {"targetPrkId": 9}
        }
    }"#;

    #[test]
    fn test_json_string_source_gives_floor_map() {
        let map = load_map(
            &MapSource::JsonString(SMALL_MAP.to_string()),
            &MapOptions::default(),
        )
        .unwrap();

        assert!(map.as_floor_map().is_some());
        assert!(map.as_partition_map().is_none());
        assert_eq!(map.target_id(), 9);
        assert_eq!(map.end_point(), DVec3::new(1.0, 1.0, 0.0));
        let summary = map.summary();
        assert_eq!(summary.floors, 1);
        assert_eq!(summary.parking_spaces, 1);
        assert_eq!(summary.roads, 0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_map(
            &MapSource::JsonFile(PathBuf::from("/nicht/vorhanden/map.json")),
            &MapOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_summary_display() {
        let summary = MapSummary {
            floors: 2,
            roads: 3,
            ..MapSummary::default()
        };
        let text = summary.to_string();
        assert!(text.starts_with("2 Etagen"));
        assert!(text.contains("3 Strassen"));
    }
}
