//! Core-Domänentypen: Entitäten, Kategorien, Etagen, Fehlertypen.

pub mod category;
/// Geometrische Entitäten der Karte
///
/// - Pillar, ParkingSpace, SpeedBump, Road: Grundriss-Daten je Etage
/// - Poi, RoadMark, RoadObstacle: Tile-Daten einer Partition
pub mod entity;
pub mod error;
pub mod floor;

pub use category::{PoiType, RoadMarkType, RoadObstacleType};
pub use entity::{
    ensure_unique_ids, push_point, ParkingSpace, Pillar, Poi, Road, RoadMark, RoadObstacle,
    Shape, SpeedBump,
};
pub use error::{ErrorKind, MapError};
pub use floor::{Floor, FloorKey};
