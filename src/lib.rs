//! LPNP Map Core Library.
//! Lädt Parkhauskarten aus Grundriss-JSON und SQLite-Partitionen und
//! normalisiert sie in ein lokales ENU-Koordinatensystem.

pub mod core;
pub mod floor_map;
pub mod loader;
pub mod partition;
pub mod render;
pub mod shared;

pub use crate::core::{
    ErrorKind, Floor, FloorKey, MapError, ParkingSpace, Pillar, Poi, PoiType, Road, RoadMark,
    RoadMarkType, RoadObstacle, RoadObstacleType, Shape, SpeedBump,
};
pub use floor_map::{FloorMap, LoadType};
pub use loader::{load_map, MapSource, MapSummary, ParkingMap};
pub use partition::{PartitionMap, TileKind};
pub use render::{EntityMesh, Primitive, SceneMeshes};
pub use shared::MapOptions;

pub use lpnp_geodesy as geodesy;
pub use lpnp_geodesy::ReferenceFrame;
