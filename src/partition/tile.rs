//! Tile-Blob: Protobuf-Dekodierung und Projektion in lokale Entitäten.

use crate::core::{
    ensure_unique_ids, push_point, MapError, ParkingSpace, Poi, PoiType, Road, RoadMark,
    RoadMarkType, RoadObstacle, RoadObstacleType,
};
use lpnp_geodesy::ReferenceFrame;
use prost::Message;

/// Protobuf-Bindings zu `proto/road_tile.proto`.
pub mod wire {
    #[derive(Clone, PartialEq, prost::Message)]
    pub struct FeatureId {
        #[prost(uint64, tag = "1")]
        pub count: u64,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct GeoPoint {
        #[prost(double, tag = "1")]
        pub longitude: f64,
        #[prost(double, tag = "2")]
        pub latitude: f64,
        #[prost(double, tag = "3")]
        pub altitude: f64,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Polyline {
        #[prost(message, repeated, tag = "1")]
        pub points: Vec<GeoPoint>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Road {
        #[prost(message, optional, tag = "1")]
        pub id: Option<FeatureId>,
        #[prost(float, tag = "2")]
        pub length: f32,
        #[prost(message, optional, tag = "3")]
        pub road_center: Option<Polyline>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Poi {
        #[prost(message, optional, tag = "1")]
        pub id: Option<FeatureId>,
        #[prost(int32, tag = "2")]
        pub poi_type: i32,
        #[prost(message, repeated, tag = "3")]
        pub shape: Vec<GeoPoint>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct RoadMark {
        #[prost(message, optional, tag = "1")]
        pub id: Option<FeatureId>,
        #[prost(int32, tag = "2")]
        pub r#type: i32,
        #[prost(message, repeated, tag = "3")]
        pub shape: Vec<GeoPoint>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct RoadObstacle {
        #[prost(message, optional, tag = "1")]
        pub id: Option<FeatureId>,
        #[prost(int32, tag = "2")]
        pub r#type: i32,
        #[prost(message, repeated, tag = "3")]
        pub shape: Vec<GeoPoint>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct ParkingSpace {
        #[prost(message, optional, tag = "1")]
        pub id: Option<FeatureId>,
        #[prost(message, repeated, tag = "2")]
        pub shape: Vec<GeoPoint>,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct RoadTile {
        #[prost(message, repeated, tag = "1")]
        pub road: Vec<Road>,
        #[prost(message, repeated, tag = "2")]
        pub poi: Vec<Poi>,
        #[prost(message, repeated, tag = "3")]
        pub road_mark: Vec<RoadMark>,
        #[prost(message, repeated, tag = "4")]
        pub road_obstacle: Vec<RoadObstacle>,
        #[prost(message, repeated, tag = "5")]
        pub parking_space: Vec<ParkingSpace>,
    }
}

/// Projizierte Entitäten eines Tiles, in lokalen ENU-Metern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileEntities {
    pub roads: Vec<Road>,
    pub pois: Vec<Poi>,
    pub road_marks: Vec<RoadMark>,
    pub obstacles: Vec<RoadObstacle>,
    pub parking_spaces: Vec<ParkingSpace>,
}

/// Dekodiert einen Tile-Blob.
pub fn decode_tile(blob: &[u8]) -> Result<wire::RoadTile, MapError> {
    wire::RoadTile::decode(blob)
        .map_err(|e| MapError::parse(format!("Tile-Blob nicht dekodierbar: {e}")))
}

/// Projiziert alle Formpunkte des Tiles durch `frame` und prüft Ids und Kategorien.
pub fn project_tile(tile: &wire::RoadTile, frame: &ReferenceFrame) -> Result<TileEntities, MapError> {
    let mut out = TileEntities::default();

    for (i, road) in tile.road.iter().enumerate() {
        let id = feature_id(road.id.as_ref(), "road", i)?;
        let points = road
            .road_center
            .as_ref()
            .map(|line| line.points.as_slice())
            .unwrap_or_default();
        if points.len() < 2 {
            return Err(MapError::parse(format!(
                "Strasse {id} braucht mindestens 2 Mittellinienpunkte, {} gefunden",
                points.len()
            )));
        }
        out.roads.push(Road {
            id,
            slope: false,
            length: Some(road.length),
            center: project_shape(points, frame),
        });
    }

    for (i, poi) in tile.poi.iter().enumerate() {
        out.pois.push(Poi {
            id: feature_id(poi.id.as_ref(), "poi", i)?,
            kind: PoiType::from_code(poi.poi_type)?,
            shape: project_shape(&poi.shape, frame),
        });
    }

    for (i, mark) in tile.road_mark.iter().enumerate() {
        out.road_marks.push(RoadMark {
            id: feature_id(mark.id.as_ref(), "road_mark", i)?,
            kind: RoadMarkType::from_code(mark.r#type)?,
            shape: project_shape(&mark.shape, frame),
        });
    }

    for (i, obstacle) in tile.road_obstacle.iter().enumerate() {
        out.obstacles.push(RoadObstacle {
            id: feature_id(obstacle.id.as_ref(), "road_obstacle", i)?,
            kind: RoadObstacleType::from_code(obstacle.r#type)?,
            shape: project_shape(&obstacle.shape, frame),
        });
    }

    for (i, space) in tile.parking_space.iter().enumerate() {
        out.parking_spaces.push(ParkingSpace {
            id: feature_id(space.id.as_ref(), "parking_space", i)?,
            road_ids: Vec::new(),
            points: project_shape(&space.shape, frame),
        });
    }

    ensure_unique_ids(&out.roads, "road")?;
    ensure_unique_ids(&out.pois, "poi")?;
    ensure_unique_ids(&out.road_marks, "road_mark")?;
    ensure_unique_ids(&out.obstacles, "road_obstacle")?;
    ensure_unique_ids(&out.parking_spaces, "parking_space")?;

    Ok(out)
}

fn feature_id(id: Option<&wire::FeatureId>, collection: &str, index: usize) -> Result<i64, MapError> {
    let id = id.ok_or_else(|| MapError::parse(format!("{collection}[{index}]: Id fehlt")))?;
    i64::try_from(id.count).map_err(|_| {
        MapError::parse(format!(
            "{collection}[{index}]: Id {} ausserhalb des Wertebereichs",
            id.count
        ))
    })
}

fn project_shape(points: &[wire::GeoPoint], frame: &ReferenceFrame) -> Vec<f32> {
    let mut out = Vec::with_capacity(points.len() * 3);
    for p in points {
        push_point(&mut out, frame.project(p.longitude, p.latitude, p.altitude));
    }
    out
}
