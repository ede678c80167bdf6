//! Geometrische Entitäten einer Parkhauskarte.
//!
//! Alle Punkte liegen flach als `[x0, y0, z0, x1, y1, z1, ...]` vor, in lokalen
//! Metern (ENU bzw. vorprojiziert im JSON-Dokument).

use super::{MapError, PoiType, RoadMarkType, RoadObstacleType};
use glam::DVec3;
use std::collections::HashSet;

/// Gemeinsame Sicht auf alle Entitäten mit Id und Punktliste.
pub trait Shape {
    /// Entitäts-Id (eindeutig innerhalb der Collection)
    fn id(&self) -> i64;
    /// Flache Punktliste (Länge immer Vielfaches von 3)
    fn points(&self) -> &[f32];

    /// Anzahl der Punkte
    fn point_count(&self) -> usize {
        self.points().len() / 3
    }

    /// Punkt `index` als Vektor, `None` ausserhalb der Liste.
    fn point(&self, index: usize) -> Option<DVec3> {
        let p = self.points().get(index * 3..index * 3 + 3)?;
        Some(DVec3::new(p[0] as f64, p[1] as f64, p[2] as f64))
    }
}

/// Säule mit Begrenzungspunkten (8 laut Dokument, 4er-Grundriss erlaubt)
#[derive(Debug, Clone, PartialEq)]
pub struct Pillar {
    pub id: i64,
    /// Zugeordnete Straßen-Ids
    pub road_ids: Vec<i64>,
    pub points: Vec<f32>,
}

/// Parkfläche (PSD) mit 4 Eckpunkten
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingSpace {
    pub id: i64,
    /// Zugeordnete Straßen-Ids (leer bei Tile-Daten)
    pub road_ids: Vec<i64>,
    pub points: Vec<f32>,
}

/// Bodenschwelle mit 2 Endpunkten
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedBump {
    pub id: i64,
    pub road_ids: Vec<i64>,
    pub points: Vec<f32>,
}

/// Straße mit Mittellinie
#[derive(Debug, Clone, PartialEq)]
pub struct Road {
    pub id: i64,
    /// Rampe / Steigung
    pub slope: bool,
    /// Länge in Metern, nur bei Tile-Daten vorhanden
    pub length: Option<f32>,
    /// Mittellinie, mindestens 2 Punkte
    pub center: Vec<f32>,
}

/// Point-of-Interest (1 Punkt, Segment oder Polygon)
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    pub id: i64,
    pub kind: PoiType,
    pub shape: Vec<f32>,
}

/// Fahrbahnmarkierung
#[derive(Debug, Clone, PartialEq)]
pub struct RoadMark {
    pub id: i64,
    pub kind: RoadMarkType,
    pub shape: Vec<f32>,
}

/// Hindernis auf der Fahrbahn
#[derive(Debug, Clone, PartialEq)]
pub struct RoadObstacle {
    pub id: i64,
    pub kind: RoadObstacleType,
    pub shape: Vec<f32>,
}

macro_rules! impl_shape {
    ($ty:ty, $field:ident) => {
        impl Shape for $ty {
            fn id(&self) -> i64 {
                self.id
            }

            fn points(&self) -> &[f32] {
                &self.$field
            }
        }
    };
}

impl_shape!(Pillar, points);
impl_shape!(ParkingSpace, points);
impl_shape!(SpeedBump, points);
impl_shape!(Road, center);
impl_shape!(Poi, shape);
impl_shape!(RoadMark, shape);
impl_shape!(RoadObstacle, shape);

/// Hängt einen Punkt in Übergabe-Genauigkeit (f32) an eine flache Liste an.
pub fn push_point(out: &mut Vec<f32>, p: DVec3) {
    out.extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);
}

/// Prüft, dass jede Id in einer Collection nur einmal vorkommt.
///
/// `context` benennt die Collection in der Fehlermeldung.
pub fn ensure_unique_ids<T: Shape>(items: &[T], context: &str) -> Result<(), MapError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id()) {
            return Err(MapError::parse(format!(
                "Doppelte Id {} in {}",
                item.id(),
                context
            )));
        }
    }
    Ok(())
}
