//! Baut Render-Meshes aus den Entitäten einer Karte.

use super::types::{EntityMesh, Primitive};
use crate::core::{
    MapError, ParkingSpace, Pillar, Poi, PoiType, Road, RoadMark, RoadObstacle,
    RoadObstacleType, Shape, SpeedBump,
};
use crate::floor_map::FloorMap;
use crate::partition::PartitionMap;
use crate::shared::MapOptions;

/// Dreiecke eines Quaders aus unterem (0..4) und oberem (4..8) Ring.
pub const BOX_INDICES: [u32; 36] = [
    0, 1, 2, 2, 3, 0, //
    4, 5, 6, 6, 7, 4, //
    7, 3, 0, 0, 4, 7, //
    6, 2, 1, 1, 5, 6, //
    0, 1, 5, 5, 4, 0, //
    3, 2, 6, 6, 7, 3,
];

/// Zwei Dreiecke eines Vierecks.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Verteilung der zwei Parkflächen-Töne auf die Eckpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PsdTone {
    /// Ecken 1 und 2 im zweiten Ton (Grundriss-Daten)
    Diagonal,
    /// Ecken 2 und 3 im zweiten Ton (Tile-Daten)
    Halves,
}

impl PsdTone {
    fn uses_alt(self, corner: usize) -> bool {
        match self {
            PsdTone::Diagonal => matches!(corner % 4, 1 | 2),
            PsdTone::Halves => matches!(corner % 4, 2 | 3),
        }
    }
}

/// Meshes aller Entitäten einer Etage oder Partition, je Collection gruppiert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneMeshes {
    pub pillars: Vec<EntityMesh>,
    pub parking_spaces: Vec<EntityMesh>,
    pub speed_bumps: Vec<EntityMesh>,
    pub roads: Vec<EntityMesh>,
    pub pois: Vec<EntityMesh>,
    pub road_marks: Vec<EntityMesh>,
    pub obstacles: Vec<EntityMesh>,
}

impl SceneMeshes {
    /// Alle Meshes in Zeichenreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &EntityMesh> {
        self.parking_spaces
            .iter()
            .chain(&self.roads)
            .chain(&self.speed_bumps)
            .chain(&self.road_marks)
            .chain(&self.pois)
            .chain(&self.obstacles)
            .chain(&self.pillars)
    }

    pub fn total_vertices(&self) -> usize {
        self.iter().map(EntityMesh::vertex_count).sum()
    }
}

/// Vertex-Anzahl je Mesh einer Gruppe (für Draw-Calls ohne Index-Puffer).
pub fn point_counts(group: &[EntityMesh]) -> Vec<u32> {
    group.iter().map(|mesh| mesh.vertex_count() as u32).collect()
}

/// Meshes einer Etage; `KeyNotFound` für unbekannte Etagen.
pub fn floor_meshes(
    map: &FloorMap,
    floor: f64,
    options: &MapOptions,
) -> Result<SceneMeshes, MapError> {
    let floor = map.floor(floor)?;
    let target = map.target_id();

    Ok(SceneMeshes {
        pillars: floor
            .pillars
            .iter()
            .map(|p| pillar_mesh(p, options))
            .collect(),
        parking_spaces: floor
            .parking_spaces
            .iter()
            .map(|s| parking_space_mesh(s, s.id == target, PsdTone::Diagonal, options))
            .collect(),
        speed_bumps: floor
            .speed_bumps
            .iter()
            .map(|b| speed_bump_mesh(b, options))
            .collect(),
        roads: floor.roads.iter().map(|r| road_mesh(r, options)).collect(),
        ..SceneMeshes::default()
    })
}

/// Meshes aller Entitäten einer Partition.
pub fn partition_meshes(map: &PartitionMap, options: &MapOptions) -> SceneMeshes {
    let target = map.target_id();

    SceneMeshes {
        parking_spaces: map
            .parking_spaces()
            .iter()
            .map(|s| parking_space_mesh(s, s.id == target, PsdTone::Halves, options))
            .collect(),
        roads: map.roads().iter().map(|r| road_mesh(r, options)).collect(),
        pois: map.pois().iter().map(|p| poi_mesh(p, options)).collect(),
        road_marks: map
            .road_marks()
            .iter()
            .map(|m| road_mark_mesh(m, options))
            .collect(),
        obstacles: map
            .obstacles()
            .iter()
            .map(|o| obstacle_mesh(o, options))
            .collect(),
        ..SceneMeshes::default()
    }
}

/// Säule als Quader.
///
/// Ein 4-Punkt-Grundriss wird um `pillar_height` nach oben extrudiert,
/// 8 Punkte werden direkt verwendet. Andere Punktzahlen ergeben einen Fächer.
pub fn pillar_mesh(pillar: &Pillar, options: &MapOptions) -> EntityMesh {
    let ring = |n: usize, color: [f32; 4]| std::iter::repeat(color).take(n);
    let bottom = options.pillar_bottom_color;
    let top = options.pillar_top_color;

    match pillar.point_count() {
        4 => {
            let mut vertices = pillar.points.clone();
            vertices.extend(pillar.points.chunks_exact(3).flat_map(|p| {
                [p[0], p[1], p[2] + options.pillar_height]
            }));
            EntityMesh::new(
                vertices,
                ring(4, bottom).chain(ring(4, top)),
                BOX_INDICES.to_vec(),
                Primitive::Triangles,
            )
        }
        8 => EntityMesh::new(
            pillar.points.clone(),
            ring(4, bottom).chain(ring(4, top)),
            BOX_INDICES.to_vec(),
            Primitive::Triangles,
        ),
        n => {
            log::trace!("Saeule {} mit {} Punkten als Faecher", pillar.id, n);
            EntityMesh::new(
                pillar.points.clone(),
                ring(n, bottom),
                sequence(n),
                Primitive::TriangleFan,
            )
        }
    }
}

/// Parkfläche als Viereck, Ziel-Parkfläche hervorgehoben.
pub fn parking_space_mesh(
    space: &ParkingSpace,
    is_target: bool,
    tone: PsdTone,
    options: &MapOptions,
) -> EntityMesh {
    let (base, alt) = if is_target {
        (options.psd_target_color, options.psd_target_color_alt)
    } else {
        (options.psd_color, options.psd_color_alt)
    };
    let n = space.point_count();
    let colors = (0..n).map(|corner| if tone.uses_alt(corner) { alt } else { base });

    let (indices, primitive) = if n == 4 {
        (QUAD_INDICES.to_vec(), Primitive::Triangles)
    } else {
        (sequence(n), Primitive::TriangleFan)
    };
    EntityMesh::new(space.points.clone(), colors, indices, primitive)
}

pub fn speed_bump_mesh(bump: &SpeedBump, options: &MapOptions) -> EntityMesh {
    uniform(bump, options.road_mark_color, Primitive::Lines)
}

/// Mittellinie als Linienzug; Rampen in eigener Farbe.
pub fn road_mesh(road: &Road, options: &MapOptions) -> EntityMesh {
    let color = if road.slope {
        options.road_slope_color
    } else {
        options.road_color
    };
    uniform(road, color, Primitive::LineStrip)
}

/// POI: Punkt, Segment oder gefülltes Polygon je nach Punktzahl.
pub fn poi_mesh(poi: &Poi, options: &MapOptions) -> EntityMesh {
    let color = match poi.kind {
        PoiType::GarageEntrance => options.poi_garage_entrance_color,
        PoiType::CheckPoint => options.poi_check_point_color,
        PoiType::Hill => options.poi_hill_color,
        PoiType::ParkIntersection => options.poi_intersection_color,
        _ => options.default_entity_color,
    };
    let primitive = match poi.point_count() {
        0 | 1 => Primitive::Points,
        2 => Primitive::Lines,
        _ => Primitive::TriangleFan,
    };
    uniform(poi, color, primitive)
}

pub fn road_mark_mesh(mark: &RoadMark, options: &MapOptions) -> EntityMesh {
    uniform(mark, options.road_mark_color, Primitive::Lines)
}

/// Hindernis als Umriss.
pub fn obstacle_mesh(obstacle: &RoadObstacle, options: &MapOptions) -> EntityMesh {
    let color = match obstacle.kind {
        RoadObstacleType::Pillar => options.obstacle_pillar_color,
        RoadObstacleType::Wall => options.obstacle_wall_color,
        _ => options.default_entity_color,
    };
    uniform(obstacle, color, Primitive::LineStrip)
}

fn uniform(shape: &impl Shape, color: [f32; 4], primitive: Primitive) -> EntityMesh {
    let n = shape.point_count();
    EntityMesh::new(
        shape.points().to_vec(),
        std::iter::repeat(color).take(n),
        sequence(n),
        primitive,
    )
}

fn sequence(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}
