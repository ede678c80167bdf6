//! Render-Übergabe: flache Vertex-, Farb- und Index-Puffer je Entität.
//!
//! Unabhängig von einer Grafik-API; die Puffer lassen sich direkt als
//! Vertex-/Index-Buffer hochladen.

mod builder;
mod types;

pub use builder::{
    floor_meshes, obstacle_mesh, parking_space_mesh, partition_meshes, pillar_mesh, poi_mesh,
    point_counts, road_mark_mesh, road_mesh, speed_bump_mesh, PsdTone, SceneMeshes, BOX_INDICES,
    QUAD_INDICES,
};
pub use types::{vertex_bytes, ColoredVertex, EntityMesh, Primitive};
