//! Übergabe-Typen an die Grafikschicht.

use bytemuck::{Pod, Zeroable};

/// Zeichenprimitive eines Meshes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Points,
    Lines,
    LineStrip,
    Triangles,
    TriangleFan,
}

/// Vertex mit Position und Farbe, direkt hochladbar.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ColoredVertex {
    /// Position in lokalen Metern
    pub position: [f32; 3],
    /// RGBA-Farbe
    pub color: [f32; 4],
}

impl ColoredVertex {
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Geometrie einer einzelnen Entität.
///
/// `vertices` enthält 3 Werte pro Vertex, `colors` 4 Werte (RGBA) pro Vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMesh {
    pub vertices: Vec<f32>,
    pub colors: Vec<f32>,
    pub indices: Vec<u32>,
    pub primitive: Primitive,
}

impl EntityMesh {
    /// Mesh mit einer Farbe pro Vertex
    pub fn new(
        vertices: Vec<f32>,
        colors: impl IntoIterator<Item = [f32; 4]>,
        indices: Vec<u32>,
        primitive: Primitive,
    ) -> Self {
        let colors = colors.into_iter().flatten().collect();
        Self {
            vertices,
            colors,
            indices,
            primitive,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Position und Farbe je Vertex zusammengeführt.
    pub fn interleaved(&self) -> Vec<ColoredVertex> {
        self.vertices
            .chunks_exact(3)
            .zip(self.colors.chunks_exact(4))
            .map(|(p, c)| ColoredVertex::new([p[0], p[1], p[2]], [c[0], c[1], c[2], c[3]]))
            .collect()
    }

    /// Index-Puffer als Bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Vertex-Puffer als Bytes.
pub fn vertex_bytes(vertices: &[ColoredVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}
