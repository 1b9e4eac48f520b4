//! # Procedural Geometry Generation
//!
//! This module provides the shapes used by the hero scene, generated
//! procedurally so no model files are needed:
//!
//! - **Dodecahedron**: the primary solid (flat-shaded pentagons)
//! - **Octahedron**: the three orbiting satellites
//! - **Dodecahedron edges**: the translucent wireframe overlay (line list)

pub mod primitives;

pub use primitives::*;

/// Represents generated geometry data ready for GPU upload
#[derive(Debug, Clone)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Indices. Triangle lists use counter-clockwise winding; the edge
    /// geometry interprets these as line-list pairs instead.
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry (triangle lists only)
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}
