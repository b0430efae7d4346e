//! # Mesh Snapshot
//!
//! Render-ready copy of the mesh buffers, handed to the renderer after
//! initialization and after every insertion.

use crate::mesh::Mesh;
use serde::{Deserialize, Serialize};

/// Flattened vertex and index buffers.
///
/// # Example
///
/// ```rust
/// use tessellation::{Mesh, MeshSnapshot};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::ZERO);
/// mesh.add_vertex(DVec3::X);
/// mesh.add_vertex(DVec3::Y);
/// mesh.add_triangle(0, 1, 2);
///
/// let snapshot = MeshSnapshot::from_mesh(&mesh);
/// assert_eq!(snapshot.vertices, vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
/// assert_eq!(snapshot.indices, vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshSnapshot {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    pub vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    pub indices: Vec<u32>,
}

impl MeshSnapshot {
    /// Copies the buffers of `mesh`.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
        }
    }

    /// Number of vertices in the snapshot.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of triangles in the snapshot.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl From<&Mesh> for MeshSnapshot {
    fn from(mesh: &Mesh) -> Self {
        Self::from_mesh(mesh)
    }
}
