//! # Mesh Data Structure
//!
//! Indexed triangle storage shared by the welder and the tessellation engine.
//! Vertices and triangles are only ever appended or rewritten in place, so an
//! index handed out once stays valid for the lifetime of the mesh.

use crate::error::TessellationError;
use glam::DVec3;
use std::collections::{BTreeMap, BTreeSet};

/// An undirected edge stored as `(min, max)`.
pub type EdgeKey = (u32, u32);

/// Returns the canonical undirected key for the edge between `a` and `b`.
#[inline]
pub fn edge_key(a: u32, b: u32) -> EdgeKey {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the render boundary.
///
/// # Example
///
/// ```rust
/// use tessellation::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Builds a mesh from existing buffers without validating them.
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices and returns its slot.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) -> usize {
        self.triangles.push([v0, v1, v2]);
        self.triangles.len() - 1
    }

    /// Rewrites the triangle stored in `slot`.
    pub fn set_triangle(&mut self, slot: usize, triangle: [u32; 3]) {
        self.triangles[slot] = triangle;
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Returns every undirected edge used by a triangle.
    pub fn edges(&self) -> BTreeSet<EdgeKey> {
        self.triangles
            .iter()
            .flat_map(|&[a, b, c]| [edge_key(a, b), edge_key(b, c), edge_key(c, a)])
            .collect()
    }

    /// Returns the number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Returns `V - E + F`. A closed mesh with sphere topology yields 2.
    pub fn euler_characteristic(&self) -> i64 {
        self.vertex_count() as i64 - self.edge_count() as i64 + self.triangle_count() as i64
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex
    pub fn validate(&self) -> Result<(), TessellationError> {
        let count = self.vertices.len();

        for (slot, tri) in self.triangles.iter().enumerate() {
            if let Some(&vertex) = tri.iter().find(|&&v| v as usize >= count) {
                return Err(TessellationError::VertexOutOfRange { vertex, count });
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(TessellationError::DegenerateTriangle {
                    triangle: slot,
                    indices: *tri,
                });
            }
        }

        Ok(())
    }

    /// Checks that every edge is shared by exactly two triangles.
    pub fn check_manifold(&self) -> Result<(), TessellationError> {
        let mut uses: BTreeMap<EdgeKey, usize> = BTreeMap::new();
        for &[a, b, c] in &self.triangles {
            for key in [edge_key(a, b), edge_key(b, c), edge_key(c, a)] {
                *uses.entry(key).or_default() += 1;
            }
        }

        match uses.into_iter().find(|&(_, count)| count != 2) {
            Some(((a, b), found)) => Err(TessellationError::non_manifold(a, b, found)),
            None => Ok(()),
        }
    }

    /// Checks that neighboring triangles agree on winding.
    ///
    /// With consistent orientation every directed edge appears at most once;
    /// its twin is traversed by the triangle on the other side.
    pub fn check_orientation(&self) -> Result<(), TessellationError> {
        let mut directed: BTreeMap<(u32, u32), usize> = BTreeMap::new();
        for &[a, b, c] in &self.triangles {
            for edge in [(a, b), (b, c), (c, a)] {
                *directed.entry(edge).or_default() += 1;
            }
        }

        match directed.into_iter().find(|&(_, count)| count > 1) {
            Some(((a, b), count)) => Err(TessellationError::InconsistentWinding { a, b, count }),
            None => Ok(()),
        }
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tetrahedron with outward winding.
    fn tetrahedron() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(1.0, 1.0, 1.0));
        mesh.add_vertex(DVec3::new(1.0, -1.0, -1.0));
        mesh.add_vertex(DVec3::new(-1.0, 1.0, -1.0));
        mesh.add_vertex(DVec3::new(-1.0, -1.0, 1.0));
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 3, 1);
        mesh.add_triangle(0, 2, 3);
        mesh.add_triangle(1, 3, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_set_triangle_rewrites_slot() {
        let mut mesh = tetrahedron();
        mesh.set_triangle(2, [3, 0, 2]);
        assert_eq!(mesh.triangle(2), [3, 0, 2]);
        assert_eq!(mesh.triangle_count(), 4);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_tetrahedron_topology() {
        let mesh = tetrahedron();
        assert_eq!(mesh.edge_count(), 6);
        assert_eq!(mesh.euler_characteristic(), 2);
        assert!(mesh.validate().is_ok());
        assert!(mesh.check_manifold().is_ok());
        assert!(mesh.check_orientation().is_ok());
    }

    #[test]
    fn test_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert_eq!(
            mesh.validate(),
            Err(TessellationError::VertexOutOfRange { vertex: 1, count: 1 })
        );
    }

    #[test]
    fn test_validate_repeated_vertex() {
        let mut mesh = tetrahedron();
        mesh.add_triangle(1, 1, 2);
        assert!(matches!(
            mesh.validate(),
            Err(TessellationError::DegenerateTriangle { triangle: 4, .. })
        ));
    }

    #[test]
    fn test_open_surface_is_not_manifold() {
        let mut mesh = tetrahedron();
        mesh.set_triangle(3, [0, 1, 2]);
        let err = mesh.check_manifold().unwrap_err();
        assert!(matches!(err, TessellationError::NonManifoldEdge { .. }));
    }

    #[test]
    fn test_flipped_triangle_breaks_orientation() {
        let mut mesh = tetrahedron();
        mesh.set_triangle(0, [0, 2, 1]);
        assert!(matches!(
            mesh.check_orientation(),
            Err(TessellationError::InconsistentWinding { .. })
        ));
    }

    #[test]
    fn test_mesh_buffers_are_flattened() {
        let mesh = tetrahedron();
        let vertices = mesh.vertices_f32();
        let indices = mesh.indices_u32();
        assert_eq!(vertices.len(), 12);
        assert_eq!(&vertices[..3], &[1.0f32, 1.0, 1.0]);
        assert_eq!(indices.len(), 12);
        assert_eq!(&indices[..6], &[0, 1, 2, 0, 3, 1]);
    }
}
