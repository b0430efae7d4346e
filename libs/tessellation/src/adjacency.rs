//! # Vertex Adjacency
//!
//! Per-vertex neighbor sets derived from a triangulation.
//!
//! The graph is kept in lockstep with the mesh by the tessellation engine:
//! one entry per vertex, edges always stored in both endpoints' sets, and
//! every triangle edge present. Neighbor sets are ordered so that a seeded
//! generator picks the same neighbor on every run.

use crate::error::TessellationError;
use crate::mesh::Mesh;
use std::collections::BTreeSet;

/// Undirected vertex adjacency graph.
///
/// # Example
///
/// ```rust
/// use tessellation::{Adjacency, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::ZERO);
/// mesh.add_vertex(DVec3::X);
/// mesh.add_vertex(DVec3::Y);
/// mesh.add_triangle(0, 1, 2);
///
/// let adjacency = Adjacency::from_mesh(&mesh);
/// assert_eq!(adjacency.len(), 3);
/// assert!(adjacency.contains_edge(2, 0));
/// assert_eq!(adjacency.degree(1), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    neighbors: Vec<BTreeSet<u32>>,
}

impl Adjacency {
    /// Creates a graph with `vertex_count` isolated vertices.
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            neighbors: vec![BTreeSet::new(); vertex_count],
        }
    }

    /// Builds the graph for `mesh`, sized to its vertex buffer.
    ///
    /// Every triangle `(a, b, c)` contributes the pairs `(a, b)`, `(b, c)`
    /// and `(c, a)`. Edges shared by two triangles are absorbed by the sets.
    /// Triangle indices are expected to be in range (see [`Mesh::validate`]).
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let mut adjacency = Self::with_vertices(mesh.vertex_count());
        for &[a, b, c] in mesh.triangles() {
            adjacency.link(a, b);
            adjacency.link(b, c);
            adjacency.link(c, a);
        }
        adjacency
    }

    /// Number of vertex entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns true if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Neighbors of `vertex`, in ascending order.
    #[inline]
    pub fn neighbors(&self, vertex: u32) -> &BTreeSet<u32> {
        &self.neighbors[vertex as usize]
    }

    /// Number of neighbors of `vertex`.
    #[inline]
    pub fn degree(&self, vertex: u32) -> usize {
        self.neighbors[vertex as usize].len()
    }

    /// Returns true if `a` and `b` are neighbors.
    pub fn contains_edge(&self, a: u32, b: u32) -> bool {
        self.neighbors
            .get(a as usize)
            .is_some_and(|set| set.contains(&b))
    }

    /// Adds the undirected edge `(a, b)`.
    pub fn link(&mut self, a: u32, b: u32) {
        self.neighbors[a as usize].insert(b);
        self.neighbors[b as usize].insert(a);
    }

    /// Removes the undirected edge `(a, b)`.
    pub fn unlink(&mut self, a: u32, b: u32) {
        self.neighbors[a as usize].remove(&b);
        self.neighbors[b as usize].remove(&a);
    }

    /// Appends an isolated vertex and returns its index.
    pub fn push_vertex(&mut self) -> u32 {
        self.neighbors.push(BTreeSet::new());
        (self.neighbors.len() - 1) as u32
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Checks that every edge is recorded at both endpoints.
    pub fn check_symmetry(&self) -> Result<(), TessellationError> {
        for (a, set) in self.neighbors.iter().enumerate() {
            let a = a as u32;
            if let Some(&b) = set.iter().find(|&&b| !self.contains_edge(b, a)) {
                return Err(TessellationError::AsymmetricAdjacency { a, b });
            }
        }
        Ok(())
    }

    /// Checks that the graph is sized to `mesh` and records every triangle
    /// edge.
    pub fn check_covers(&self, mesh: &Mesh) -> Result<(), TessellationError> {
        if self.len() != mesh.vertex_count() {
            return Err(TessellationError::AdjacencySizeMismatch {
                adjacency: self.len(),
                vertices: mesh.vertex_count(),
            });
        }

        for (triangle, &[a, b, c]) in mesh.triangles().iter().enumerate() {
            for (from, to) in [(a, b), (b, c), (c, a)] {
                if !self.contains_edge(from, to) {
                    return Err(TessellationError::UncoveredEdge {
                        triangle,
                        a: from,
                        b: to,
                    });
                }
            }
        }
        Ok(())
    }
}
