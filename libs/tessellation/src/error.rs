//! # Tessellation Errors
//!
//! Error types for welding, adjacency and edge-split operations.
//!
//! ## Error Policy
//!
//! - A broken invariant is never papered over: the operation stops and
//!   returns an error naming the offending vertices or edge
//! - A failed insertion leaves the mesh exactly as it was before the call

use thiserror::Error;

/// Errors that can occur while building or refining a mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TessellationError {
    /// The mesh has no vertices to select from.
    #[error("Mesh has no vertices")]
    EmptyMesh,

    /// A vertex index does not exist in the vertex buffer.
    #[error("Vertex {vertex} out of range (vertex count: {count})")]
    VertexOutOfRange { vertex: u32, count: usize },

    /// The selected vertex has no neighbors in the adjacency graph.
    #[error("Vertex {vertex} has no neighbors in the adjacency graph")]
    IsolatedVertex { vertex: u32 },

    /// The requested edge is not in the adjacency graph.
    #[error("Edge ({a}, {b}) is not in the adjacency graph")]
    MissingEdge { a: u32, b: u32 },

    /// An edge is not shared by exactly two triangles.
    #[error("Edge ({a}, {b}) is shared by {found} triangles, expected 2")]
    NonManifoldEdge { a: u32, b: u32, found: usize },

    /// The adjacency graph lists `b` as a neighbor of `a` but not the reverse.
    #[error("Adjacency is asymmetric: {b} is a neighbor of {a} but {a} is not a neighbor of {b}")]
    AsymmetricAdjacency { a: u32, b: u32 },

    /// A triangle edge is missing from the adjacency graph.
    #[error("Triangle {triangle} edge ({a}, {b}) is missing from the adjacency graph")]
    UncoveredEdge { triangle: usize, a: u32, b: u32 },

    /// The adjacency graph and the vertex buffer have different lengths.
    #[error("Adjacency has {adjacency} entries for {vertices} vertices")]
    AdjacencySizeMismatch { adjacency: usize, vertices: usize },

    /// Two triangles traverse a shared edge in the same direction.
    #[error("Edge ({a}, {b}) is traversed {count} times in the same direction")]
    InconsistentWinding { a: u32, b: u32, count: usize },

    /// A triangle references the same vertex more than once.
    #[error("Triangle {triangle} is degenerate: {indices:?}")]
    DegenerateTriangle { triangle: usize, indices: [u32; 3] },

    /// Invalid geometry parameters.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Growing the mesh further would exceed the configured limit.
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl TessellationError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a non-manifold edge error.
    pub fn non_manifold(a: u32, b: u32, found: usize) -> Self {
        Self::NonManifoldEdge { a, b, found }
    }
}
