//! # Tessellation
//!
//! Incremental refinement of a closed triangle mesh.
//! Welds a base solid into a shared-vertex mesh, derives its vertex
//! adjacency graph, then grows it one vertex at a time by splitting
//! randomly chosen edges at their midpoints.
//!
//! ## Architecture
//!
//! ```text
//! primitives (raw corners) → weld (Mesh) → Tessellator (Mesh + Adjacency) → MeshSnapshot
//! ```
//!
//! ## Invariants
//!
//! Before and after every insertion:
//! - The adjacency graph has one entry per vertex
//! - Every edge is recorded at both endpoints
//! - Every triangle edge is in the graph
//! - Every edge is shared by exactly two triangles
//!
//! ## Usage
//!
//! ```rust
//! use tessellation::initial_tessellation;
//!
//! let mut tessellator = initial_tessellation(7)?;
//! for _ in 0..10 {
//!     tessellator.insert_vertex()?;
//! }
//! let snapshot = tessellator.snapshot();
//! assert_eq!(snapshot.vertex_count(), 22);
//! assert_eq!(snapshot.triangle_count(), 40);
//! # Ok::<(), tessellation::TessellationError>(())
//! ```

pub mod adjacency;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod snapshot;
pub mod tessellator;
pub mod weld;

pub use adjacency::Adjacency;
pub use error::TessellationError;
pub use mesh::Mesh;
pub use snapshot::MeshSnapshot;
pub use tessellator::{Insertion, Tessellator};

use config::constants::TessellationConfig;

/// Builds the default engine: an icosahedron of the default radius, welded
/// at the default precision, with edge selection seeded by `seed`.
///
/// # Example
///
/// ```rust
/// use tessellation::initial_tessellation;
///
/// let tessellator = initial_tessellation(0).unwrap();
/// assert_eq!(tessellator.vertex_count(), 12);
/// assert_eq!(tessellator.triangle_count(), 20);
/// ```
pub fn initial_tessellation(seed: u64) -> Result<Tessellator, TessellationError> {
    Tessellator::from_config(&TessellationConfig::default().with_seed(seed))
}

/// Builds an engine from `config`.
pub fn initial_tessellation_with(
    config: &TessellationConfig,
) -> Result<Tessellator, TessellationError> {
    Tessellator::from_config(config)
}
