//! # Tessellation Engine
//!
//! Grows a welded mesh one vertex at a time.
//!
//! ## Algorithm Overview
//!
//! Each insertion:
//! 1. Picks a vertex `a` uniformly, then a neighbor `b` uniformly from `a`'s
//!    adjacency set; `(a, b)` is the edge to split
//! 2. Appends the midpoint `c` of `a` and `b`
//! 3. Replaces edge `(a, b)` with `(a, c)` and `(c, b)` in the graph
//! 4. Splits both triangles on the edge: the slot keeps the triangle with
//!    `b` replaced by `c`, and the triangle with `a` replaced by `c` is
//!    appended; `c` is linked to each apex
//!
//! The triangles on the edge are located before anything is modified, so a
//! failed insertion leaves the mesh untouched.

mod split;


pub use split::Insertion;

use crate::adjacency::Adjacency;
use crate::error::TessellationError;
use crate::mesh::Mesh;
use crate::primitives::raw_icosahedron;
use crate::snapshot::MeshSnapshot;
use crate::weld::weld_with_precision;
use config::constants::{TessellationConfig, MAX_VERTICES};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

/// Mesh, adjacency graph and random source for incremental refinement.
///
/// # Example
///
/// ```rust
/// use tessellation::Tessellator;
/// use config::constants::TessellationConfig;
///
/// let config = TessellationConfig::default().with_seed(42);
/// let mut tessellator = Tessellator::from_config(&config).unwrap();
/// assert_eq!(tessellator.vertex_count(), 12);
///
/// let insertion = tessellator.insert_vertex().unwrap();
/// assert_eq!(insertion.c, 12);
/// assert_eq!(tessellator.triangle_count(), 22);
/// assert!(tessellator.check_invariants().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Tessellator<R = StdRng> {
    mesh: Mesh,
    adjacency: Adjacency,
    rng: R,
    max_vertices: usize,
}

impl Tessellator<StdRng> {
    /// Creates an engine whose edge selection is seeded with `seed`.
    pub fn from_seed(mesh: Mesh, seed: u64) -> Result<Self, TessellationError> {
        Self::new(mesh, StdRng::seed_from_u64(seed))
    }

    /// Builds the configured base solid, welds it and seeds the engine.
    pub fn from_config(config: &TessellationConfig) -> Result<Self, TessellationError> {
        let corners = raw_icosahedron(config.base_radius)?;
        let mesh = weld_with_precision(&corners, config.weld_precision);
        Ok(Self::from_seed(mesh, config.seed_or_default())?
            .with_max_vertices(config.max_vertices))
    }
}

impl<R: Rng> Tessellator<R> {
    /// Creates an engine for `mesh`, building its adjacency graph.
    ///
    /// # Errors
    ///
    /// Returns an error if a triangle references a missing vertex or repeats
    /// a vertex.
    pub fn new(mesh: Mesh, rng: R) -> Result<Self, TessellationError> {
        mesh.validate()?;
        let adjacency = Adjacency::from_mesh(&mesh);

        info!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            edges = adjacency.edge_count(),
            "tessellator ready"
        );

        Ok(Self {
            mesh,
            adjacency,
            rng,
            max_vertices: MAX_VERTICES,
        })
    }

    /// Caps the number of vertices the mesh may grow to.
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Picks the edge for the next insertion.
    ///
    /// # Errors
    ///
    /// [`TessellationError::EmptyMesh`] if there are no vertices and
    /// [`TessellationError::IsolatedVertex`] if the chosen vertex has no
    /// neighbors.
    pub fn choose_edge(&mut self) -> Result<(u32, u32), TessellationError> {
        let count = self.mesh.vertex_count();
        if count == 0 {
            return Err(TessellationError::EmptyMesh);
        }

        let a = self.rng.random_range(0..count) as u32;
        let neighbors = self.adjacency.neighbors(a);
        if neighbors.is_empty() {
            warn!(vertex = a, "selected vertex has no neighbors");
            return Err(TessellationError::IsolatedVertex { vertex: a });
        }

        let pick = self.rng.random_range(0..neighbors.len());
        let b = neighbors
            .iter()
            .nth(pick)
            .copied()
            .ok_or(TessellationError::IsolatedVertex { vertex: a })?;
        Ok((a, b))
    }

    /// Splits a randomly chosen edge, adding one vertex and two triangles.
    pub fn insert_vertex(&mut self) -> Result<Insertion, TessellationError> {
        let (a, b) = self.choose_edge()?;
        self.split_edge(a, b)
    }

    /// Runs `count` insertions, stopping at the first failure.
    pub fn insert_vertices(&mut self, count: usize) -> Result<Vec<Insertion>, TessellationError> {
        (0..count).map(|_| self.insert_vertex()).collect()
    }
}

impl<R> Tessellator<R> {
    /// Returns the current mesh.
    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Returns the adjacency graph.
    #[inline]
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// Copies the render buffers.
    pub fn snapshot(&self) -> MeshSnapshot {
        MeshSnapshot::from_mesh(&self.mesh)
    }

    /// Consumes the engine and returns its mesh.
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    /// Checks graph sizing, symmetry and coverage plus the manifold property.
    pub fn check_invariants(&self) -> Result<(), TessellationError> {
        self.adjacency.check_covers(&self.mesh)?;
        self.adjacency.check_symmetry()?;
        self.mesh.check_manifold()
    }
}
