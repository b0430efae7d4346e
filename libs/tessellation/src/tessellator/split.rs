//! Edge split: the single mutation the engine performs.

use super::Tessellator;
use crate::error::TessellationError;
use tracing::{debug, warn};

/// Record of one edge split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    /// First endpoint of the split edge.
    pub a: u32,
    /// Second endpoint of the split edge.
    pub b: u32,
    /// The new midpoint vertex.
    pub c: u32,
    /// Apexes of the two triangles that shared `(a, b)`, in slot order.
    pub apexes: [u32; 2],
    /// Slots rewritten in place; their partners were appended after the
    /// existing triangles.
    pub slots: [usize; 2],
}

impl<R> Tessellator<R> {
    /// Splits edge `(a, b)` at its midpoint.
    ///
    /// # Errors
    ///
    /// - [`TessellationError::VertexOutOfRange`] for an unknown vertex
    /// - [`TessellationError::MissingEdge`] if `(a, b)` is not in the graph
    /// - [`TessellationError::TooManyVertices`] at the vertex limit
    /// - [`TessellationError::NonManifoldEdge`] unless exactly two triangles
    ///   share the edge
    ///
    /// The mesh is unchanged when an error is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tessellation::initial_tessellation;
    ///
    /// let mut tessellator = initial_tessellation(1).unwrap();
    /// let [a, b, _] = tessellator.mesh().triangle(0);
    /// let insertion = tessellator.split_edge(a, b).unwrap();
    /// assert_eq!(insertion.slots[0], 0);
    /// assert_eq!(tessellator.mesh().triangle(0)[1], insertion.c);
    /// ```
    pub fn split_edge(&mut self, a: u32, b: u32) -> Result<Insertion, TessellationError> {
        let count = self.mesh.vertex_count();
        for vertex in [a, b] {
            if vertex as usize >= count {
                return Err(TessellationError::VertexOutOfRange { vertex, count });
            }
        }
        if !self.adjacency.contains_edge(a, b) {
            return Err(TessellationError::MissingEdge { a, b });
        }
        if count >= self.max_vertices {
            return Err(TessellationError::TooManyVertices {
                count: count + 1,
                max: self.max_vertices,
            });
        }

        let sharing = self.triangles_on_edge(a, b);
        let [(first_slot, first_apex), (second_slot, second_apex)] = sharing[..] else {
            warn!(a, b, found = sharing.len(), "edge is not shared by two triangles");
            return Err(TessellationError::non_manifold(a, b, sharing.len()));
        };

        let midpoint = (self.mesh.vertex(a) + self.mesh.vertex(b)) * 0.5;
        let c = self.mesh.add_vertex(midpoint);
        self.adjacency.push_vertex();
        self.adjacency.unlink(a, b);
        self.adjacency.link(a, c);
        self.adjacency.link(c, b);

        for (slot, apex) in [(first_slot, first_apex), (second_slot, second_apex)] {
            let original = self.mesh.triangle(slot);
            self.mesh
                .set_triangle(slot, original.map(|v| if v == b { c } else { v }));
            let [x, y, z] = original.map(|v| if v == a { c } else { v });
            self.mesh.add_triangle(x, y, z);
            self.adjacency.link(c, apex);
        }

        debug!(
            a,
            b,
            c,
            apexes = ?[first_apex, second_apex],
            vertices = self.mesh.vertex_count(),
            triangles = self.mesh.triangle_count(),
            "split edge"
        );

        Ok(Insertion {
            a,
            b,
            c,
            apexes: [first_apex, second_apex],
            slots: [first_slot, second_slot],
        })
    }

    /// Returns `(slot, apex)` for every triangle containing both `a` and `b`.
    fn triangles_on_edge(&self, a: u32, b: u32) -> Vec<(usize, u32)> {
        self.mesh
            .triangles()
            .iter()
            .enumerate()
            .filter(|(_, tri)| tri.contains(&a) && tri.contains(&b))
            .filter_map(|(slot, tri)| {
                tri.iter()
                    .find(|&&v| v != a && v != b)
                    .map(|&apex| (slot, apex))
            })
            .collect()
    }
}
