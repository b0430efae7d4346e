//! # Icosahedron Primitive
//!
//! Generates the default base solid: a regular icosahedron emitted as
//! twenty independent triangles (sixty corners, no shared vertices).

use crate::error::TessellationError;
use glam::DVec3;

/// Canonical icosahedron vertices `(±1, ±t, 0)`, `(0, ±1, ±t)`, `(±t, 0, ±1)`
/// with `t` the golden ratio.
fn canonical_vertices() -> [DVec3; 12] {
    let t = (1.0 + 5f64.sqrt()) / 2.0;
    [
        DVec3::new(-1.0, t, 0.0),
        DVec3::new(1.0, t, 0.0),
        DVec3::new(-1.0, -t, 0.0),
        DVec3::new(1.0, -t, 0.0),
        DVec3::new(0.0, -1.0, t),
        DVec3::new(0.0, 1.0, t),
        DVec3::new(0.0, -1.0, -t),
        DVec3::new(0.0, 1.0, -t),
        DVec3::new(t, 0.0, -1.0),
        DVec3::new(t, 0.0, 1.0),
        DVec3::new(-t, 0.0, -1.0),
        DVec3::new(-t, 0.0, 1.0),
    ]
}

/// Faces wound counter-clockwise when seen from outside.
const FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Creates the corners of a regular icosahedron with circumradius `radius`.
///
/// Each face contributes three corners, starting at its second vertex, so
/// coincident corners repeat across faces and must be welded before use.
///
/// # Example
///
/// ```rust
/// use tessellation::primitives::raw_icosahedron;
///
/// let corners = raw_icosahedron(1.4).unwrap();
/// assert_eq!(corners.len(), 60);
/// assert!(corners.iter().all(|c| (c.length() - 1.4).abs() < 1e-12));
/// ```
pub fn raw_icosahedron(radius: f64) -> Result<Vec<DVec3>, TessellationError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(TessellationError::degenerate(format!(
            "Icosahedron radius must be positive and finite: {}",
            radius
        )));
    }

    let vertices = canonical_vertices().map(|v| v.normalize() * radius);

    let mut corners = Vec::with_capacity(FACES.len() * 3);
    for [a, b, c] in FACES {
        corners.push(vertices[b]);
        corners.push(vertices[c]);
        corners.push(vertices[a]);
    }
    Ok(corners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_icosahedron_corner_count() {
        let corners = raw_icosahedron(1.0).unwrap();
        assert_eq!(corners.len(), 60);
    }

    #[test]
    fn test_icosahedron_corners_on_sphere() {
        let radius = 1.4;
        for corner in raw_icosahedron(radius).unwrap() {
            assert_relative_eq!(corner.length(), radius, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_icosahedron_faces_point_outward() {
        let corners = raw_icosahedron(2.0).unwrap();
        for face in corners.chunks_exact(3) {
            let normal = (face[1] - face[0]).cross(face[2] - face[0]);
            let centroid = (face[0] + face[1] + face[2]) / 3.0;
            assert!(normal.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn test_icosahedron_edges_are_equal_length() {
        let corners = raw_icosahedron(1.0).unwrap();
        let expected = corners[0].distance(corners[1]);
        for face in corners.chunks_exact(3) {
            assert_relative_eq!(face[0].distance(face[1]), expected, epsilon = 1e-12);
            assert_relative_eq!(face[1].distance(face[2]), expected, epsilon = 1e-12);
            assert_relative_eq!(face[2].distance(face[0]), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_icosahedron_invalid_radius() {
        assert!(raw_icosahedron(0.0).is_err());
        assert!(raw_icosahedron(-1.0).is_err());
        assert!(raw_icosahedron(f64::NAN).is_err());
        assert!(raw_icosahedron(f64::INFINITY).is_err());
    }
}
