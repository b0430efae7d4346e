//! # Vertex Welding
//!
//! Merges coincident triangle corners into shared vertices.
//!
//! A base-solid generator usually emits every triangle with its own three
//! corners, so a vertex shared by five faces appears five times. Welding
//! collapses those copies onto one vertex and rewrites the corners as
//! indices into the deduplicated buffer.
//!
//! ## Key
//!
//! Each coordinate is rounded to `precision` fractional digits exactly the
//! way a decimal `toFixed` renders it: the exact binary value is rounded,
//! ties go to the larger magnitude, and the sign is kept for any negative
//! value, so `-0.004` ("-0.00") and `0.004` ("0.00") stay apart while
//! `-0.0` and `0.0` coincide. Corners whose three keys agree are the same
//! vertex; the first corner seen with a given key supplies the position.

use crate::mesh::Mesh;
use config::constants::{MAX_WELD_PRECISION, WELD_DECIMAL_PRECISION};
use glam::DVec3;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Magnitude at and above which fixed-point rendering gives way to the
/// shortest round-trip form, so keys fall back to exact equality.
const FIXED_LIMIT: f64 = 1e21;

/// One coordinate of a [`WeldKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Coordinate {
    /// `|x|` rounded to the key precision, scaled to an integer.
    Fixed { negative: bool, scaled: u128 },
    /// Bit pattern of a value too large or not finite.
    Exact(u64),
}

impl Coordinate {
    fn new(value: f64, precision: u32) -> Self {
        if value.is_nan() {
            return Self::Exact(f64::NAN.to_bits());
        }
        let magnitude = value.abs();
        if magnitude >= FIXED_LIMIT {
            return Self::Exact(value.to_bits());
        }
        Self::Fixed {
            negative: value < 0.0,
            scaled: round_scaled(magnitude, precision),
        }
    }
}

/// Rounds `magnitude * 10^precision` to the nearest integer using exact
/// integer arithmetic on the binary value, with ties rounding up.
///
/// `magnitude` is finite, non-negative and below [`FIXED_LIMIT`];
/// `precision` is at most [`MAX_WELD_PRECISION`].
fn round_scaled(magnitude: f64, precision: u32) -> u128 {
    let bits = magnitude.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };

    // mantissa < 2^53 and 10^15 < 2^50, so this stays below 2^103
    let numerator = mantissa as u128 * 10u128.pow(precision);
    if exponent >= 0 {
        // magnitude < 2^70 bounds the shifted value below 2^120
        return numerator << exponent;
    }

    let shift = exponent.unsigned_abs();
    if shift >= 128 {
        // numerator / 2^shift < 2^-25, far from a half
        return 0;
    }
    let quotient = numerator >> shift;
    let remainder = numerator - (quotient << shift);
    let half = 1u128 << (shift - 1);
    if remainder >= half {
        quotient + 1
    } else {
        quotient
    }
}

/// Rounded position used to detect coincident corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeldKey([Coordinate; 3]);

impl WeldKey {
    /// Rounds `position` to `precision` fractional digits.
    ///
    /// Precisions above [`MAX_WELD_PRECISION`] are clamped to it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tessellation::weld::WeldKey;
    /// use glam::DVec3;
    ///
    /// let a = WeldKey::new(DVec3::new(0.101, -0.0, 1.0), 2);
    /// let b = WeldKey::new(DVec3::new(0.099, 0.0, 1.004), 2);
    /// assert_eq!(a, b);
    ///
    /// // "-0.00" and "0.00" are different keys
    /// let below = WeldKey::new(DVec3::new(-0.004, 0.0, 0.0), 2);
    /// let above = WeldKey::new(DVec3::new(0.004, 0.0, 0.0), 2);
    /// assert_ne!(below, above);
    /// ```
    pub fn new(position: DVec3, precision: u32) -> Self {
        let precision = precision.min(MAX_WELD_PRECISION);
        Self([
            Coordinate::new(position.x, precision),
            Coordinate::new(position.y, precision),
            Coordinate::new(position.z, precision),
        ])
    }
}

/// Welds raw triangle corners at the default precision.
///
/// `corners` holds three positions per triangle, in order. The result has
/// one triangle per input triple and no two vertices sharing a weld key.
///
/// # Example
///
/// ```rust
/// use tessellation::weld::weld;
/// use glam::DVec3;
///
/// // Two triangles sharing the edge (1,0,0)-(0,1,0)
/// let corners = [
///     DVec3::ZERO, DVec3::X, DVec3::Y,
///     DVec3::Y, DVec3::X, DVec3::new(1.0, 1.0, 0.0),
/// ];
/// let mesh = weld(&corners);
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.triangles(), &[[0, 1, 2], [2, 1, 3]]);
/// ```
pub fn weld(corners: &[DVec3]) -> Mesh {
    weld_with_precision(corners, WELD_DECIMAL_PRECISION)
}

/// Welds raw triangle corners, keying positions at `precision` fractional
/// digits (at most [`MAX_WELD_PRECISION`]).
pub fn weld_with_precision(corners: &[DVec3], precision: u32) -> Mesh {
    let triangle_count = corners.len() / 3;
    let remainder = corners.len() % 3;
    if remainder != 0 {
        warn!(
            corners = corners.len(),
            ignored = remainder,
            "corner count is not a multiple of three, ignoring trailing corners"
        );
    }

    let mut mesh = Mesh::with_capacity(triangle_count, triangle_count);
    let mut canonical: HashMap<WeldKey, u32> = HashMap::with_capacity(corners.len());

    for triangle in corners.chunks_exact(3) {
        let mut indices = [0u32; 3];
        for (slot, &position) in indices.iter_mut().zip(triangle) {
            let key = WeldKey::new(position, precision);
            *slot = *canonical
                .entry(key)
                .or_insert_with(|| mesh.add_vertex(position));
        }
        mesh.add_triangle(indices[0], indices[1], indices[2]);
    }

    debug!(
        corners = corners.len(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "welded corners"
    );

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::raw_icosahedron;
    use std::collections::HashSet;

    #[test]
    fn test_weld_merges_coincident_corners() {
        let corners = [
            DVec3::ZERO,
            DVec3::X,
            DVec3::Y,
            DVec3::Y,
            DVec3::X,
            DVec3::new(1.0, 1.0, 0.0),
        ];
        let mesh = weld(&corners);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangle(1), [2, 1, 3]);
    }

    #[test]
    fn test_weld_first_seen_position_wins() {
        let first = DVec3::new(0.5012, 0.0, 0.0);
        let second = DVec3::new(0.4991, 0.0, 0.0);
        let corners = [first, DVec3::Y, DVec3::Z, second, DVec3::Z, DVec3::Y];
        let mesh = weld(&corners);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.vertex(0), first);
        assert_eq!(mesh.triangle(1)[0], 0);
    }

    #[test]
    fn test_weld_keeps_positions_distinct_within_precision() {
        let corners = [
            DVec3::new(0.50, 0.0, 0.0),
            DVec3::new(0.51, 0.0, 0.0),
            DVec3::Y,
        ];
        let mesh = weld(&corners);
        assert_eq!(mesh.vertex_count(), 3);
    }

    #[test]
    fn test_weld_precision_is_configurable() {
        let corners = [
            DVec3::new(0.501, 0.0, 0.0),
            DVec3::new(0.504, 0.0, 0.0),
            DVec3::Y,
        ];
        assert_eq!(weld_with_precision(&corners, 2).vertex_count(), 2);
        assert_eq!(weld_with_precision(&corners, 3).vertex_count(), 3);
    }

    #[test]
    fn test_weld_signed_zero_shares_key() {
        assert_eq!(
            WeldKey::new(DVec3::new(-0.0, 0.001, 0.004), 2),
            WeldKey::new(DVec3::ZERO, 2)
        );
    }

    #[test]
    fn test_weld_negative_values_rounding_to_zero_keep_their_sign() {
        // Rendered as "-0.00" and "0.00"
        let corners = [
            DVec3::new(-0.004, 0.0, 0.0),
            DVec3::new(0.004, 0.0, 0.0),
            DVec3::Y,
        ];
        assert_eq!(weld(&corners).vertex_count(), 3);

        let corners = [
            DVec3::new(-0.004, 0.0, 0.0),
            DVec3::new(-0.001, 0.0, 0.0),
            DVec3::Y,
        ];
        assert_eq!(weld(&corners).vertex_count(), 2);
    }

    #[test]
    fn test_weld_rounds_exact_binary_value() {
        // The stored double sits just below 96.915 and renders as "96.91",
        // though multiplying by 100 in floating point rounds it to 9691.5
        let corners = [
            DVec3::new(96.91499999999999, 0.0, 0.0),
            DVec3::new(96.9149, 0.0, 0.0),
            DVec3::Y,
        ];
        assert_eq!(weld(&corners).vertex_count(), 2);
        assert_eq!(round_scaled(96.91499999999999, 2), 9691);
    }

    #[test]
    fn test_weld_exact_ties_round_up() {
        // 0.125 and 0.375 are exact binary values: "0.13" and "0.38"
        assert_eq!(round_scaled(0.125, 2), 13);
        assert_eq!(round_scaled(0.375, 2), 38);
        assert_eq!(round_scaled(2.5, 0), 3);
        assert_eq!(
            WeldKey::new(DVec3::new(0.125, 0.0, 0.0), 2),
            WeldKey::new(DVec3::new(0.13, 0.0, 0.0), 2)
        );
        assert_ne!(
            WeldKey::new(DVec3::new(-0.125, 0.0, 0.0), 2),
            WeldKey::new(DVec3::new(0.125, 0.0, 0.0), 2)
        );
    }

    #[test]
    fn test_round_scaled_edge_values() {
        assert_eq!(round_scaled(0.0, 2), 0);
        assert_eq!(round_scaled(f64::MIN_POSITIVE, 2), 0);
        assert_eq!(round_scaled(1.005, 2), 100);
        assert_eq!(round_scaled(1.4, 2), 140);
        assert_eq!(round_scaled(4_503_599_627_370_496.0, 2), 450_359_962_737_049_600);
    }

    #[test]
    fn test_weld_huge_and_non_finite_values_key_exactly() {
        let big = WeldKey::new(DVec3::new(1e22, 0.0, 0.0), 2);
        assert_eq!(big, WeldKey::new(DVec3::new(1e22, 0.0, 0.0), 2));
        assert_ne!(big, WeldKey::new(DVec3::new(2e22, 0.0, 0.0), 2));
        assert_eq!(
            WeldKey::new(DVec3::new(f64::NAN, 0.0, 0.0), 2),
            WeldKey::new(DVec3::new(-f64::NAN, 0.0, 0.0), 2)
        );
    }

    #[test]
    fn test_weld_precision_is_clamped() {
        let position = DVec3::new(0.1234567890123456, 1.0, 2.0);
        assert_eq!(
            WeldKey::new(position, MAX_WELD_PRECISION + 5),
            WeldKey::new(position, MAX_WELD_PRECISION)
        );
    }

    #[test]
    fn test_weld_ignores_trailing_corners() {
        let corners = [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
        let mesh = weld(&corners);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
    }

    #[test]
    fn test_weld_empty_input() {
        let mesh = weld(&[]);
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_weld_is_deterministic() {
        let corners = raw_icosahedron(1.4).unwrap();
        assert_eq!(weld(&corners), weld(&corners));
    }

    #[test]
    fn test_weld_icosahedron_has_no_duplicate_keys() {
        let corners = raw_icosahedron(1.4).unwrap();
        let mesh = weld(&corners);
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.triangle_count(), 20);

        let keys: HashSet<WeldKey> = mesh
            .vertices()
            .iter()
            .map(|&v| WeldKey::new(v, WELD_DECIMAL_PRECISION))
            .collect();
        assert_eq!(keys.len(), mesh.vertex_count());
    }

    #[test]
    fn test_weld_corners_map_back_to_their_positions() {
        let corners = raw_icosahedron(1.4).unwrap();
        let mesh = weld(&corners);
        for (corner, &index) in corners.iter().zip(mesh.indices_u32().iter()) {
            assert_eq!(
                WeldKey::new(*corner, WELD_DECIMAL_PRECISION),
                WeldKey::new(mesh.vertex(index), WELD_DECIMAL_PRECISION)
            );
        }
    }
}
