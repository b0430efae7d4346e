//! # Configuration Constants
//!
//! Centralized constants for the tessellation pipeline. Welding precision,
//! base solid dimensions and growth limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Weld key rounding
//! - **Base Solid**: Parameters of the initial polyhedron
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Number of fractional digits kept when building a weld key.
///
/// Two triangle corners are the same vertex when every coordinate rounds to
/// the same value at this many decimal places. Corners that differ only
/// beyond this precision are merged; corners that differ within it are not.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_WELD_PRECISION, WELD_DECIMAL_PRECISION};
///
/// assert!(WELD_DECIMAL_PRECISION <= MAX_WELD_PRECISION);
/// ```
pub const WELD_DECIMAL_PRECISION: u32 = 2;

/// Largest weld precision honored; finer requests are clamped to it.
///
/// Keeps the exact key rounding within 128-bit integer arithmetic.
pub const MAX_WELD_PRECISION: u32 = 15;

// =============================================================================
// BASE SOLID CONSTANTS
// =============================================================================

/// Circumradius of the default base solid (a regular icosahedron).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_BASE_RADIUS;
///
/// assert!(DEFAULT_BASE_RADIUS > 0.0);
/// ```
pub const DEFAULT_BASE_RADIUS: f64 = 1.4;

/// Seed used for edge selection when the caller does not supply one.
///
/// Hosts with an entropy source (the browser bindings use `Math.random`)
/// should pass their own seed; this value keeps native runs reproducible.
///
/// # Example
///
/// ```rust
/// use config::constants::{TessellationConfig, DEFAULT_SEED};
///
/// let config = TessellationConfig::default();
/// assert_eq!(config.seed.unwrap_or(DEFAULT_SEED), DEFAULT_SEED);
/// ```
pub const DEFAULT_SEED: u64 = 0x1C05_A4ED;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices a tessellated mesh may grow to.
///
/// Every insertion adds one vertex and two triangles, so this also bounds
/// the triangle count at roughly twice this value.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// CONFIGURATION SNAPSHOT
// =============================================================================

/// Settings for building and growing a tessellated mesh.
///
/// # Examples
/// ```
/// use config::constants::{TessellationConfig, DEFAULT_BASE_RADIUS};
///
/// let config = TessellationConfig::default()
///     .with_base_radius(2.0)
///     .with_max_vertices(64);
/// assert_eq!(config.base_radius, 2.0);
/// assert_eq!(config.max_vertices, 64);
/// assert_eq!(TessellationConfig::default().base_radius, DEFAULT_BASE_RADIUS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellationConfig {
    /// Fractional digits used by the welder.
    pub weld_precision: u32,
    /// Circumradius of the base solid.
    pub base_radius: f64,
    /// Upper bound on the vertex count.
    pub max_vertices: usize,
    /// Seed for the edge selection generator. `None` lets the host pick one.
    pub seed: Option<u64>,
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            weld_precision: WELD_DECIMAL_PRECISION,
            base_radius: DEFAULT_BASE_RADIUS,
            max_vertices: MAX_VERTICES,
            seed: None,
        }
    }
}

impl TessellationConfig {
    /// Overrides the weld precision.
    pub fn with_weld_precision(mut self, precision: u32) -> Self {
        self.weld_precision = precision;
        self
    }

    /// Overrides the base solid radius.
    pub fn with_base_radius(mut self, radius: f64) -> Self {
        self.base_radius = radius;
        self
    }

    /// Overrides the vertex limit.
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Fixes the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, or [`DEFAULT_SEED`].
    pub fn seed_or_default(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }
}
