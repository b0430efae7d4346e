//! # Config Crate
//!
//! Centralized configuration constants for the tessellation pipeline.
//! All magic numbers and tunable parameters are defined here so the welder,
//! the tessellation engine and the browser bindings agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{TessellationConfig, WELD_DECIMAL_PRECISION};
//!
//! // Weld keys round coordinates to two fractional digits
//! assert_eq!(TessellationConfig::default().weld_precision, WELD_DECIMAL_PRECISION);
//!
//! // Engine configuration with a fixed seed
//! let config = TessellationConfig::default().with_seed(7);
//! assert_eq!(config.seed, Some(7));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Reproducible**: Defaults match the reference base solid and weld key

pub mod constants;
