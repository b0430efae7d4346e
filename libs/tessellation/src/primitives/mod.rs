//! # Primitives
//!
//! Base solids delivered as raw, unwelded triangle corners.

pub mod icosahedron;

pub use icosahedron::raw_icosahedron;
