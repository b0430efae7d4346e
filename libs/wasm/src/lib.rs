//! WASM-facing entry points for the tessellation engine.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The renderer creates one [`TessellationHandle`], calls
//! `add_vertex` on every trigger and re-uploads the returned buffers.
//! Native tests use the `*_internal` helpers, which expose Rust error types
//! directly and never touch the JS host.
//!
//! ```
//! let mut handle = tessellation_wasm::TessellationHandle::with_seed(1).unwrap();
//! let mesh = handle.add_vertex_internal().unwrap();
//! assert_eq!(mesh.vertex_count(), 13);
//! ```

mod mesh_handle;

pub use mesh_handle::MeshHandle;

use config::constants::TessellationConfig;
use tessellation::{TessellationError, Tessellator};
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "tessellation-wasm";
/// // init_panic_hook();
/// ```
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Engine state owned by the JavaScript side.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const tess = new TessellationHandle();      // random seed
/// // let mesh = tess.mesh();                      // initial icosahedron
/// // button.onclick = () => { mesh = tess.add_vertex(); upload(mesh); };
/// ```
#[wasm_bindgen]
#[derive(Debug)]
pub struct TessellationHandle {
    tessellator: Tessellator,
}

#[wasm_bindgen]
impl TessellationHandle {
    /// Builds the default icosahedron and welds it.
    ///
    /// Without a seed, one is drawn from `Math.random`.
    ///
    /// # Errors
    /// Returns a JavaScript error if the base solid cannot be built.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> Result<TessellationHandle, JsValue> {
        let seed = seed.unwrap_or_else(|| (js_sys::Math::random() * u64::MAX as f64) as u64);
        Self::with_seed(seed).map_err(to_js_error)
    }

    /// Splits one random edge and returns the updated buffers.
    ///
    /// # Errors
    /// Returns a JavaScript error naming the offending vertices or edge if
    /// the mesh invariants are broken.
    pub fn add_vertex(&mut self) -> Result<MeshHandle, JsValue> {
        self.add_vertex_internal().map_err(to_js_error)
    }

    /// Returns the current buffers without modifying the mesh.
    pub fn mesh(&self) -> MeshHandle {
        MeshHandle::from_snapshot(self.tessellator.snapshot())
    }

    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.tessellator.vertex_count() as u32
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.tessellator.triangle_count() as u32
    }
}

impl TessellationHandle {
    /// Host-side constructor with an explicit seed.
    pub fn with_seed(seed: u64) -> Result<Self, TessellationError> {
        Self::with_config(&TessellationConfig::default().with_seed(seed))
    }

    /// Host-side constructor from a full configuration.
    pub fn with_config(config: &TessellationConfig) -> Result<Self, TessellationError> {
        Ok(Self {
            tessellator: Tessellator::from_config(config)?,
        })
    }

    /// Host-side insertion that keeps the Rust error type.
    pub fn add_vertex_internal(&mut self) -> Result<MeshHandle, TessellationError> {
        self.tessellator.insert_vertex()?;
        Ok(self.mesh())
    }

    /// Returns the underlying engine.
    pub fn tessellator(&self) -> &Tessellator {
        &self.tessellator
    }
}

fn to_js_error(err: TessellationError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
