//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use tessellation::MeshSnapshot;
use wasm_bindgen::prelude::*;

/// A handle to mesh data that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const tess = new TessellationHandle();
/// const mesh = tess.add_vertex();
///
/// // Get counts
/// const vertexCount = mesh.vertex_count;
/// const triangleCount = mesh.triangle_count;
///
/// // Re-upload buffers to Three.js
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct MeshHandle {
    snapshot: MeshSnapshot,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.snapshot.vertex_count() as u32
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.snapshot.triangle_count() as u32
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> Vec<f32> {
        self.snapshot.vertices.clone()
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Format: [i0, i1, i2, i0, i1, i2, ...]
    /// Length: triangle_count * 3
    pub fn indices(&self) -> Vec<u32> {
        self.snapshot.indices.clone()
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.snapshot.vertices.is_empty()
    }

    /// Serializes both buffers as `{"vertices": [...], "indices": [...]}`.
    ///
    /// # Errors
    /// Returns a JavaScript error value if serialization fails.
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.to_json_internal()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

impl MeshHandle {
    /// Wraps a snapshot.
    pub fn from_snapshot(snapshot: MeshSnapshot) -> Self {
        Self { snapshot }
    }

    /// Returns the wrapped snapshot.
    pub fn snapshot(&self) -> &MeshSnapshot {
        &self.snapshot
    }

    /// Host-side JSON export that keeps the Rust error type.
    pub fn to_json_internal(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot)
    }
}
