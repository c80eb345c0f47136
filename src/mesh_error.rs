//! MeshInfoError: Unified error type for mesh-info public APIs
//!
//! This error type is used throughout the mesh-info library to provide robust,
//! non-panicking error handling for all public APIs. The measurement core
//! itself is infallible; everything that can go wrong is rejected here, at
//! construction or invocation time, before any geometry runs.

use thiserror::Error;

/// Unified error type for mesh-info operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshInfoError {
    /// A face loop referenced a vertex index outside the mesh.
    #[error("face references vertex {vertex}, but the mesh has {vertex_count} vertices")]
    FaceVertexOutOfBounds {
        /// Offending vertex index.
        vertex: u32,
        /// Number of vertices the mesh actually holds.
        vertex_count: usize,
    },
    /// A face loop was declared with fewer than three vertices.
    #[error("face must reference at least 3 vertices, got {0}")]
    FaceTooShort(usize),
    /// The one-shot command was invoked with nothing selected.
    #[error("selection is empty: expected exactly one mesh")]
    EmptySelection,
    /// The one-shot command was invoked with more than one mesh selected.
    #[error("selection holds {0} meshes: expected exactly one")]
    AmbiguousSelection(usize),
    /// A sphere tessellation was requested below the minimum resolution.
    #[error("sphere tessellation needs at least 2 rings and 3 segments, got {rings}x{segments}")]
    TessellationTooCoarse {
        /// Requested latitude divisions.
        rings: u32,
        /// Requested longitude divisions.
        segments: u32,
    },
}
