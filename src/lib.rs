#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-info
//!
//! mesh-info computes the signed volume and surface area of closed polygonal
//! meshes. The measurement itself is a single pure function over a
//! triangulated mesh snapshot; around it the crate offers the two classic
//! invocation surfaces of a host package: a one-shot command
//! ([`command::poly_volume`]) and a live node ([`node::MeshInfoNode`]) whose
//! outputs reevaluate whenever its inputs change.
//!
//! ## Features
//! - CSR-backed polygonal mesh snapshots with object/world placement
//! - Divergence-theorem volume from per-triangle signed prisms
//! - Fan-triangulated surface area
//! - Command surface with world-space and construction-history flags
//! - Lazily reevaluating measurement node with cache invalidation
//! - Reference generators (cube, box, uv sphere) for tests and benches
//!
//! ## Determinism
//! Measurement is a deterministic fold over faces in insertion order;
//! identical snapshots give identical results in either coordinate space.
//! The optional `rayon` feature adds a parallel fold whose summation order
//! (and therefore last-bit result) may differ.
//!
//! ## Conventions
//! A right-handed frame with Z as the depth axis, and consistent outward
//! face winding across the mesh. Volume is decomposed into prisms along Z;
//! meshes wound inward measure negative.
//!
//! ## Usage
//! Add `mesh-info` as a dependency in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! mesh-info = "0.1"
//! # Optional features:
//! # features = ["rayon"]
//! ```

// Re-export our major subsystems:
pub mod cache;
pub mod command;
pub mod geometry;
pub mod mesh;
pub mod mesh_error;
pub mod mesh_generation;
pub mod node;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::cache::InvalidateCache;
    pub use crate::command::{PolyVolume, PolyVolumeOptions, poly_volume};
    #[cfg(feature = "rayon")]
    pub use crate::geometry::measure::measure_par;
    pub use crate::geometry::measure::{MeasureOutput, measure};
    pub use crate::mesh::{PolyMesh, Space, Transform};
    pub use crate::mesh_error::MeshInfoError;
    pub use crate::mesh_generation::{box_mesh, unit_cube, uv_sphere};
    pub use crate::node::{ATTRIBUTES, AttributeRole, AttributeSpec, MeshInfoNode, NODE_NAME};
}
