//! Live measurement node: volume/area outputs that track their inputs.
//!
//! [`MeshInfoNode`] is the standalone analog of a dependency-graph utility
//! node: two writable inputs (mesh geometry and coordinate space) and two
//! readable outputs (volume and area). Outputs are cached; any input edit
//! invalidates the cache, and the next output read reevaluates both
//! quantities in a single measurement pass. That is the host's
//! mark-dirty / evaluate-on-demand cycle, expressed as cache invalidation.
//! Useful for watching whether a deforming mesh keeps its volume: swap in
//! each new snapshot and read the outputs again.
//!
//! With no mesh connected, both outputs are defined to be zero.
//!
//! # Example
//! ```rust
//! use mesh_info::node::MeshInfoNode;
//! use mesh_info::mesh_generation::unit_cube;
//!
//! let mut node = MeshInfoNode::new();
//! assert_eq!(node.volume(), 0.0); // nothing connected
//!
//! node.set_mesh(Some(unit_cube()?));
//! assert!((node.volume() - 1.0).abs() < 1e-12);
//! assert!((node.area() - 6.0).abs() < 1e-12);
//! # Ok::<(), mesh_info::mesh_error::MeshInfoError>(())
//! ```

use once_cell::sync::OnceCell;

use crate::cache::InvalidateCache;
use crate::geometry::measure::{MeasureOutput, measure};
use crate::mesh::{PolyMesh, Space};

/// Node type name, as a host registry would list it.
pub const NODE_NAME: &str = "meshInfo";

/// Whether an attribute is written by the caller or read back as a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeRole {
    /// Writable by the caller, never read back.
    Input,
    /// Computed by the node, read-only for the caller.
    Output,
}

/// Declarative description of one node attribute.
///
/// [`ATTRIBUTES`] describes the node surface the way a host registry would
/// consume it, without tying the node to any registration ABI.
#[derive(Clone, Copy, Debug)]
pub struct AttributeSpec {
    /// Long attribute name.
    pub name: &'static str,
    /// Short attribute name.
    pub short_name: &'static str,
    /// Input or output.
    pub role: AttributeRole,
}

/// Attribute table for [`MeshInfoNode`]: two inputs, two outputs.
pub const ATTRIBUTES: [AttributeSpec; 4] = [
    AttributeSpec {
        name: "inMesh",
        short_name: "in",
        role: AttributeRole::Input,
    },
    AttributeSpec {
        name: "space",
        short_name: "s",
        role: AttributeRole::Input,
    },
    AttributeSpec {
        name: "volume",
        short_name: "v",
        role: AttributeRole::Output,
    },
    AttributeSpec {
        name: "area",
        short_name: "a",
        role: AttributeRole::Output,
    },
];

/// A measurement node with cached, lazily reevaluated outputs.
#[derive(Clone, Debug, Default)]
pub struct MeshInfoNode {
    in_mesh: Option<PolyMesh>,
    space: Space,
    outputs: OnceCell<MeasureOutput>,
}

impl MeshInfoNode {
    /// Creates a node with no mesh connected and world space selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node already wired to `mesh`, as the command's
    /// construction-history path builds it.
    pub fn with_mesh(mesh: PolyMesh, space: Space) -> Self {
        Self {
            in_mesh: Some(mesh),
            space,
            outputs: OnceCell::new(),
        }
    }

    /// Connects (or disconnects, with `None`) the mesh input.
    pub fn set_mesh(&mut self, mesh: Option<PolyMesh>) {
        self.in_mesh = mesh;
        self.invalidate_cache();
    }

    /// Sets the coordinate-space input.
    pub fn set_space(&mut self, space: Space) {
        self.space = space;
        self.invalidate_cache();
    }

    /// The connected mesh, if any.
    pub fn mesh(&self) -> Option<&PolyMesh> {
        self.in_mesh.as_ref()
    }

    /// The selected coordinate space.
    #[inline]
    pub fn space(&self) -> Space {
        self.space
    }

    /// The volume output, reevaluating if an input changed since the last
    /// read.
    pub fn volume(&self) -> f64 {
        self.outputs().volume
    }

    /// The area output, reevaluating if an input changed since the last
    /// read.
    pub fn area(&self) -> f64 {
        self.outputs().area
    }

    /// Whether the cached outputs are valid (no reevaluation pending).
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.outputs.get().is_some()
    }

    fn outputs(&self) -> &MeasureOutput {
        self.outputs.get_or_init(|| match &self.in_mesh {
            Some(mesh) => {
                log::trace!("{NODE_NAME}: reevaluating outputs");
                measure(mesh, self.space, true, true)
            }
            // Defined outputs for a missing input; no error.
            None => MeasureOutput::default(),
        })
    }
}

impl InvalidateCache for MeshInfoNode {
    #[inline]
    fn invalidate_cache(&mut self) {
        self.outputs.take();
    }
}
