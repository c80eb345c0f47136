//! One-shot measurement command.
//!
//! [`poly_volume`] is the standalone rendition of a host command: hand it
//! the current selection and its flags, get back either the volume as a
//! plain value or, with construction history on, a live
//! [`MeshInfoNode`] wired to the selected mesh.

use serde::{Deserialize, Serialize};

use crate::geometry::measure::measure;
use crate::mesh::{PolyMesh, Space};
use crate::mesh_error::MeshInfoError;
use crate::node::MeshInfoNode;

/// Flags accepted by [`poly_volume`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolyVolumeOptions {
    /// Measure in world space (the default) or object space.
    pub world_space: bool,
    /// Return a persistent live node instead of a one-time value.
    pub construction_history: bool,
}

impl Default for PolyVolumeOptions {
    fn default() -> Self {
        Self {
            world_space: true,
            construction_history: false,
        }
    }
}

impl PolyVolumeOptions {
    fn space(self) -> Space {
        if self.world_space {
            Space::World
        } else {
            Space::Object
        }
    }
}

/// Outcome of [`poly_volume`].
#[derive(Clone, Debug)]
pub enum PolyVolume {
    /// One-time measurement value.
    Value(f64),
    /// Persistent measurement unit that keeps reevaluating as its inputs
    /// change (construction history).
    Node(MeshInfoNode),
}

/// Measures the volume of the single selected mesh.
///
/// The selection must hold exactly one mesh; empty and multi-mesh
/// selections are rejected before any measurement runs. Without
/// construction history only the volume is computed (the area pass is
/// skipped entirely) and returned as [`PolyVolume::Value`]; with it, a
/// [`MeshInfoNode`] wired to the selection and space is returned instead.
///
/// # Example
/// ```rust
/// use mesh_info::command::{PolyVolume, PolyVolumeOptions, poly_volume};
/// use mesh_info::mesh_generation::unit_cube;
///
/// let selection = [unit_cube()?];
/// match poly_volume(&selection, PolyVolumeOptions::default())? {
///     PolyVolume::Value(volume) => assert!((volume - 1.0).abs() < 1e-12),
///     PolyVolume::Node(_) => unreachable!("construction history defaults off"),
/// }
/// # Ok::<(), mesh_info::mesh_error::MeshInfoError>(())
/// ```
pub fn poly_volume(
    selection: &[PolyMesh],
    options: PolyVolumeOptions,
) -> Result<PolyVolume, MeshInfoError> {
    let mesh = match selection {
        [] => return Err(MeshInfoError::EmptySelection),
        [mesh] => mesh,
        more => return Err(MeshInfoError::AmbiguousSelection(more.len())),
    };

    let space = options.space();
    log::debug!(
        "polyVolume: space={space:?}, construction_history={}",
        options.construction_history
    );

    if options.construction_history {
        Ok(PolyVolume::Node(MeshInfoNode::with_mesh(
            mesh.clone(),
            space,
        )))
    } else {
        Ok(PolyVolume::Value(measure(mesh, space, true, false).volume))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh_generation::unit_cube;

    #[test]
    fn rejects_empty_selection() {
        let result = poly_volume(&[], PolyVolumeOptions::default());
        assert_eq!(result.unwrap_err(), MeshInfoError::EmptySelection);
    }

    #[test]
    fn rejects_multi_mesh_selection() {
        let selection = [unit_cube().unwrap(), unit_cube().unwrap()];
        let result = poly_volume(&selection, PolyVolumeOptions::default());
        assert_eq!(result.unwrap_err(), MeshInfoError::AmbiguousSelection(2));
    }

    #[test]
    fn defaults_are_world_space_without_history() {
        let options = PolyVolumeOptions::default();
        assert!(options.world_space);
        assert!(!options.construction_history);
    }

    #[test]
    fn construction_history_returns_a_wired_node() {
        let selection = [unit_cube().unwrap()];
        let options = PolyVolumeOptions {
            world_space: false,
            construction_history: true,
        };
        match poly_volume(&selection, options).unwrap() {
            PolyVolume::Node(node) => {
                assert_eq!(node.space(), Space::Object);
                assert!((node.volume() - 1.0).abs() < 1e-12);
                assert!((node.area() - 6.0).abs() < 1e-12);
            }
            PolyVolume::Value(_) => panic!("expected a node with construction history on"),
        }
    }
}
