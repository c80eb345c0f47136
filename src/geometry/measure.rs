//! Volume and surface-area measurement for polygonal meshes.
//!
//! The volume of a closed mesh is decomposed into signed prisms, one per
//! triangle: each triangle is projected onto the XY plane, the planar area
//! of the projection is taken with the 2D shoelace formula, and the prism
//! between the triangle and the plane is weighted by the mean Z coordinate
//! of its corners. Summed with the sign of the face normal's Z component,
//! the prisms telescope to the enclosed volume (divergence theorem). The
//! result is only meaningful for closed meshes with consistent outward
//! winding; no validation is performed, and open or non-manifold input
//! yields a well-defined but meaningless number.
//!
//! Surface area is the sum of 3D triangle areas over each face's fan;
//! for planar faces this equals the planar face area.
//!
//! The projection axis is fixed to Z, assuming the conventional
//! right-handed frame. Degenerate triangles contribute zero to both sums.
//!
//! # Example
//! ```rust
//! use mesh_info::geometry::measure::measure;
//! use mesh_info::mesh::Space;
//! use mesh_info::mesh_generation::unit_cube;
//!
//! let cube = unit_cube()?;
//! let out = measure(&cube, Space::Object, true, true);
//! assert!((out.volume - 1.0).abs() < 1e-12);
//! assert!((out.area - 6.0).abs() < 1e-12);
//! # Ok::<(), mesh_info::mesh_error::MeshInfoError>(())
//! ```

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::mesh::{PolyMesh, Space};

/// Result of one measurement pass.
///
/// Both accumulators start at zero on every call; a quantity that was not
/// requested stays zero. The pair is valid only for the single mesh
/// snapshot it was computed from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasureOutput {
    /// Signed enclosed volume.
    pub volume: f64,
    /// Total face area.
    pub area: f64,
}

/// Measures the signed volume and/or surface area of `mesh` in `space`.
///
/// Skipping a quantity skips its work entirely, not just its output: with
/// `want_volume == false` no face normals are read and no prisms are
/// accumulated. Deterministic for identical input; `O(total triangle
/// count)` time, `O(1)` extra space.
pub fn measure(mesh: &PolyMesh, space: Space, want_volume: bool, want_area: bool) -> MeasureOutput {
    let mut out = MeasureOutput::default();
    if !want_volume && !want_area {
        return out;
    }
    for face in 0..mesh.face_count() {
        measure_face(mesh, face, space, want_volume, want_area, &mut out);
    }
    out
}

/// Parallel variant of [`measure`]: the same reduction, folded over faces
/// with rayon.
///
/// Floating-point summation order differs from the serial pass, so results
/// may disagree in the last bits.
#[cfg(feature = "rayon")]
pub fn measure_par(
    mesh: &PolyMesh,
    space: Space,
    want_volume: bool,
    want_area: bool,
) -> MeasureOutput {
    use rayon::prelude::*;
    if !want_volume && !want_area {
        return MeasureOutput::default();
    }
    (0..mesh.face_count())
        .into_par_iter()
        .map(|face| {
            let mut out = MeasureOutput::default();
            measure_face(mesh, face, space, want_volume, want_area, &mut out);
            out
        })
        .reduce(MeasureOutput::default, |a, b| MeasureOutput {
            volume: a.volume + b.volume,
            area: a.area + b.area,
        })
}

/// Accumulates one face into `out`, fan-triangulating around its first
/// corner.
fn measure_face(
    mesh: &PolyMesh,
    face: usize,
    space: Space,
    want_volume: bool,
    want_area: bool,
    out: &mut MeasureOutput,
) {
    let corners = mesh.face(face);
    let apex = mesh.position(corners[0], space);

    if want_volume {
        let normal = mesh.face_normal(face, space);
        for (&b, &c) in corners[1..].iter().tuple_windows() {
            let pb = mesh.position(b, space);
            let pc = mesh.position(c, space);
            let projected = projected_triangle_area(apex, pb, pc);
            let prism = prism_volume(apex, pb, pc, projected);
            if normal[2] < 0.0 {
                out.volume -= prism;
            } else {
                out.volume += prism;
            }
        }
    }

    if want_area {
        for (&b, &c) in corners[1..].iter().tuple_windows() {
            let pb = mesh.position(b, space);
            let pc = mesh.position(c, space);
            out.area += triangle_area(apex, pb, pc);
        }
    }
}

/// Area of the triangle's projection onto the XY plane, via the 2D
/// shoelace formula.
fn projected_triangle_area(p1: [f64; 3], p2: [f64; 3], p3: [f64; 3]) -> f64 {
    (p1[0] * (p3[1] - p2[1]) + p2[0] * (p1[1] - p3[1]) + p3[0] * (p2[1] - p1[1])).abs() * 0.5
}

/// Volume of the prism swept from the XY plane up to the triangle along Z:
/// mean corner depth times projected area.
fn prism_volume(p1: [f64; 3], p2: [f64; 3], p3: [f64; 3], projected_area: f64) -> f64 {
    (p1[2] + p2[2] + p3[2]) / 3.0 * projected_area
}

/// True 3D area of a triangle.
fn triangle_area(p1: [f64; 3], p2: [f64; 3], p3: [f64; 3]) -> f64 {
    0.5 * norm(cross(sub(p2, p1), sub(p3, p1)))
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn norm(a: [f64; 3]) -> f64 {
    (a[0] * a[0] + a[1] * a[1] + a[2] * a[2]).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh_generation::unit_cube;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn projected_area_drops_depth() {
        // Right triangle in a tilted plane; its XY shadow has area 0.5.
        let a = [0.0, 0.0, 1.0];
        let b = [1.0, 0.0, 3.0];
        let c = [0.0, 1.0, -2.0];
        assert!(approx(projected_triangle_area(a, b, c), 0.5));
    }

    #[test]
    fn prism_uses_mean_depth() {
        let a = [0.0, 0.0, 1.0];
        let b = [1.0, 0.0, 2.0];
        let c = [0.0, 1.0, 3.0];
        let area = projected_triangle_area(a, b, c);
        assert!(approx(prism_volume(a, b, c, area), 2.0 * 0.5));
    }

    #[test]
    fn triangle_area_is_three_dimensional() {
        // Vertical triangle: zero XY shadow, full 3D area.
        let a = [0.0, 0.0, 0.0];
        let b = [1.0, 0.0, 0.0];
        let c = [0.0, 0.0, 1.0];
        assert!(approx(projected_triangle_area(a, b, c), 0.0));
        assert!(approx(triangle_area(a, b, c), 0.5));
    }

    #[test]
    fn degenerate_triangle_contributes_nothing() {
        let p = [2.0, -1.0, 4.0];
        assert!(approx(triangle_area(p, p, p), 0.0));
        assert!(approx(projected_triangle_area(p, p, p), 0.0));
    }

    #[test]
    fn skipped_quantities_stay_zero() {
        let cube = unit_cube().unwrap();
        let volume_only = measure(&cube, Space::World, true, false);
        assert!(approx(volume_only.volume, 1.0));
        assert_eq!(volume_only.area, 0.0);
        let area_only = measure(&cube, Space::World, false, true);
        assert_eq!(area_only.volume, 0.0);
        assert!(approx(area_only.area, 6.0));
        let neither = measure(&cube, Space::World, false, false);
        assert_eq!(neither, MeasureOutput::default());
    }

    #[test]
    fn empty_mesh_measures_zero() {
        let mesh = PolyMesh::new();
        assert_eq!(measure(&mesh, Space::World, true, true), MeasureOutput::default());
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_agrees_with_serial() {
        let sphere = crate::mesh_generation::uv_sphere(1.0, 16, 32).unwrap();
        let serial = measure(&sphere, Space::Object, true, true);
        let parallel = measure_par(&sphere, Space::Object, true, true);
        assert!((serial.volume - parallel.volume).abs() < 1e-9);
        assert!((serial.area - parallel.area).abs() < 1e-9);
    }
}
