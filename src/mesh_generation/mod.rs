//! Reference mesh generators used by tests, benches, and examples.
//!
//! Small fixed shapes with consistent outward winding. All faces are
//! planar convex loops, so fan triangulation reproduces them exactly.

use std::f64::consts::PI;

use crate::mesh::PolyMesh;
use crate::mesh_error::MeshInfoError;

/// Axis-aligned unit cube centered at the origin: 8 vertices, 6 quad
/// faces (12 triangles once fanned), volume 1, area 6.
pub fn unit_cube() -> Result<PolyMesh, MeshInfoError> {
    box_mesh(1.0, 1.0, 1.0)
}

/// Axis-aligned box centered at the origin with the given extents along
/// X, Y, and Z.
pub fn box_mesh(width: f64, depth: f64, height: f64) -> Result<PolyMesh, MeshInfoError> {
    let (x, y, z) = (width / 2.0, depth / 2.0, height / 2.0);
    let mut mesh = PolyMesh::new();
    let corners = [
        [-x, -y, -z],
        [x, -y, -z],
        [x, y, -z],
        [-x, y, -z],
        [-x, -y, z],
        [x, -y, z],
        [x, y, z],
        [-x, y, z],
    ];
    for corner in corners {
        mesh.add_vertex(corner);
    }
    // Outward winding (counter-clockwise seen from outside the box).
    let faces: [[u32; 4]; 6] = [
        [0, 3, 2, 1], // bottom
        [4, 5, 6, 7], // top
        [0, 1, 5, 4], // front
        [1, 2, 6, 5], // right
        [2, 3, 7, 6], // back
        [3, 0, 4, 7], // left
    ];
    for face in &faces {
        mesh.add_face(face)?;
    }
    Ok(mesh)
}

/// Latitude/longitude sphere centered at the origin: triangle caps at the
/// poles, quad bands between interior rings, outward winding.
///
/// `rings` counts latitude divisions (at least 2) and `segments` counts
/// longitude divisions (at least 3). Volume and area converge to the
/// analytic sphere values as the tessellation refines.
pub fn uv_sphere(radius: f64, rings: u32, segments: u32) -> Result<PolyMesh, MeshInfoError> {
    if rings < 2 || segments < 3 {
        return Err(MeshInfoError::TessellationTooCoarse { rings, segments });
    }

    let mut mesh = PolyMesh::new();
    let north = mesh.add_vertex([0.0, 0.0, radius]);
    for ring in 1..rings {
        let polar = PI * f64::from(ring) / f64::from(rings);
        let (ring_radius, z) = (radius * polar.sin(), radius * polar.cos());
        for segment in 0..segments {
            let azimuth = 2.0 * PI * f64::from(segment) / f64::from(segments);
            mesh.add_vertex([ring_radius * azimuth.cos(), ring_radius * azimuth.sin(), z]);
        }
    }
    let south = mesh.add_vertex([0.0, 0.0, -radius]);

    // Vertex index of `segment` on interior ring `ring` (1-based rings).
    let at = |ring: u32, segment: u32| 1 + (ring - 1) * segments + segment % segments;

    for segment in 0..segments {
        mesh.add_face(&[north, at(1, segment), at(1, segment + 1)])?;
    }
    for ring in 1..rings - 1 {
        for segment in 0..segments {
            mesh.add_face(&[
                at(ring, segment),
                at(ring + 1, segment),
                at(ring + 1, segment + 1),
                at(ring, segment + 1),
            ])?;
        }
    }
    for segment in 0..segments {
        mesh.add_face(&[south, at(rings - 1, segment + 1), at(rings - 1, segment)])?;
    }
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_expected_counts() {
        let cube = unit_cube().unwrap();
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.face_count(), 6);
        assert_eq!(cube.triangle_count(), 12);
    }

    #[test]
    fn sphere_has_expected_counts() {
        let sphere = uv_sphere(1.0, 4, 6).unwrap();
        // Poles + 3 interior rings of 6.
        assert_eq!(sphere.vertex_count(), 2 + 3 * 6);
        // Two caps of 6 triangles + 2 bands of 6 quads.
        assert_eq!(sphere.face_count(), 6 + 6 + 2 * 6);
        assert_eq!(sphere.triangle_count(), 12 + 2 * 12);
    }

    #[test]
    fn sphere_rejects_coarse_tessellations() {
        assert_eq!(
            uv_sphere(1.0, 1, 8),
            Err(MeshInfoError::TessellationTooCoarse {
                rings: 1,
                segments: 8
            })
        );
        assert_eq!(
            uv_sphere(1.0, 4, 2),
            Err(MeshInfoError::TessellationTooCoarse {
                rings: 4,
                segments: 2
            })
        );
    }

    #[test]
    fn sphere_vertices_lie_on_the_sphere() {
        let radius = 2.5;
        let sphere = uv_sphere(radius, 5, 7).unwrap();
        for vertex in 0..sphere.vertex_count() {
            let p = sphere.position(vertex as u32, crate::mesh::Space::Object);
            let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((r - radius).abs() < 1e-12);
        }
    }
}
