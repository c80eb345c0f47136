//! Affine transforms and the coordinate-space selector.
//!
//! Mesh points are stored in object space; a [`Transform`] carries the
//! object-to-world placement. [`Space`] selects which frame a measurement
//! reads points in.

use serde::{Deserialize, Serialize};

/// Coordinate frame in which mesh point coordinates are expressed.
///
/// `World` is scene-global: points pass through the mesh's object-to-world
/// transform. `Object` is local to the mesh and ignores the transform. The
/// default is `World`, matching the live node's space input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Space {
    /// Local frame of the mesh.
    Object,
    /// Scene-global frame.
    #[default]
    World,
}

/// Row-major 4x4 affine transform.
///
/// The last row must stay `[0, 0, 0, 1]`; the constructors below uphold
/// this, and composition of such transforms preserves it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    rows: [[f64; 4]; 4],
}

impl Default for Transform {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The identity transform.
    pub const fn identity() -> Self {
        Self {
            rows: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Translation by `[tx, ty, tz]`.
    pub const fn from_translation(t: [f64; 3]) -> Self {
        Self {
            rows: [
                [1.0, 0.0, 0.0, t[0]],
                [0.0, 1.0, 0.0, t[1]],
                [0.0, 0.0, 1.0, t[2]],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Per-axis scale by `[sx, sy, sz]`.
    pub const fn from_scale(s: [f64; 3]) -> Self {
        Self {
            rows: [
                [s[0], 0.0, 0.0, 0.0],
                [0.0, s[1], 0.0, 0.0],
                [0.0, 0.0, s[2], 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Uniform scale by `k`.
    pub const fn from_uniform_scale(k: f64) -> Self {
        Self::from_scale([k, k, k])
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn from_rotation_x(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            rows: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, cos, -sin, 0.0],
                [0.0, sin, cos, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn from_rotation_y(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            rows: [
                [cos, 0.0, sin, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [-sin, 0.0, cos, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn from_rotation_z(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            rows: [
                [cos, -sin, 0.0, 0.0],
                [sin, cos, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Compose with `outer`, yielding the transform that applies `self`
    /// first and `outer` second.
    pub fn then(&self, outer: &Transform) -> Transform {
        let mut rows = [[0.0; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| outer.rows[i][k] * self.rows[k][j]).sum();
            }
        }
        Transform { rows }
    }

    /// Apply to a point (the translation column participates).
    #[inline]
    pub fn apply_point(&self, p: [f64; 3]) -> [f64; 3] {
        let mut out = [0.0; 3];
        for (o, row) in out.iter_mut().zip(&self.rows) {
            *o = row[0] * p[0] + row[1] * p[1] + row[2] * p[2] + row[3];
        }
        out
    }
}
