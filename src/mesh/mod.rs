//! Polygonal mesh snapshots consumed by the measurement routines.
//!
//! [`PolyMesh`] stores vertex positions in object space together with a
//! CSR-style face table: an offset array plus one flat vertex-index array,
//! so every face loop is a contiguous slice and iteration is deterministic
//! in insertion order. Faces are validated as they are added; measurement
//! code downstream never needs bounds checks.
//!
//! The mesh is a snapshot owned by the caller: the measurement routines
//! never mutate it, and a result is only valid for the snapshot it was
//! computed from.

pub mod transform;

pub use transform::{Space, Transform};

use serde::{Deserialize, Serialize};

use crate::mesh_error::MeshInfoError;

/// A polygonal mesh: vertex positions, face loops, and an object-to-world
/// transform.
///
/// # Example
/// ```rust
/// use mesh_info::mesh::PolyMesh;
///
/// let mut mesh = PolyMesh::new();
/// let a = mesh.add_vertex([0.0, 0.0, 0.0]);
/// let b = mesh.add_vertex([1.0, 0.0, 0.0]);
/// let c = mesh.add_vertex([0.0, 1.0, 0.0]);
/// mesh.add_face(&[a, b, c])?;
/// assert_eq!(mesh.face_count(), 1);
/// assert_eq!(mesh.face(0), &[a, b, c]);
/// # Ok::<(), mesh_info::mesh_error::MeshInfoError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolyMesh {
    /// Vertex positions in object space.
    positions: Vec<[f64; 3]>,
    /// CSR offsets into `face_vertices`; length is `face_count() + 1`.
    face_offsets: Vec<u32>,
    /// Flat array of face vertex indices, one contiguous run per face.
    face_vertices: Vec<u32>,
    /// Object-to-world placement of the mesh.
    transform: Transform,
}

impl Default for PolyMesh {
    fn default() -> Self {
        Self {
            positions: Vec::new(),
            face_offsets: vec![0],
            face_vertices: Vec::new(),
            transform: Transform::identity(),
        }
    }
}

impl PolyMesh {
    /// Creates a new, empty mesh with an identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: [f64; 3]) -> u32 {
        self.positions.push(position);
        (self.positions.len() - 1) as u32
    }

    /// Adds a face given its vertex loop, in winding order.
    ///
    /// The loop must reference at least three existing vertices; anything
    /// else is rejected so that measurement can index without checks.
    pub fn add_face(&mut self, corners: &[u32]) -> Result<(), MeshInfoError> {
        if corners.len() < 3 {
            return Err(MeshInfoError::FaceTooShort(corners.len()));
        }
        if let Some(&vertex) = corners.iter().find(|&&v| v as usize >= self.positions.len()) {
            return Err(MeshInfoError::FaceVertexOutOfBounds {
                vertex,
                vertex_count: self.positions.len(),
            });
        }
        self.face_vertices.extend_from_slice(corners);
        self.face_offsets.push(self.face_vertices.len() as u32);
        #[cfg(debug_assertions)]
        self.debug_assert_consistent();
        Ok(())
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.face_offsets.len() - 1
    }

    /// True when the mesh has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.face_count() == 0
    }

    /// Total triangle count after fan triangulation of every face.
    pub fn triangle_count(&self) -> usize {
        self.faces().map(|face| face.len() - 2).sum()
    }

    /// The vertex loop of face `index`.
    #[inline]
    pub fn face(&self, index: usize) -> &[u32] {
        let start = self.face_offsets[index] as usize;
        let end = self.face_offsets[index + 1] as usize;
        &self.face_vertices[start..end]
    }

    /// Iterates over face loops in insertion order.
    pub fn faces(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.face_offsets
            .windows(2)
            .map(|pair| &self.face_vertices[pair[0] as usize..pair[1] as usize])
    }

    /// Position of vertex `vertex`, expressed in `space`.
    #[inline]
    pub fn position(&self, vertex: u32, space: Space) -> [f64; 3] {
        let p = self.positions[vertex as usize];
        match space {
            Space::Object => p,
            Space::World => self.transform.apply_point(p),
        }
    }

    /// Normal of face `index` in `space`, via Newell's method over the
    /// face loop.
    ///
    /// Evaluated on already-transformed points, so any affine transform is
    /// handled exactly. Returns the zero vector for degenerate faces; such
    /// faces contribute nothing to any measurement, so the ambiguous sign
    /// never matters.
    pub fn face_normal(&self, index: usize, space: Space) -> [f64; 3] {
        let corners = self.face(index);
        let mut n = [0.0; 3];
        for i in 0..corners.len() {
            let a = self.position(corners[i], space);
            let b = self.position(corners[(i + 1) % corners.len()], space);
            n[0] += (a[1] - b[1]) * (a[2] + b[2]);
            n[1] += (a[2] - b[2]) * (a[0] + b[0]);
            n[2] += (a[0] - b[0]) * (a[1] + b[1]);
        }
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        if len <= f64::EPSILON {
            return [0.0; 3];
        }
        [n[0] / len, n[1] / len, n[2] / len]
    }

    /// Sets the object-to-world transform.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// The object-to-world transform.
    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[cfg(debug_assertions)]
    fn debug_assert_consistent(&self) {
        debug_assert!(!self.face_offsets.is_empty(), "offset table is never empty");
        debug_assert_eq!(self.face_offsets[0], 0);
        debug_assert!(
            self.face_offsets.windows(2).all(|pair| pair[0] <= pair[1]),
            "face offsets must be monotone"
        );
        debug_assert_eq!(
            self.face_offsets.last().copied(),
            Some(self.face_vertices.len() as u32)
        );
    }
}
