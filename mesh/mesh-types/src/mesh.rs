//! Indexed triangle mesh.

use crate::{Aabb, MeshBounds, MeshTopology, Triangle, Vertex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh: a vertex list and a face list.
///
/// Faces reference vertices by position in `vertices`, so vertex order is
/// part of the mesh's identity. Faces are wound counter-clockwise when
/// viewed from outside, giving outward normals by the right-hand rule.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex, MeshTopology};
///
/// let mesh = IndexedMesh::from_parts(
///     vec![
///         Vertex::from_coords(0.0, 0.0, 0.0),
///         Vertex::from_coords(1.0, 0.0, 0.0),
///         Vertex::from_coords(0.0, 1.0, 0.0),
///     ],
///     vec![[0, 1, 2]],
/// );
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into `vertices`.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create an empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create an empty mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from an owned vertex list and face list.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Copy coordinate and index tables into a new mesh.
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, MeshTopology};
    ///
    /// const V: &[[f64; 3]] = &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    /// const F: &[[u32; 3]] = &[[0, 1, 2]];
    ///
    /// let mesh = IndexedMesh::from_tables(V, F);
    /// assert_eq!(mesh.vertex_count(), 3);
    /// ```
    #[must_use]
    pub fn from_tables(positions: &[[f64; 3]], faces: &[[u32; 3]]) -> Self {
        Self {
            vertices: positions.iter().copied().map(Vertex::from_array).collect(),
            faces: faces.to_vec(),
        }
    }

    /// Split the mesh back into its vertex list and face list.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Vertex>, Vec<[u32; 3]>) {
        (self.vertices, self.faces)
    }

    /// First face index that does not reference an existing vertex.
    ///
    /// Returns `(face_index, vertex_index)`, or `None` when every index is
    /// in range.
    #[must_use]
    pub fn first_invalid_index(&self) -> Option<(usize, u32)> {
        let vertex_count = self.vertices.len();
        self.faces.iter().enumerate().find_map(|(face_idx, face)| {
            face.iter()
                .find(|&&v| v as usize >= vertex_count)
                .map(|&v| (face_idx, v))
        })
    }

    /// Signed volume via the divergence theorem.
    ///
    /// Positive for a closed mesh with outward winding, negative when
    /// inside-out, meaningless for an open mesh. Faces with out-of-range
    /// indices are skipped.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.triangles()
            .map(|t| t.v0.coords.dot(&t.v1.coords.cross(&t.v2.coords)))
            .sum::<f64>()
            / 6.0
    }

    /// Absolute volume.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }

    /// Whether the signed volume is negative.
    #[inline]
    #[must_use]
    pub fn is_inside_out(&self) -> bool {
        self.signed_volume() < 0.0
    }

    /// Total surface area.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|tri| tri.area()).sum()
    }

    /// Reverse every face's winding.
    pub fn flip_normals(&mut self) {
        for face in &mut self.faces {
            face.swap(1, 2);
        }
    }

    fn resolve(&self, [i0, i1, i2]: [u32; 3]) -> Option<Triangle> {
        Some(Triangle::new(
            self.vertices.get(i0 as usize)?.position,
            self.vertices.get(i1 as usize)?.position,
            self.vertices.get(i2 as usize)?.position,
        ))
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    fn face(&self, index: usize) -> Option<[u32; 3]> {
        self.faces.get(index).copied()
    }

    fn triangle(&self, face_index: usize) -> Option<Triangle> {
        self.resolve(*self.faces.get(face_index)?)
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    fn faces(&self) -> impl Iterator<Item = [u32; 3]> {
        self.faces.iter().copied()
    }

    fn triangles(&self) -> impl Iterator<Item = Triangle> {
        self.faces.iter().filter_map(|&face| self.resolve(face))
    }
}

impl MeshBounds for IndexedMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }
}
