//! Traits for mesh types.

use crate::{Aabb, Triangle, Vertex};
use nalgebra::Point3;

/// Read access to a triangle mesh's topology.
pub trait MeshTopology {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of triangular faces.
    fn face_count(&self) -> usize;

    /// Whether the mesh has no vertices or no faces.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 || self.face_count() == 0
    }

    /// Vertex at `index`, or `None` when out of range.
    fn vertex(&self, index: usize) -> Option<&Vertex>;

    /// Face at `index` as vertex indices, or `None` when out of range.
    fn face(&self, index: usize) -> Option<[u32; 3]>;

    /// Face at `face_index` with resolved positions.
    ///
    /// Returns `None` when the face is out of range or references a
    /// missing vertex.
    fn triangle(&self, face_index: usize) -> Option<Triangle>;

    /// Iterate over vertices.
    fn vertices(&self) -> impl Iterator<Item = &Vertex>;

    /// Iterate over faces.
    fn faces(&self) -> impl Iterator<Item = [u32; 3]>;

    /// Iterate over faces with resolved positions, skipping faces that
    /// reference missing vertices.
    fn triangles(&self) -> impl Iterator<Item = Triangle>;
}

/// Types that can compute a bounding box.
pub trait MeshBounds {
    /// Axis-aligned bounds; empty when there are no vertices.
    fn bounds(&self) -> Aabb;

    /// Bounds, or `None` when empty.
    fn bounds_opt(&self) -> Option<Aabb> {
        let b = self.bounds();
        if b.is_empty() { None } else { Some(b) }
    }

    /// Centre of the bounding box.
    fn center(&self) -> Point3<f64> {
        self.bounds().center()
    }
}
