//! Mesh vertices.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mesh vertex.
///
/// Solids in the catalog carry positions only; the wrapper leaves room for
/// per-vertex data without changing the face index contract.
///
/// # Example
///
/// ```
/// use mesh_types::{Vertex, Point3};
///
/// let a = Vertex::new(Point3::new(1.0, -1.0, 1.0));
/// let b = Vertex::from_coords(1.0, -1.0, 1.0);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f64>,
}

impl Vertex {
    /// Create a vertex at `position`.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self { position }
    }

    /// Create a vertex from raw coordinates.
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Create a vertex from an `[x, y, z]` array.
    ///
    /// ```
    /// use mesh_types::Vertex;
    ///
    /// let v = Vertex::from_array([0.0, 0.0, -1.0]);
    /// assert_eq!(v.to_array(), [0.0, 0.0, -1.0]);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_array([x, y, z]: [f64; 3]) -> Self {
        Self::from_coords(x, y, z)
    }

    /// Position as an `[x, y, z]` array.
    #[inline]
    #[must_use]
    pub fn to_array(&self) -> [f64; 3] {
        [self.position.x, self.position.y, self.position.z]
    }

    /// Euclidean distance from the origin.
    #[inline]
    #[must_use]
    pub fn distance_from_origin(&self) -> f64 {
        self.position.coords.norm()
    }
}

impl From<[f64; 3]> for Vertex {
    fn from(coords: [f64; 3]) -> Self {
        Self::from_array(coords)
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn array_conversion() {
        let v: Vertex = [1.0, 2.0, 3.0].into();
        assert_eq!(v.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn distance_of_cube_corner() {
        let v = Vertex::from_coords(-1.0, 1.0, -1.0);
        assert_relative_eq!(v.distance_from_origin(), 3.0_f64.sqrt());
    }
}
