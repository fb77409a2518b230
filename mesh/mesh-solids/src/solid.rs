//! Names for the five catalog entries.

use std::fmt;
use std::str::FromStr;

use mesh_types::{IndexedMesh, Point3, Triangle, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::{
    CUBE_FACES, CUBE_VERTICES, DODECAHEDRON_FACES, DODECAHEDRON_VERTICES, ICOSAHEDRON_FACES,
    ICOSAHEDRON_VERTICES, OCTAHEDRON_FACES, OCTAHEDRON_VERTICES, TETRAHEDRON_FACES,
    TETRAHEDRON_VERTICES,
};
use crate::error::{SolidsError, SolidsResult};

/// One of the five Platonic solids.
///
/// # Example
///
/// ```
/// use mesh_solids::Solid;
/// use mesh_types::MeshTopology;
///
/// let solid: Solid = "Icosahedron".parse().unwrap();
/// assert_eq!(solid, Solid::Icosahedron);
/// assert_eq!(solid.file_name(), "icosahedron.obj");
/// assert_eq!(solid.mesh().face_count(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Solid {
    /// Four triangles.
    Tetrahedron,
    /// Eight triangles.
    Octahedron,
    /// Six squares.
    Cube,
    /// Twenty triangles.
    Icosahedron,
    /// Twelve pentagons.
    Dodecahedron,
}

impl Solid {
    /// Every solid, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Tetrahedron,
        Self::Octahedron,
        Self::Cube,
        Self::Icosahedron,
        Self::Dodecahedron,
    ];

    /// Lower-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tetrahedron => "tetrahedron",
            Self::Octahedron => "octahedron",
            Self::Cube => "cube",
            Self::Icosahedron => "icosahedron",
            Self::Dodecahedron => "dodecahedron",
        }
    }

    /// File name the export tool writes this solid to.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.obj", self.name())
    }

    /// Vertex coordinate table.
    #[must_use]
    pub const fn vertices(self) -> &'static [[f64; 3]] {
        match self {
            Self::Tetrahedron => TETRAHEDRON_VERTICES,
            Self::Octahedron => OCTAHEDRON_VERTICES,
            Self::Cube => CUBE_VERTICES,
            Self::Icosahedron => ICOSAHEDRON_VERTICES,
            Self::Dodecahedron => DODECAHEDRON_VERTICES,
        }
    }

    /// Triangle index table.
    #[must_use]
    pub const fn faces(self) -> &'static [[u32; 3]] {
        match self {
            Self::Tetrahedron => TETRAHEDRON_FACES,
            Self::Octahedron => OCTAHEDRON_FACES,
            Self::Cube => CUBE_FACES,
            Self::Icosahedron => ICOSAHEDRON_FACES,
            Self::Dodecahedron => DODECAHEDRON_FACES,
        }
    }

    /// A freshly allocated mesh for this solid.
    #[must_use]
    pub fn mesh(self) -> IndexedMesh {
        match self {
            Self::Tetrahedron => crate::tetrahedron(),
            Self::Octahedron => crate::octahedron(),
            Self::Cube => crate::cube(),
            Self::Icosahedron => crate::icosahedron(),
            Self::Dodecahedron => crate::dodecahedron(),
        }
    }

    /// Number of sides of each regular face.
    #[must_use]
    pub const fn polygon_sides(self) -> usize {
        match self {
            Self::Tetrahedron | Self::Octahedron | Self::Icosahedron => 3,
            Self::Cube => 4,
            Self::Dodecahedron => 5,
        }
    }

    /// Number of regular faces.
    #[must_use]
    pub const fn polygon_count(self) -> usize {
        self.faces().len() / (self.polygon_sides() - 2)
    }

    /// Number of edges of the polyhedron, ignoring triangulation diagonals.
    #[must_use]
    pub const fn edge_count(self) -> usize {
        self.polygon_count() * self.polygon_sides() / 2
    }

    /// The regular faces, reassembled from their fan triangles.
    ///
    /// Triangles that share their first vertex and lie in one plane form a
    /// fan; the fan is stitched into a polygon along its interior edges.
    /// Fans need not be consecutive in [`faces`](Self::faces): the cube's
    /// `x = -1` side is split between its seventh and last triangles.
    /// Polygons come out in order of their first triangle and keep the
    /// triangles' winding.
    ///
    /// ```
    /// use mesh_solids::Solid;
    ///
    /// let quads = Solid::Cube.polygons();
    /// assert_eq!(quads.len(), 6);
    /// assert_eq!(quads[0], vec![0, 1, 4, 2]);
    /// assert_eq!(quads[3], vec![7, 4, 1, 5]);
    /// ```
    #[must_use]
    pub fn polygons(self) -> Vec<Vec<u32>> {
        let vertices = self.vertices();
        let normal = |&[a, b, c]: &[u32; 3]| {
            let p = |i: u32| Point3::from(vertices[i as usize]);
            Triangle::new(p(a), p(b), p(c)).normal_unnormalized()
        };

        let mut fans: Vec<(Vector3<f64>, Vec<[u32; 3]>)> = Vec::new();
        for tri in self.faces() {
            let n = normal(tri);
            let fan = fans
                .iter()
                .position(|(fan_normal, fan)| {
                    fan[0][0] == tri[0] && same_direction(fan_normal, &n)
                });
            match fan {
                Some(i) => fans[i].1.push(*tri),
                None => fans.push((n, vec![*tri])),
            }
        }

        fans.iter().map(|(_, fan)| stitch_fan(fan)).collect()
    }
}

fn same_direction(a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
    a.dot(b) > (1.0 - 1e-9) * a.norm() * b.norm()
}

/// Walk a fan from its leading triangle, appending each next rim vertex.
fn stitch_fan(fan: &[[u32; 3]]) -> Vec<u32> {
    // The leading triangle's second vertex is not the third of any other.
    let start = fan
        .iter()
        .position(|t| !fan.iter().any(|other| other[2] == t[1]))
        .unwrap_or(0);

    let mut polygon = fan[start].to_vec();
    while polygon.len() < fan.len() + 2 {
        let rim = polygon[polygon.len() - 1];
        match fan.iter().find(|t| t[1] == rim) {
            Some(next) => polygon.push(next[2]),
            None => break,
        }
    }
    polygon
}

impl fmt::Display for Solid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Solid {
    type Err = SolidsError;

    fn from_str(s: &str) -> SolidsResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tetrahedron" => Ok(Self::Tetrahedron),
            "octahedron" => Ok(Self::Octahedron),
            "cube" | "hexahedron" => Ok(Self::Cube),
            "icosahedron" => Ok(Self::Icosahedron),
            "dodecahedron" => Ok(Self::Dodecahedron),
            _ => Err(SolidsError::UnknownSolid {
                name: s.to_string(),
            }),
        }
    }
}
