//! Vertex and face tables for the five Platonic solids.
//!
//! Every solid is centred on the origin at one fixed scale. The cube,
//! tetrahedron and octahedron use 0/±1 coordinates; the icosahedron and
//! dodecahedron sit on golden rectangles.
//!
//! Faces are triangles wound counter-clockwise seen from outside. Solids
//! whose regular faces are not triangles list each polygon as a fan of
//! triangles sharing one corner. The dodecahedron keeps each fan's three
//! triangles together; the cube does not (see `CUBE_FACES`).

use mesh_types::IndexedMesh;

/// The golden ratio, `(1 + sqrt 5) / 2`.
///
/// Older copies of these tables round it to `1.618`; this is the full `f64`
/// value, so golden-ratio vertices lie exactly on their circumsphere.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Reciprocal of the golden ratio (equal to `PHI - 1`).
pub const INV_PHI: f64 = 1.0 / PHI;

pub(crate) const TETRAHEDRON_VERTICES: &[[f64; 3]] = &[
    [1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
];

pub(crate) const TETRAHEDRON_FACES: &[[u32; 3]] = &[[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]];

pub(crate) const OCTAHEDRON_VERTICES: &[[f64; 3]] = &[
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

pub(crate) const OCTAHEDRON_FACES: &[[u32; 3]] = &[
    [0, 2, 4],
    [0, 4, 3],
    [0, 3, 5],
    [0, 5, 2],
    [1, 4, 2],
    [1, 2, 5],
    [1, 5, 3],
    [1, 3, 4],
];

pub(crate) const CUBE_VERTICES: &[[f64; 3]] = &[
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
];

/// Two triangles per side, fanned from (1, 1, 1) for the first three sides
/// and from (-1, -1, -1) for the last three. Around (-1, -1, -1) the pairs
/// are (7, 8) for `z = -1`, (9, 10) for `y = -1`, and (6, 11) for `x = -1`.
pub(crate) const CUBE_FACES: &[[u32; 3]] = &[
    [0, 1, 4],
    [0, 4, 2],
    [0, 2, 6],
    [0, 6, 3],
    [0, 3, 5],
    [0, 5, 1],
    [7, 1, 5],
    [7, 5, 3],
    [7, 3, 6],
    [7, 6, 2],
    [7, 2, 4],
    [7, 4, 1],
];

pub(crate) const ICOSAHEDRON_VERTICES: &[[f64; 3]] = &[
    [0.0, 1.0, PHI],
    [0.0, -1.0, PHI],
    [0.0, 1.0, -PHI],
    [0.0, -1.0, -PHI],
    [1.0, PHI, 0.0],
    [-1.0, PHI, 0.0],
    [1.0, -PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, 1.0],
    [PHI, 0.0, -1.0],
    [-PHI, 0.0, -1.0],
];

pub(crate) const ICOSAHEDRON_FACES: &[[u32; 3]] = &[
    // around vertex 0
    [0, 1, 8],
    [0, 8, 4],
    [0, 4, 5],
    [0, 5, 9],
    [0, 9, 1],
    // around vertex 10
    [10, 8, 6],
    [10, 6, 3],
    [10, 3, 2],
    [10, 2, 4],
    [10, 4, 8],
    // around vertex 7
    [7, 9, 11],
    [7, 11, 3],
    [7, 3, 6],
    [7, 6, 1],
    [7, 1, 9],
    // remaining belt
    [2, 5, 4],
    [2, 3, 11],
    [2, 11, 5],
    [1, 6, 8],
    [9, 5, 11],
];

pub(crate) const DODECAHEDRON_VERTICES: &[[f64; 3]] = &[
    // cube corners
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    // (0, ±1/φ, ±φ)
    [0.0, INV_PHI, PHI],
    [0.0, -INV_PHI, PHI],
    [0.0, INV_PHI, -PHI],
    [0.0, -INV_PHI, -PHI],
    // (±1/φ, ±φ, 0)
    [INV_PHI, PHI, 0.0],
    [-INV_PHI, PHI, 0.0],
    [INV_PHI, -PHI, 0.0],
    [-INV_PHI, -PHI, 0.0],
    // (±φ, 0, ±1/φ)
    [PHI, 0.0, INV_PHI],
    [-PHI, 0.0, INV_PHI],
    [PHI, 0.0, -INV_PHI],
    [-PHI, 0.0, -INV_PHI],
];

// Twelve pentagons, three fan triangles each.
pub(crate) const DODECAHEDRON_FACES: &[[u32; 3]] = &[
    [0, 8, 9],
    [0, 9, 2],
    [0, 2, 16],
    //
    [0, 16, 18],
    [0, 18, 3],
    [0, 3, 12],
    //
    [0, 12, 13],
    [0, 13, 1],
    [0, 1, 8],
    //
    [12, 3, 10],
    [12, 10, 5],
    [12, 5, 13],
    //
    [16, 2, 14],
    [16, 14, 6],
    [16, 6, 18],
    //
    [8, 1, 17],
    [8, 17, 4],
    [8, 4, 9],
    //
    [3, 18, 6],
    [3, 6, 11],
    [3, 11, 10],
    //
    [2, 9, 4],
    [2, 4, 15],
    [2, 15, 14],
    //
    [1, 13, 5],
    [1, 5, 19],
    [1, 19, 17],
    //
    [17, 19, 7],
    [17, 7, 15],
    [17, 15, 4],
    //
    [5, 10, 11],
    [5, 11, 7],
    [5, 7, 19],
    //
    [6, 14, 15],
    [6, 15, 7],
    [6, 7, 11],
];

/// Regular tetrahedron: 4 vertices, 4 faces.
///
/// ```
/// use mesh_solids::tetrahedron;
/// use mesh_types::MeshTopology;
///
/// let mesh = tetrahedron();
/// assert_eq!((mesh.vertex_count(), mesh.face_count()), (4, 4));
/// ```
#[must_use]
pub fn tetrahedron() -> IndexedMesh {
    IndexedMesh::from_tables(TETRAHEDRON_VERTICES, TETRAHEDRON_FACES)
}

/// Regular octahedron: 6 vertices, 8 faces.
#[must_use]
pub fn octahedron() -> IndexedMesh {
    IndexedMesh::from_tables(OCTAHEDRON_VERTICES, OCTAHEDRON_FACES)
}

/// Cube with corners at `(±1, ±1, ±1)`: 8 vertices, 12 triangles.
#[must_use]
pub fn cube() -> IndexedMesh {
    IndexedMesh::from_tables(CUBE_VERTICES, CUBE_FACES)
}

/// Regular icosahedron: 12 vertices, 20 faces.
#[must_use]
pub fn icosahedron() -> IndexedMesh {
    IndexedMesh::from_tables(ICOSAHEDRON_VERTICES, ICOSAHEDRON_FACES)
}

/// Regular dodecahedron: 20 vertices, 36 triangles (12 pentagons).
#[must_use]
pub fn dodecahedron() -> IndexedMesh {
    IndexedMesh::from_tables(DODECAHEDRON_VERTICES, DODECAHEDRON_FACES)
}
