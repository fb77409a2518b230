//! Catalog of the five Platonic solids as indexed triangle meshes.
//!
//! Each generator takes no input and returns a freshly allocated
//! [`IndexedMesh`] holding the solid's vertex list and face list:
//!
//! | Generator | Vertices | Triangles | Regular faces |
//! |-----------|----------|-----------|---------------|
//! | [`tetrahedron`] | 4 | 4 | 4 triangles |
//! | [`octahedron`] | 6 | 8 | 8 triangles |
//! | [`cube`] | 8 | 12 | 6 squares |
//! | [`icosahedron`] | 12 | 20 | 20 triangles |
//! | [`dodecahedron`] | 20 | 36 | 12 pentagons |
//!
//! Every mesh is closed and wound counter-clockwise seen from outside. The
//! data is fixed: there is no scale, subdivision or orientation parameter.
//! Square and pentagonal faces are stored as fans of triangles;
//! [`Solid::polygons`] reassembles them.
//!
//! # Example
//!
//! ```
//! use mesh_solids::{dodecahedron, Solid};
//! use mesh_types::MeshTopology;
//!
//! let mesh = dodecahedron();
//! assert_eq!(mesh.vertex_count(), 20);
//! assert_eq!(mesh.face_count(), 36);
//!
//! for solid in Solid::ALL {
//!     assert!(!solid.mesh().is_inside_out());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod catalog;
mod error;
mod solid;

pub use catalog::{INV_PHI, PHI, cube, dodecahedron, icosahedron, octahedron, tetrahedron};
pub use error::{SolidsError, SolidsResult};
pub use solid::Solid;

pub use mesh_types::IndexedMesh;
