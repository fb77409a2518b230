//! Wavefront OBJ reading and writing for indexed triangle meshes.
//!
//! The writer emits one `v` line per vertex and one `f` line per face,
//! with OBJ's 1-based indices. The reader accepts the usual `v`/`f`
//! records and fan-triangulates polygon faces.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_obj, save_obj};
//! use mesh_types::{IndexedMesh, Vertex};
//!
//! let mesh = IndexedMesh::from_parts(
//!     vec![
//!         Vertex::from_coords(0.0, 0.0, 0.0),
//!         Vertex::from_coords(1.0, 0.0, 0.0),
//!         Vertex::from_coords(0.0, 1.0, 0.0),
//!     ],
//!     vec![[0, 1, 2]],
//! );
//!
//! save_obj(&mesh, "triangle.obj").unwrap();
//! let loaded = load_obj("triangle.obj").unwrap();
//! assert_eq!(loaded, mesh);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod obj;

pub use error::{IoError, IoResult};
pub use obj::{load_obj, read_obj, save_obj, write_obj};
