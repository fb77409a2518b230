//! Export the Platonic solid catalog as Wavefront OBJ files.
//!
//! ```no_run
//! use platonic_export::{ExportParams, export_solids};
//!
//! // tetrahedron.obj, octahedron.obj, cube.obj, icosahedron.obj and
//! // dodecahedron.obj in the current directory
//! let written = export_solids(&ExportParams::default()).unwrap();
//! assert_eq!(written.len(), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod export;
mod params;

pub use export::export_solids;
pub use params::ExportParams;
