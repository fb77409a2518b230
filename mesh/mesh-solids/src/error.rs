//! Error types for the solid catalog.

use thiserror::Error;

/// Result type for catalog operations.
pub type SolidsResult<T> = Result<T, SolidsError>;

/// Errors raised when naming a solid.
///
/// The generators themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolidsError {
    /// The name does not match any Platonic solid.
    #[error("unknown solid: {name:?} (expected one of tetrahedron, octahedron, cube, icosahedron, dodecahedron)")]
    UnknownSolid {
        /// The unrecognized name.
        name: String,
    },
}
