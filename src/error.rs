//! Error types for geodist.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`DistanceError`].
pub type Result<T> = std::result::Result<T, DistanceError>;

/// Errors that can occur while loading meshes or propagating distances.
///
/// Vertices that are unreachable from the source are not an error; they are
/// reported through [`UNREACHABLE`](crate::algo::UNREACHABLE) entries in the
/// distance field.
#[derive(Error, Debug)]
pub enum DistanceError {
    /// `propagate` was called before `load`.
    #[error("distance algorithm has no mesh loaded")]
    NotLoaded,

    /// The source vertex is outside `[0, count)`.
    #[error("vertex index {vertex} is out of range for a mesh with {count} vertices")]
    InvalidVertex {
        /// The requested vertex index (may be negative when it came from an untyped boundary).
        vertex: i64,
        /// The number of vertices in the loaded mesh.
        count: usize,
    },

    /// A triangle references a vertex outside the position array.
    #[error("triangle {triangle} references vertex {vertex}, but the mesh has {count} vertices")]
    MalformedTopology {
        /// The triangle index.
        triangle: usize,
        /// The offending vertex index.
        vertex: usize,
        /// The number of vertex positions supplied.
        count: usize,
    },

    /// A vertex position has a NaN or infinite coordinate.
    #[error("vertex {vertex} has a non-finite position")]
    NonFinitePosition {
        /// The offending vertex index.
        vertex: usize,
    },

    /// The mesh has no triangles.
    #[error("mesh has no triangles")]
    EmptyMesh,

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error loading mesh from file.
    #[error("failed to load mesh from {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl DistanceError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        DistanceError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    /// Create an invalid vertex error from an unsigned index.
    pub(crate) fn invalid_vertex(vertex: usize, count: usize) -> Self {
        DistanceError::InvalidVertex {
            vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
            count,
        }
    }
}
