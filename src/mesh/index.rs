//! Vertex index type.
//!
//! Vertices are identified by their slot in the position array. The index is
//! only meaningful for the mesh it was taken from.

use std::fmt::{self, Debug};

use crate::error::{DistanceError, Result};

/// A type-safe vertex index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct VertexId(usize);

impl VertexId {
    /// Create a new index from a raw value.
    #[inline]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    /// Convert a signed index into a vertex of a mesh with `count` vertices.
    ///
    /// Negative values and values `>= count` fail with
    /// [`DistanceError::InvalidVertex`].
    ///
    /// ```
    /// use geodist::mesh::VertexId;
    ///
    /// assert_eq!(VertexId::checked(2, 3).unwrap(), VertexId::new(2));
    /// assert!(VertexId::checked(-1, 3).is_err());
    /// assert!(VertexId::checked(3, 3).is_err());
    /// ```
    pub fn checked(index: i64, count: usize) -> Result<Self> {
        match usize::try_from(index) {
            Ok(i) if i < count => Ok(Self(i)),
            _ => Err(DistanceError::InvalidVertex {
                vertex: index,
                count,
            }),
        }
    }
}

impl Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(v: usize) -> Self {
        Self::new(v)
    }
}
