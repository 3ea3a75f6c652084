//! Weighted vertex adjacency built from triangle topology.
//!
//! Every triangle contributes its three sides as undirected edges weighted by
//! their Euclidean length. Sides shared by several triangles are inserted once
//! per triangle, so a neighbor may appear more than once in a vertex's list
//! with the same weight. Shortest-path searches are unaffected by this.

use nalgebra::Point3;

use super::index::VertexId;
use super::triangle_mesh::{validate_positions, validate_triangles};
use crate::error::Result;

/// Undirected weighted graph over mesh vertices.
///
/// Symmetric: whenever `(v, w)` is in the list of `u`, `(u, w)` is in the
/// list of `v`. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl AdjacencyGraph {
    /// Build the graph for `positions.len()` vertices from a triangle list.
    ///
    /// Degenerate triangles are kept; their zero-length sides become
    /// zero-weight edges.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedTopology`](crate::error::DistanceError::MalformedTopology)
    /// if any triangle references a vertex outside `positions`, and
    /// [`NonFinitePosition`](crate::error::DistanceError::NonFinitePosition)
    /// if a position has a NaN or infinite coordinate. Nothing is inserted in
    /// either case.
    ///
    /// # Example
    ///
    /// ```
    /// use geodist::mesh::{AdjacencyGraph, VertexId};
    /// use nalgebra::Point3;
    ///
    /// let positions = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    /// ];
    /// let graph = AdjacencyGraph::from_triangles(&positions, &[[0, 1, 2]]).unwrap();
    /// assert_eq!(graph.degree(VertexId::new(0)), 2);
    /// ```
    pub fn from_triangles(positions: &[Point3<f64>], triangles: &[[usize; 3]]) -> Result<Self> {
        validate_positions(positions)?;
        validate_triangles(positions.len(), triangles)?;

        let mut graph = Self {
            adjacency: vec![Vec::new(); positions.len()],
        };

        for &[a, b, c] in triangles {
            let (pa, pb, pc) = (positions[a], positions[b], positions[c]);
            graph.add_edge(a, b, (pb - pa).norm());
            graph.add_edge(a, c, (pc - pa).norm());
            graph.add_edge(b, c, (pc - pb).norm());
        }

        Ok(graph)
    }

    fn add_edge(&mut self, u: usize, v: usize, weight: f64) {
        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Check if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// `(neighbor, weight)` pairs of a vertex, in insertion order.
    #[inline]
    pub fn neighbors(&self, v: VertexId) -> &[(usize, f64)] {
        &self.adjacency[v.index()]
    }

    /// Number of adjacency entries of a vertex, duplicates included.
    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.adjacency[v.index()].len()
    }

    /// Total number of directed adjacency entries (twice the inserted edge count).
    pub fn num_entries(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}
