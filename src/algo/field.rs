//! Per-vertex distance fields.

use crate::error::{DistanceError, Result};
use crate::mesh::VertexId;

/// Distance assigned to vertices that cannot be reached from the source.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Result of a single `propagate` call.
///
/// Holds one non-negative distance per vertex. The source entry is exactly
/// zero and vertices that were not reached hold [`UNREACHABLE`]. The field
/// is owned by the caller; algorithms keep no reference to it.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceField {
    /// The vertex distances were measured from.
    source: VertexId,

    /// Distance from the source to each vertex.
    distances: Vec<f64>,

    /// Predecessor of each vertex on its shortest path.
    /// `None` if predecessors weren't computed.
    predecessors: Option<Vec<Option<usize>>>,
}

impl DistanceField {
    /// Create a new distance field.
    pub(crate) fn new(
        source: VertexId,
        distances: Vec<f64>,
        predecessors: Option<Vec<Option<usize>>>,
    ) -> Self {
        debug_assert_eq!(distances.get(source.index()).copied(), Some(0.0));
        Self {
            source,
            distances,
            predecessors,
        }
    }

    /// The source vertex.
    #[inline]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Get the distance to a vertex.
    ///
    /// Returns [`UNREACHABLE`] if the vertex is unreachable from the source.
    #[inline]
    pub fn distance(&self, v: VertexId) -> f64 {
        self.distances[v.index()]
    }

    /// Get all distances as a slice.
    #[inline]
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Take ownership of the raw distance array.
    pub fn into_vec(self) -> Vec<f64> {
        self.distances
    }

    /// Get the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Check if a vertex is reachable from the source.
    #[inline]
    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.distances[v.index()].is_finite()
    }

    /// Count the number of reachable vertices, the source included.
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Largest finite distance, or `None` for an empty field.
    pub fn max_finite(&self) -> Option<f64> {
        self.farthest_vertex().map(|(_, d)| d)
    }

    /// Find the vertex with the maximum finite distance from the source.
    ///
    /// Ties resolve to the lowest index.
    pub fn farthest_vertex(&self) -> Option<(VertexId, f64)> {
        let mut best: Option<(usize, f64)> = None;

        for (i, &d) in self.distances.iter().enumerate() {
            if !d.is_finite() {
                continue;
            }
            match best {
                Some((_, max)) if d <= max => {}
                _ => best = Some((i, d)),
            }
        }

        best.map(|(i, d)| (VertexId::new(i), d))
    }

    /// Vertices whose distance is at most `radius`.
    pub fn within_radius(&self, radius: f64) -> Vec<VertexId> {
        self.distances
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d <= radius)
            .map(|(i, _)| VertexId::new(i))
            .collect()
    }

    /// Linear falloff intensity per vertex: `max((radius - d) / radius, 0)`.
    ///
    /// The source maps to 1, vertices at or beyond `radius` (and unreachable
    /// ones) map to 0.
    ///
    /// # Errors
    ///
    /// Fails with [`DistanceError::InvalidParameter`] unless `radius` is
    /// positive and finite.
    pub fn falloff(&self, radius: f64) -> Result<Vec<f64>> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(DistanceError::invalid_param(
                "radius",
                radius,
                "must be positive and finite",
            ));
        }

        Ok(self
            .distances
            .iter()
            .map(|&d| ((radius - d) / radius).max(0.0))
            .collect())
    }

    /// Reconstruct the shortest path from the source to the given vertex.
    ///
    /// Returns `None` if predecessors weren't stored (see
    /// [`DijkstraOptions::with_predecessors`](super::DijkstraOptions::with_predecessors))
    /// or the vertex is unreachable. The path includes both endpoints; the
    /// path to the source is just `[source]`.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        let predecessors = self.predecessors.as_ref()?;

        if !self.distances[target.index()].is_finite() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target.index();

        loop {
            path.push(VertexId::new(current));

            match predecessors[current] {
                Some(pred) => current = pred,
                None => break,
            }

            if path.len() > self.distances.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }

    /// Iterate over all vertices with their distances.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .map(|(i, &d)| (VertexId::new(i), d))
    }

    /// Iterate over only reachable vertices with their distances.
    pub fn reachable_iter(&self) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.iter().filter(|(_, d)| d.is_finite())
    }
}
