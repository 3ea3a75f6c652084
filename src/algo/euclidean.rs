//! Straight-line distance, ignoring mesh topology.

use nalgebra::Point3;

use crate::error::{DistanceError, Result};
use crate::mesh::{validate_positions, validate_triangles, VertexId};

use super::{DistanceAlgorithm, DistanceField};

/// Direct metric: Euclidean distance from the source to every vertex.
///
/// Answers "how far in space" rather than "how far along the surface", so it
/// works on disconnected and non-manifold meshes and is a lower bound for the
/// graph metric. `load` keeps a private copy of the positions.
#[derive(Debug, Clone, Default)]
pub struct EuclideanAlgorithm {
    positions: Option<Vec<Point3<f64>>>,
}

impl EuclideanAlgorithm {
    /// Create an unloaded algorithm.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DistanceAlgorithm for EuclideanAlgorithm {
    fn name(&self) -> &'static str {
        "euclidean"
    }

    fn load(&mut self, positions: &[Point3<f64>], triangles: &[[usize; 3]]) -> Result<()> {
        self.positions = None;
        validate_positions(positions)?;
        // Triangles are not used, but a mesh that references missing vertices
        // is rejected the same way for every metric.
        validate_triangles(positions.len(), triangles)?;

        log::debug!("euclidean: loaded {} vertices", positions.len());
        self.positions = Some(positions.to_vec());
        Ok(())
    }

    fn num_vertices(&self) -> Option<usize> {
        self.positions.as_ref().map(Vec::len)
    }

    fn propagate(&self, source: VertexId) -> Result<DistanceField> {
        let positions = self.positions.as_ref().ok_or(DistanceError::NotLoaded)?;
        let origin = positions
            .get(source.index())
            .ok_or_else(|| DistanceError::invalid_vertex(source.index(), positions.len()))?;

        let mut distances: Vec<f64> = positions.iter().map(|p| (p - origin).norm()).collect();
        distances[source.index()] = 0.0;
        Ok(DistanceField::new(source, distances, None))
    }
}
