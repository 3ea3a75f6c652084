//! Indexed triangle mesh.

use nalgebra::Point3;

use super::index::VertexId;
use crate::error::{DistanceError, Result};

/// A triangle mesh stored as a position array and index triples.
///
/// This is the in-memory form handed to distance algorithms. Vertex identity
/// is positional: vertex `i` is `positions[i]`.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub positions: Vec<Point3<f64>>,
    /// Triangles as `[v0, v1, v2]` indices into `positions`.
    pub triangles: Vec<[usize; 3]>,
}

/// Summary of triangle side lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLengthStats {
    /// Shortest side.
    pub min: f64,
    /// Mean over all triangle sides (shared sides counted once per triangle).
    pub mean: f64,
    /// Longest side.
    pub max: f64,
}

impl TriangleMesh {
    /// Create a mesh from positions and triangles without validating indices.
    ///
    /// Use [`validate`](Self::validate) before trusting the topology.
    pub fn new(positions: Vec<Point3<f64>>, triangles: Vec<[usize; 3]>) -> Self {
        Self {
            positions,
            triangles,
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Check if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId) -> Point3<f64> {
        self.positions[v.index()]
    }

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.positions.len()).map(VertexId::new)
    }

    /// Check that every position is finite and every triangle references an
    /// existing vertex.
    pub fn validate(&self) -> Result<()> {
        validate_positions(&self.positions)?;
        validate_triangles(self.positions.len(), &self.triangles)
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` for an empty position array.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.positions.first()?;
        let mut min = first;
        let mut max = first;

        for p in &self.positions {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }

        Some((min, max))
    }

    /// Half of the largest bounding box dimension.
    ///
    /// Returns 0 for an empty mesh.
    pub fn max_extent(&self) -> f64 {
        self.bounding_box()
            .map(|(min, max)| 0.5 * (max - min).max())
            .unwrap_or(0.0)
    }

    /// Statistics over the three side lengths of every triangle.
    ///
    /// Returns `None` when the mesh has no triangles.
    ///
    /// # Panics
    ///
    /// Panics if a triangle references a vertex outside the position array.
    pub fn edge_length_stats(&self) -> Option<EdgeLengthStats> {
        if self.triangles.is_empty() {
            return None;
        }

        let mut min = f64::INFINITY;
        let mut max = 0.0_f64;
        let mut sum = 0.0;

        for &[a, b, c] in &self.triangles {
            for (u, v) in [(a, b), (a, c), (b, c)] {
                let len = (self.positions[v] - self.positions[u]).norm();
                min = min.min(len);
                max = max.max(len);
                sum += len;
            }
        }

        Some(EdgeLengthStats {
            min,
            mean: sum / (3 * self.triangles.len()) as f64,
            max,
        })
    }

    /// Count vertices that no triangle references.
    pub fn num_isolated_vertices(&self) -> usize {
        let mut used = vec![false; self.positions.len()];
        for tri in &self.triangles {
            for &v in tri {
                if let Some(slot) = used.get_mut(v) {
                    *slot = true;
                }
            }
        }
        used.iter().filter(|&&u| !u).count()
    }
}

/// Check that every index in `triangles` is below `num_vertices`.
///
/// Reports the first offending triangle as [`DistanceError::MalformedTopology`].
pub fn validate_triangles(num_vertices: usize, triangles: &[[usize; 3]]) -> Result<()> {
    for (ti, tri) in triangles.iter().enumerate() {
        if let Some(&vertex) = tri.iter().find(|&&v| v >= num_vertices) {
            return Err(DistanceError::MalformedTopology {
                triangle: ti,
                vertex,
                count: num_vertices,
            });
        }
    }
    Ok(())
}

/// Check that every coordinate is finite.
///
/// Reports the first offending vertex as [`DistanceError::NonFinitePosition`].
pub fn validate_positions(positions: &[Point3<f64>]) -> Result<()> {
    match positions.iter().position(|p| !p.coords.iter().all(|c| c.is_finite())) {
        Some(vertex) => Err(DistanceError::NonFinitePosition { vertex }),
        None => Ok(()),
    }
}
