//! Distance propagation algorithms.
//!
//! Every metric implements [`DistanceAlgorithm`]: `load` a mesh once, then
//! `propagate` from any number of source vertices. Each call returns a fresh
//! [`DistanceField`].
//!
//! # Available Metrics
//!
//! - [`DijkstraAlgorithm`]: shortest path along mesh edges (surface distance)
//! - [`EuclideanAlgorithm`]: straight-line distance, ignoring topology
//!
//! # Example
//!
//! ```
//! use geodist::prelude::*;
//! use nalgebra::Point3;
//!
//! let mesh = TriangleMesh::new(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     vec![[0, 1, 2]],
//! );
//!
//! let mut algorithm = Metric::Dijkstra.create();
//! algorithm.load_mesh(&mesh).unwrap();
//!
//! let field = algorithm.propagate(VertexId::new(0)).unwrap();
//! if let Some((v, d)) = field.farthest_vertex() {
//!     println!("Farthest vertex: {:?} at distance {}", v, d);
//! }
//! ```
//!
//! # Threading
//!
//! `load` must complete before any `propagate` call is issued. After that the
//! algorithm is only read, and each `propagate` allocates its own scratch
//! state, so a loaded algorithm can be shared across threads (see
//! [`propagate_many`]).

mod dijkstra;
mod euclidean;
mod field;

use std::fmt;
use std::str::FromStr;

use nalgebra::Point3;
use rayon::prelude::*;

pub use dijkstra::{DijkstraAlgorithm, DijkstraOptions};
pub use euclidean::EuclideanAlgorithm;
pub use field::{DistanceField, UNREACHABLE};

use crate::error::{DistanceError, Result};
use crate::mesh::{TriangleMesh, VertexId};

/// A per-vertex distance metric over a triangle mesh.
pub trait DistanceAlgorithm: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Consume the mesh topology and build the internal representation.
    ///
    /// Positions are copied; no reference to the caller's arrays is kept.
    /// Loading again replaces the previous mesh. On error the algorithm is
    /// left unloaded.
    ///
    /// # Errors
    ///
    /// [`DistanceError::MalformedTopology`] if a triangle references a vertex
    /// outside `positions`, [`DistanceError::NonFinitePosition`] if a position
    /// has a NaN or infinite coordinate.
    fn load(&mut self, positions: &[Point3<f64>], triangles: &[[usize; 3]]) -> Result<()>;

    /// Compute distances from `source` to every loaded vertex.
    ///
    /// # Errors
    ///
    /// [`DistanceError::NotLoaded`] before a successful `load`, and
    /// [`DistanceError::InvalidVertex`] if `source` is not a loaded vertex.
    fn propagate(&self, source: VertexId) -> Result<DistanceField>;

    /// Number of loaded vertices, or `None` before `load`.
    fn num_vertices(&self) -> Option<usize>;

    /// Load a [`TriangleMesh`].
    fn load_mesh(&mut self, mesh: &TriangleMesh) -> Result<()> {
        self.load(&mesh.positions, &mesh.triangles)
    }

    /// Propagate from a signed index, as received from a command line or script.
    fn propagate_index(&self, source: i64) -> Result<DistanceField> {
        let n = self.num_vertices().ok_or(DistanceError::NotLoaded)?;
        self.propagate(VertexId::checked(source, n)?)
    }
}

/// Selects which metric to instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    /// Shortest path along mesh edges.
    #[default]
    Dijkstra,
    /// Straight-line distance.
    Euclidean,
}

impl Metric {
    /// All metrics, in selector order.
    pub const ALL: [Metric; 2] = [Metric::Dijkstra, Metric::Euclidean];

    /// Create an unloaded algorithm for this metric.
    pub fn create(self) -> Box<dyn DistanceAlgorithm> {
        match self {
            Metric::Dijkstra => Box::new(DijkstraAlgorithm::new()),
            Metric::Euclidean => Box::new(EuclideanAlgorithm::new()),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Dijkstra => write!(f, "dijkstra"),
            Metric::Euclidean => write!(f, "euclidean"),
        }
    }
}

impl FromStr for Metric {
    type Err = DistanceError;

    /// Accepts names (`dijkstra`, `graph`, `euclidean`, `direct`) and the
    /// numeric selectors `0` and `1`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "0" | "dijkstra" | "graph" => Ok(Metric::Dijkstra),
            "1" | "euclidean" | "direct" => Ok(Metric::Euclidean),
            other => Err(DistanceError::invalid_param(
                "metric",
                other,
                "expected dijkstra, euclidean, 0 or 1",
            )),
        }
    }
}

/// Propagate from several sources in parallel over one loaded algorithm.
///
/// Fields are returned in the order of `sources`. If any source fails, one of
/// the errors is returned and no fields are.
pub fn propagate_many<A>(algorithm: &A, sources: &[VertexId]) -> Result<Vec<DistanceField>>
where
    A: DistanceAlgorithm + ?Sized,
{
    sources
        .par_iter()
        .map(|&source| algorithm.propagate(source))
        .collect()
}
