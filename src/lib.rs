//! # geodist
//!
//! Per-vertex distance fields on triangle meshes.
//!
//! Given a mesh and a source vertex, geodist computes the distance from the
//! source to every vertex under a selectable metric. Renderers, selection
//! tools and analysis scripts use the resulting field to colorize or
//! threshold the mesh.
//!
//! ## Features
//!
//! - **Graph metric**: Dijkstra shortest paths along mesh edges
//! - **Direct metric**: straight-line Euclidean distance
//! - **One interface**: both implement [`DistanceAlgorithm`](algo::DistanceAlgorithm),
//!   chosen at configuration time through [`Metric`](algo::Metric)
//! - **File formats**: OBJ, STL and PLY loading; colored PLY output
//!
//! ## Quick Start
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
//!         Point3::new(1.0, 1.0, 1.0),
//!     ],
//!     vec![[0, 1, 2], [1, 3, 2]],
//! );
//!
//! let mut surface = Metric::Dijkstra.create();
//! let mut straight = Metric::Euclidean.create();
//! surface.load_mesh(&mesh).unwrap();
//! straight.load_mesh(&mesh).unwrap();
//!
//! let source = VertexId::new(0);
//! let along = surface.propagate(source).unwrap();
//! let direct = straight.propagate(source).unwrap();
//!
//! for (v, d) in along.iter() {
//!     assert!(d + 1e-12 >= direct.distance(v));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod io;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// ```
/// use geodist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::{
        DijkstraAlgorithm, DijkstraOptions, DistanceAlgorithm, DistanceField, EuclideanAlgorithm,
        Metric, UNREACHABLE,
    };
    pub use crate::error::{DistanceError, Result};
    pub use crate::mesh::{AdjacencyGraph, TriangleMesh, VertexId};
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use nalgebra::Point3;

    #[test]
    fn test_tetrahedron() {
        let mesh = TriangleMesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.5, 1.0, 0.0),
                Point3::new(0.5, 0.5, 1.0),
            ],
            vec![
                [0, 2, 1], // bottom
                [0, 1, 3], // front
                [1, 2, 3], // right
                [2, 0, 3], // left
            ],
        );

        let mut graph = Metric::Dijkstra.create();
        let mut direct = Metric::Euclidean.create();
        graph.load_mesh(&mesh).unwrap();
        direct.load_mesh(&mesh).unwrap();

        // Every pair of tetrahedron vertices shares an edge, so both metrics agree.
        for s in mesh.vertex_ids() {
            let g = graph.propagate(s).unwrap();
            let d = direct.propagate(s).unwrap();
            for (v, gd) in g.iter() {
                assert!((gd - d.distance(v)).abs() < 1e-10);
            }
        }
    }
}
