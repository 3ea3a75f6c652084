//! Core mesh data structures.
//!
//! # Overview
//!
//! - [`TriangleMesh`] holds vertex positions and triangle index triples, the
//!   form in which meshes are handed to distance algorithms.
//! - [`AdjacencyGraph`] is the undirected, edge-length weighted graph derived
//!   from the triangles.
//! - [`VertexId`] identifies a vertex by its slot in the position array.
//!
//! # Construction
//!
//! ```
//! use geodist::mesh::TriangleMesh;
//! use nalgebra::Point3;
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let mesh = TriangleMesh::new(positions, vec![[0, 1, 2]]);
//! assert!(mesh.validate().is_ok());
//! ```

mod graph;
mod index;
mod triangle_mesh;

pub use graph::AdjacencyGraph;
pub use index::VertexId;
pub use triangle_mesh::{validate_positions, validate_triangles, EdgeLengthStats, TriangleMesh};
