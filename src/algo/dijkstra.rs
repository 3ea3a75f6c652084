//! Dijkstra's algorithm over the mesh edge graph.
//!
//! Computes shortest path distances along mesh edges. This gives exact
//! distances on the edge graph, which approximates true geodesic distances on
//! the surface and is never shorter than the straight-line distance.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use nalgebra::Point3;

use crate::error::{DistanceError, Result};
use crate::mesh::{AdjacencyGraph, VertexId};

use super::{DistanceAlgorithm, DistanceField, UNREACHABLE};

/// Options for Dijkstra's algorithm.
#[derive(Debug, Clone, Default)]
pub struct DijkstraOptions {
    /// Whether to store predecessor information for path reconstruction.
    pub store_predecessors: bool,

    /// Maximum distance to explore. Vertices farther than this keep
    /// [`UNREACHABLE`]. Set to `None` for no limit.
    pub max_distance: Option<f64>,
}

impl DijkstraOptions {
    /// Enable predecessor storage for path reconstruction.
    pub fn with_predecessors(mut self, store: bool) -> Self {
        self.store_predecessors = store;
        self
    }

    /// Set maximum distance to explore.
    pub fn with_max_distance(mut self, max_dist: f64) -> Self {
        self.max_distance = Some(max_dist);
        self
    }
}

/// Entry in Dijkstra's priority queue.
#[derive(Debug, Clone)]
struct DijkstraEntry {
    vertex: usize,
    distance: f64,
}

impl DijkstraEntry {
    fn new(vertex: usize, distance: f64) -> Self {
        Self { vertex, distance }
    }
}

// BinaryHeap is a max-heap; order entries by reversed distance.
impl PartialEq for DijkstraEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraEntry {}

impl PartialOrd for DijkstraEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance.total_cmp(&self.distance)
    }
}

/// Graph metric: shortest-path distance along mesh edges.
///
/// `load` builds an [`AdjacencyGraph`]; every `propagate` runs a fresh
/// single-source search over it with a lazily pruned binary heap.
///
/// # Example
///
/// ```
/// use geodist::prelude::*;
/// use nalgebra::Point3;
///
/// let positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
///
/// let mut dijkstra = DijkstraAlgorithm::new();
/// dijkstra.load(&positions, &[[0, 1, 2]]).unwrap();
///
/// let field = dijkstra.propagate(VertexId::new(0)).unwrap();
/// assert_eq!(field.distances(), &[0.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DijkstraAlgorithm {
    graph: Option<AdjacencyGraph>,
    options: DijkstraOptions,
}

impl DijkstraAlgorithm {
    /// Create an unloaded algorithm with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unloaded algorithm with the given options.
    pub fn with_options(options: DijkstraOptions) -> Self {
        Self {
            graph: None,
            options,
        }
    }

    /// The options used by `propagate`.
    pub fn options(&self) -> &DijkstraOptions {
        &self.options
    }

    /// The loaded graph, if any.
    pub fn graph(&self) -> Option<&AdjacencyGraph> {
        self.graph.as_ref()
    }
}

impl DistanceAlgorithm for DijkstraAlgorithm {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn load(&mut self, positions: &[Point3<f64>], triangles: &[[usize; 3]]) -> Result<()> {
        self.graph = None;
        let graph = AdjacencyGraph::from_triangles(positions, triangles)?;

        log::debug!(
            "dijkstra: loaded {} vertices, {} triangles, {} adjacency entries",
            graph.num_vertices(),
            triangles.len(),
            graph.num_entries()
        );

        self.graph = Some(graph);
        Ok(())
    }

    fn num_vertices(&self) -> Option<usize> {
        self.graph.as_ref().map(AdjacencyGraph::num_vertices)
    }

    fn propagate(&self, source: VertexId) -> Result<DistanceField> {
        let graph = self.graph.as_ref().ok_or(DistanceError::NotLoaded)?;
        let n = graph.num_vertices();
        let src = source.index();
        if src >= n {
            return Err(DistanceError::invalid_vertex(src, n));
        }

        let limit = self.options.max_distance.unwrap_or(UNREACHABLE);

        let mut distances = vec![UNREACHABLE; n];
        let mut predecessors: Option<Vec<Option<usize>>> = if self.options.store_predecessors {
            Some(vec![None; n])
        } else {
            None
        };

        let mut heap = BinaryHeap::new();
        distances[src] = 0.0;
        heap.push(DijkstraEntry::new(src, 0.0));

        while let Some(DijkstraEntry {
            vertex: u,
            distance: dist_u,
        }) = heap.pop()
        {
            // Stale entry: a shorter path was pushed after this one.
            if dist_u > distances[u] {
                continue;
            }

            for &(v, weight) in graph.neighbors(VertexId::new(u)) {
                let alt = dist_u + weight;

                if alt < distances[v] && alt <= limit {
                    distances[v] = alt;
                    if let Some(preds) = predecessors.as_mut() {
                        preds[v] = Some(u);
                    }
                    heap.push(DijkstraEntry::new(v, alt));
                }
            }
        }

        let field = DistanceField::new(source, distances, predecessors);
        log::debug!(
            "dijkstra: source {} reached {}/{} vertices",
            source,
            field.reachable_count(),
            n
        );
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::EuclideanAlgorithm;

    fn create_single_triangle() -> (Vec<Point3<f64>>, Vec<[usize; 3]>) {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        (vertices, vec![[0, 1, 2]])
    }

    fn create_grid_mesh(n: usize) -> (Vec<Point3<f64>>, Vec<[usize; 3]>) {
        let mut vertices = Vec::new();
        let mut faces = Vec::new();

        for j in 0..=n {
            for i in 0..=n {
                vertices.push(Point3::new(i as f64, j as f64, 0.0));
            }
        }

        for j in 0..n {
            for i in 0..n {
                let v00 = j * (n + 1) + i;
                let v10 = j * (n + 1) + i + 1;
                let v01 = (j + 1) * (n + 1) + i;
                let v11 = (j + 1) * (n + 1) + i + 1;

                faces.push([v00, v10, v11]);
                faces.push([v00, v11, v01]);
            }
        }

        (vertices, faces)
    }

    fn create_two_triangles() -> (Vec<Point3<f64>>, Vec<[usize; 3]>) {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(5.0, 0.0, 0.0),
            Point3::new(6.0, 0.0, 0.0),
            Point3::new(5.0, 1.0, 0.0),
        ];
        (vertices, vec![[0, 1, 2], [3, 4, 5]])
    }

    fn loaded(vertices: &[Point3<f64>], faces: &[[usize; 3]]) -> DijkstraAlgorithm {
        let mut alg = DijkstraAlgorithm::new();
        alg.load(vertices, faces).unwrap();
        alg
    }

    #[test]
    fn test_dijkstra_single_triangle() {
        let (vertices, faces) = create_single_triangle();
        let field = loaded(&vertices, &faces).propagate(VertexId::new(0)).unwrap();

        assert_eq!(field.len(), 3);
        assert_eq!(field.distance(VertexId::new(0)), 0.0);
        assert!((field.distance(VertexId::new(1)) - 1.0).abs() < 1e-10);
        assert!((field.distance(VertexId::new(2)) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_dijkstra_nonzero_source() {
        let (vertices, faces) = create_single_triangle();
        let field = loaded(&vertices, &faces).propagate(VertexId::new(1)).unwrap();

        assert_eq!(field.source(), VertexId::new(1));
        assert_eq!(field.distance(VertexId::new(1)), 0.0);
        assert!((field.distance(VertexId::new(0)) - 1.0).abs() < 1e-10);
        assert!((field.distance(VertexId::new(2)) - 2.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_dijkstra_grid() {
        let (vertices, faces) = create_grid_mesh(2);
        let field = loaded(&vertices, &faces).propagate(VertexId::new(0)).unwrap();

        assert_eq!(field.reachable_count(), 9);

        // Vertex 8 is at (2,2), reached along the two diagonal edges.
        let expected = 2.0 * 2.0_f64.sqrt();
        assert!((field.distance(VertexId::new(8)) - expected).abs() < 1e-10);

        // Vertex 2 is at (2,0), two unit edges away.
        assert!((field.distance(VertexId::new(2)) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_dijkstra_bent_path_exceeds_straight_line() {
        // 0 - 1 - 2 connected only through 1; 2 lies right next to 0 in space.
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(5.0, 0.0, 0.0),
            Point3::new(0.0, 0.5, 0.0),
            Point3::new(5.0, 1.0, 0.0),
            Point3::new(-5.0, 0.0, 0.0),
        ];
        // Two triangles sharing only vertex 1: (0,1,4) and (1,2,3).
        let faces = vec![[0, 1, 4], [1, 3, 2]];

        let mut direct = EuclideanAlgorithm::new();
        direct.load(&vertices, &faces).unwrap();

        let graph_field = loaded(&vertices, &faces).propagate(VertexId::new(0)).unwrap();
        let direct_field = direct.propagate(VertexId::new(0)).unwrap();

        let graph_d = graph_field.distance(VertexId::new(2));
        let direct_d = direct_field.distance(VertexId::new(2));
        let expected = 5.0 + (25.0_f64 + 0.25).sqrt();

        assert!((graph_d - expected).abs() < 1e-10);
        assert!((direct_d - 0.5).abs() < 1e-10);
        assert!(graph_d > direct_d);
    }

    #[test]
    fn test_dijkstra_disconnected() {
        let (vertices, faces) = create_two_triangles();
        let field = loaded(&vertices, &faces).propagate(VertexId::new(0)).unwrap();

        assert_eq!(field.distance(VertexId::new(0)), 0.0);
        assert!((field.distance(VertexId::new(1)) - 1.0).abs() < 1e-10);
        assert!((field.distance(VertexId::new(2)) - 1.0).abs() < 1e-10);
        for v in 3..6 {
            assert_eq!(field.distance(VertexId::new(v)), UNREACHABLE);
        }
        assert_eq!(field.reachable_count(), 3);
    }

    #[test]
    fn test_dijkstra_symmetric() {
        let (vertices, faces) = create_grid_mesh(3);
        let alg = loaded(&vertices, &faces);

        let fields: Vec<DistanceField> = (0..vertices.len())
            .map(|s| alg.propagate(VertexId::new(s)).unwrap())
            .collect();

        for a in 0..vertices.len() {
            for b in 0..vertices.len() {
                let ab = fields[a].distance(VertexId::new(b));
                let ba = fields[b].distance(VertexId::new(a));
                assert!((ab - ba).abs() < 1e-10, "d({a},{b}) = {ab} but d({b},{a}) = {ba}");
            }
        }
    }

    #[test]
    fn test_dijkstra_idempotent() {
        let (vertices, faces) = create_grid_mesh(4);
        let alg = loaded(&vertices, &faces);

        let first = alg.propagate(VertexId::new(7)).unwrap();
        let _other = alg.propagate(VertexId::new(0)).unwrap();
        let second = alg.propagate(VertexId::new(7)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_dijkstra_not_loaded() {
        let alg = DijkstraAlgorithm::new();
        assert!(alg.num_vertices().is_none());
        assert!(matches!(
            alg.propagate(VertexId::new(0)),
            Err(DistanceError::NotLoaded)
        ));
    }

    #[test]
    fn test_dijkstra_invalid_source() {
        let (vertices, faces) = create_single_triangle();
        let alg = loaded(&vertices, &faces);

        assert!(matches!(
            alg.propagate(VertexId::new(3)),
            Err(DistanceError::InvalidVertex { vertex: 3, count: 3 })
        ));
    }

    #[test]
    fn test_dijkstra_malformed_topology_leaves_unloaded() {
        let (vertices, faces) = create_single_triangle();
        let mut alg = loaded(&vertices, &faces);

        let result = alg.load(&vertices, &[[0, 1, 3]]);
        assert!(matches!(result, Err(DistanceError::MalformedTopology { .. })));
        assert!(matches!(
            alg.propagate(VertexId::new(0)),
            Err(DistanceError::NotLoaded)
        ));
    }

    #[test]
    fn test_dijkstra_isolated_vertex() {
        let (mut vertices, faces) = create_single_triangle();
        vertices.push(Point3::new(0.1, 0.1, 0.0));
        let alg = loaded(&vertices, &faces);

        let field = alg.propagate(VertexId::new(3)).unwrap();
        assert_eq!(field.reachable_count(), 1);
        assert_eq!(field.distance(VertexId::new(3)), 0.0);
    }

    #[test]
    fn test_dijkstra_path_reconstruction() {
        let (vertices, faces) = create_grid_mesh(2);
        let mut alg = DijkstraAlgorithm::with_options(DijkstraOptions::default().with_predecessors(true));
        alg.load(&vertices, &faces).unwrap();
        let field = alg.propagate(VertexId::new(0)).unwrap();

        assert_eq!(field.path_to(VertexId::new(0)), Some(vec![VertexId::new(0)]));
        assert_eq!(
            field.path_to(VertexId::new(8)),
            Some(vec![VertexId::new(0), VertexId::new(4), VertexId::new(8)])
        );
    }

    #[test]
    fn test_dijkstra_max_distance() {
        let (vertices, faces) = create_grid_mesh(3);
        let mut alg = DijkstraAlgorithm::with_options(DijkstraOptions::default().with_max_distance(1.5));
        alg.load(&vertices, &faces).unwrap();
        let field = alg.propagate(VertexId::new(0)).unwrap();

        assert!(field.is_reachable(VertexId::new(0)));
        assert!(field.is_reachable(VertexId::new(1))); // (1,0)
        assert!(field.is_reachable(VertexId::new(4))); // (0,1)
        assert!(field.is_reachable(VertexId::new(5))); // (1,1) via diagonal
        assert!(!field.is_reachable(VertexId::new(2))); // (2,0) at distance 2
        assert!(!field.is_reachable(VertexId::new(15)));

        for (_, d) in field.reachable_iter() {
            assert!(d <= 1.5);
        }
    }

    #[test]
    fn test_dijkstra_preserves_triangle_inequality() {
        let (vertices, faces) = create_grid_mesh(3);
        let alg = loaded(&vertices, &faces);
        let field = alg.propagate(VertexId::new(0)).unwrap();
        let graph = alg.graph().unwrap();

        for v in 0..vertices.len() {
            let d_v = field.distance(VertexId::new(v));
            for &(u, edge_len) in graph.neighbors(VertexId::new(v)) {
                let d_u = field.distance(VertexId::new(u));
                assert!(
                    (d_v - d_u).abs() <= edge_len + 1e-10,
                    "Triangle inequality violated: |{} - {}| > {}",
                    d_v,
                    d_u,
                    edge_len
                );
            }
        }
    }
}
