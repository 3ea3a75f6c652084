//! Benchmarks for graph building and distance propagation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geodist::prelude::*;
use nalgebra::Point3;

fn create_grid_mesh(n: usize) -> TriangleMesh {
    let mut positions = Vec::with_capacity((n + 1) * (n + 1));
    let mut triangles = Vec::with_capacity(n * n * 2);

    for j in 0..=n {
        for i in 0..=n {
            positions.push(Point3::new(i as f64, j as f64, 0.0));
        }
    }

    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            triangles.push([v00, v10, v11]);
            triangles.push([v00, v11, v01]);
        }
    }

    TriangleMesh::new(positions, triangles)
}

fn bench_graph_building(c: &mut Criterion) {
    let mesh = create_grid_mesh(100);

    c.bench_function("adjacency_grid_100x100", |b| {
        b.iter(|| AdjacencyGraph::from_triangles(black_box(&mesh.positions), &mesh.triangles).unwrap())
    });
}

fn bench_propagation(c: &mut Criterion) {
    let mesh = create_grid_mesh(100);
    let center = VertexId::new(mesh.num_vertices() / 2);

    for metric in Metric::ALL {
        let mut algorithm = metric.create();
        algorithm.load_mesh(&mesh).unwrap();

        c.bench_function(&format!("propagate_{}_grid_100x100", metric), |b| {
            b.iter(|| algorithm.propagate(black_box(center)).unwrap())
        });
    }
}

criterion_group!(benches, bench_graph_building, bench_propagation);
criterion_main!(benches);
