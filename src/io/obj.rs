//! Wavefront OBJ format support.

use std::path::Path;

use nalgebra::Point3;

use crate::error::{DistanceError, Result};
use crate::mesh::TriangleMesh;

/// Load a mesh from an OBJ file.
///
/// Polygons are triangulated and all objects/groups in the file are merged
/// into one mesh. Vertex numbering follows the order in which `tobj` emits
/// each object's positions, with later objects appended after earlier ones.
///
/// # Example
///
/// ```no_run
/// use geodist::io::obj;
///
/// let mesh = obj::load("model.obj").unwrap();
/// println!("{} vertices", mesh.num_vertices());
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<TriangleMesh> {
    let path = path.as_ref();
    let options = tobj::LoadOptions {
        triangulate: true,
        single_index: false,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    };

    let (models, _materials) =
        tobj::load_obj(path, &options).map_err(|e| DistanceError::LoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut positions: Vec<Point3<f64>> = Vec::new();
    let mut triangles: Vec<[usize; 3]> = Vec::new();

    for model in &models {
        let mesh = &model.mesh;
        let offset = positions.len();

        positions.extend(
            mesh.positions
                .chunks_exact(3)
                .map(|p| Point3::new(p[0] as f64, p[1] as f64, p[2] as f64)),
        );

        triangles.extend(mesh.indices.chunks_exact(3).map(|t| {
            [
                offset + t[0] as usize,
                offset + t[1] as usize,
                offset + t[2] as usize,
            ]
        }));

        log::debug!(
            "obj: object '{}' with {} positions, {} triangles",
            model.name,
            mesh.positions.len() / 3,
            mesh.indices.len() / 3
        );
    }

    if triangles.is_empty() {
        return Err(DistanceError::LoadError {
            path: path.to_path_buf(),
            message: "OBJ file contains no faces".to_string(),
        });
    }

    Ok(TriangleMesh::new(positions, triangles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("geodist_{}_{}.obj", name, std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_quad_is_triangulated() {
        let path = write_temp(
            "quad",
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n",
        );
        let mesh = load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_triangles(), 2);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_load_merges_objects() {
        let path = write_temp(
            "objects",
            "o a\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\no b\nv 5 0 0\nv 6 0 0\nv 5 1 0\nf 4 5 6\n",
        );
        let mesh = load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(mesh.num_vertices(), 6);
        assert_eq!(mesh.num_triangles(), 2);
        assert!(mesh.validate().is_ok());
        let second = mesh.triangles[1];
        assert!(second.iter().all(|&v| v >= 3));
    }

    #[test]
    fn test_load_without_faces() {
        let path = write_temp("points", "v 0 0 0\nv 1 0 0\n");
        let result = load(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(DistanceError::LoadError { .. })));
    }
}
