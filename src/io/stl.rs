//! STL (stereolithography) format support.
//!
//! Both binary and ASCII files are read. `stl_io` merges identical corner
//! positions, so triangles share vertices and the graph metric can travel
//! between them.

use std::fs::File;
use std::path::Path;

use nalgebra::Point3;

use crate::error::{DistanceError, Result};
use crate::mesh::TriangleMesh;

/// Load a mesh from an STL file.
///
/// # Example
///
/// ```no_run
/// use geodist::io::stl;
///
/// let mesh = stl::load("model.stl").unwrap();
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<TriangleMesh> {
    let path = path.as_ref();
    let mut file = File::open(path)?;

    let stl = stl_io::read_stl(&mut file).map_err(|e| DistanceError::LoadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let positions: Vec<Point3<f64>> = stl
        .vertices
        .iter()
        .map(|v| Point3::new(v[0] as f64, v[1] as f64, v[2] as f64))
        .collect();

    let triangles: Vec<[usize; 3]> = stl.faces.iter().map(|tri| tri.vertices).collect();

    if triangles.is_empty() {
        return Err(DistanceError::LoadError {
            path: path.to_path_buf(),
            message: "STL file contains no triangles".to_string(),
        });
    }

    Ok(TriangleMesh::new(positions, triangles))
}
