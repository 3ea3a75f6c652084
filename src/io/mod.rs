//! Mesh file I/O.
//!
//! This is the adapter between mesh files and the in-memory
//! [`TriangleMesh`] consumed by the distance algorithms. The algorithms
//! themselves never read files.
//!
//! # Supported Formats
//!
//! | Format | Extension | Load | Save | Notes |
//! |--------|-----------|------|------|-------|
//! | Wavefront OBJ | `.obj` | ✓ | ✗ | All objects merged |
//! | STL | `.stl` | ✓ | ✗ | Binary and ASCII |
//! | PLY | `.ply` | ✓ | ✓ | Saving writes a colored distance field |
//!
//! # Usage
//!
//! ```no_run
//! use geodist::io::load;
//!
//! let mesh = load("model.obj").unwrap();
//! println!("{} vertices, {} triangles", mesh.num_vertices(), mesh.num_triangles());
//! ```

pub mod obj;
pub mod ply;
pub mod stl;

use std::path::Path;

use crate::error::{DistanceError, Result};
use crate::mesh::TriangleMesh;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Wavefront OBJ format.
    Obj,
    /// STL (stereolithography) format.
    Stl,
    /// PLY (Stanford polygon) format.
    Ply,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "obj" => Some(Format::Obj),
            "stl" => Some(Format::Stl),
            "ply" => Some(Format::Ply),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

/// Load a mesh from a file with automatic format detection.
///
/// The format is determined by the file extension. The returned mesh has
/// been validated: every triangle references an existing vertex.
///
/// # Errors
///
/// [`DistanceError::UnsupportedFormat`] for unknown extensions, loader
/// errors, [`DistanceError::EmptyMesh`] when the file has no triangles and
/// [`DistanceError::MalformedTopology`] for out-of-range face indices.
pub fn load<P: AsRef<Path>>(path: P) -> Result<TriangleMesh> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| DistanceError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    let mesh = match format {
        Format::Obj => obj::load(path)?,
        Format::Stl => stl::load(path)?,
        Format::Ply => ply::load(path)?,
    };

    if mesh.is_empty() {
        return Err(DistanceError::EmptyMesh);
    }
    mesh.validate()?;

    let isolated = mesh.num_isolated_vertices();
    if isolated > 0 {
        log::warn!(
            "{}: {} of {} vertices belong to no triangle",
            path.display(),
            isolated,
            mesh.num_vertices()
        );
    }

    log::debug!(
        "loaded {} ({:?}): {} vertices, {} triangles",
        path.display(),
        format,
        mesh.num_vertices(),
        mesh.num_triangles()
    );

    Ok(mesh)
}
