//! PLY (Stanford polygon) format support.
//!
//! Meshes are loaded with `ply-rs`. Distance fields are written as ASCII PLY
//! with a per-vertex `distance` property and vertex colors, so any PLY viewer
//! can display the result.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};

use crate::algo::DistanceField;
use crate::error::{DistanceError, Result};
use crate::mesh::TriangleMesh;

/// Distance written for vertices the source cannot reach.
pub const UNREACHABLE_MARKER: f64 = -1.0;

/// Load a mesh from a PLY file.
///
/// Polygons with more than three corners are fan-triangulated.
///
/// # Example
///
/// ```no_run
/// use geodist::io::ply;
///
/// let mesh = ply::load("model.ply").unwrap();
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<TriangleMesh> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let load_error = |message: &str| DistanceError::LoadError {
        path: path.to_path_buf(),
        message: message.to_string(),
    };

    let parser = Parser::<DefaultElement>::new();
    let ply = parser
        .read_ply(&mut reader)
        .map_err(|e| load_error(&e.to_string()))?;

    let vertex_element = ply
        .payload
        .get("vertex")
        .ok_or_else(|| load_error("PLY file has no vertex element"))?;

    let mut positions: Vec<Point3<f64>> = Vec::with_capacity(vertex_element.len());
    for vertex in vertex_element {
        let x = get_float_property(vertex, "x")
            .ok_or_else(|| load_error("vertex missing x coordinate"))?;
        let y = get_float_property(vertex, "y")
            .ok_or_else(|| load_error("vertex missing y coordinate"))?;
        let z = get_float_property(vertex, "z")
            .ok_or_else(|| load_error("vertex missing z coordinate"))?;
        positions.push(Point3::new(x, y, z));
    }

    let face_element = ply
        .payload
        .get("face")
        .ok_or_else(|| load_error("PLY file has no face element"))?;

    let mut triangles: Vec<[usize; 3]> = Vec::with_capacity(face_element.len());
    for face in face_element {
        let indices = get_list_property(face, "vertex_indices")
            .or_else(|| get_list_property(face, "vertex_index"))
            .ok_or_else(|| load_error("face missing vertex_indices property"))?;

        if indices.len() >= 3 {
            for i in 1..indices.len() - 1 {
                triangles.push([indices[0], indices[i], indices[i + 1]]);
            }
        }
    }

    if triangles.is_empty() {
        return Err(load_error("PLY file contains no faces"));
    }

    Ok(TriangleMesh::new(positions, triangles))
}

fn get_float_property(element: &DefaultElement, name: &str) -> Option<f64> {
    match element.get(name)? {
        Property::Float(v) => Some(*v as f64),
        Property::Double(v) => Some(*v),
        Property::Int(v) => Some(*v as f64),
        Property::UInt(v) => Some(*v as f64),
        Property::Short(v) => Some(*v as f64),
        Property::UShort(v) => Some(*v as f64),
        Property::Char(v) => Some(*v as f64),
        Property::UChar(v) => Some(*v as f64),
        _ => None,
    }
}

fn get_list_property(element: &DefaultElement, name: &str) -> Option<Vec<usize>> {
    match element.get(name)? {
        Property::ListInt(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListUInt(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListShort(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListUShort(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListChar(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListUChar(v) => Some(v.iter().map(|&x| x as usize).collect()),
        _ => None,
    }
}

/// Save a mesh colored by a distance field (ASCII format).
///
/// Each vertex gets a `distance` property and an RGB color. The source is
/// green; every other vertex is red scaled by the linear falloff
/// `max((radius - d) / radius, 0)`, so vertices at or beyond `radius` are
/// black. Unreachable vertices are written with distance
/// [`UNREACHABLE_MARKER`].
///
/// # Errors
///
/// [`DistanceError::InvalidParameter`] if the field does not match the mesh
/// or `radius` is not positive, and I/O errors from writing the file.
///
/// # Example
///
/// ```no_run
/// use geodist::prelude::*;
/// use geodist::io::ply;
///
/// let mesh = geodist::io::load("model.obj").unwrap();
/// let mut algorithm = Metric::Dijkstra.create();
/// algorithm.load_mesh(&mesh).unwrap();
/// let field = algorithm.propagate(VertexId::new(0)).unwrap();
///
/// ply::save_distance_field(&mesh, &field, 1.0, "distance.ply").unwrap();
/// ```
pub fn save_distance_field<P: AsRef<Path>>(
    mesh: &TriangleMesh,
    field: &DistanceField,
    radius: f64,
    path: P,
) -> Result<()> {
    if field.len() != mesh.num_vertices() {
        return Err(DistanceError::invalid_param(
            "field",
            field.len(),
            "length must match the mesh vertex count",
        ));
    }
    let intensity = field.falloff(radius)?;

    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "comment Generated by geodist")?;
    writeln!(writer, "comment source vertex {}", field.source())?;
    writeln!(writer, "element vertex {}", mesh.num_vertices())?;
    writeln!(writer, "property float x")?;
    writeln!(writer, "property float y")?;
    writeln!(writer, "property float z")?;
    writeln!(writer, "property float distance")?;
    writeln!(writer, "property uchar red")?;
    writeln!(writer, "property uchar green")?;
    writeln!(writer, "property uchar blue")?;
    writeln!(writer, "element face {}", mesh.num_triangles())?;
    writeln!(writer, "property list uchar int vertex_indices")?;
    writeln!(writer, "end_header")?;

    for ((v, d), &k) in field.iter().zip(&intensity) {
        let p = mesh.position(v);
        let d = if d.is_finite() { d } else { UNREACHABLE_MARKER };
        let (r, g) = if v == field.source() {
            (0, 255)
        } else {
            ((k * 255.0).round() as u8, 0)
        };
        writeln!(writer, "{} {} {} {} {} {} 0", p.x, p.y, p.z, d, r, g)?;
    }

    for t in &mesh.triangles {
        writeln!(writer, "3 {} {} {}", t[0], t[1], t[2])?;
    }

    writer.flush()?;
    Ok(())
}
