//! Export a [`MeshData`] to STL.
//!
//! Facet normals are recomputed from each triangle's winding, since the core
//! buffers carry positions only.

use crate::float_types::{EPSILON, Real};
use crate::mesh_data::MeshData;
use nalgebra::{Point3, Vector3};

/// Convert a mesh to an **ASCII STL** string with the given `name`.
///
/// ```no_run
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mesh = spheregen::icosphere(1.0, 2)?;
/// std::fs::write("stl/icosphere.stl", mesh.to_stl_ascii("icosphere"))?;
/// # Ok(())
/// # }
/// ```
pub fn to_stl_ascii(mesh: &MeshData, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    for triangle in mesh.indices.chunks_exact(3) {
        let corners = triangle_corners(mesh, triangle);
        let n = facet_normal(&corners);
        out.push_str(&format!("  facet normal {:.6} {:.6} {:.6}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for p in &corners {
            out.push_str(&format!("      vertex {:.6} {:.6} {:.6}\n", p.x, p.y, p.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Convert a mesh to a **binary STL** byte vector.
///
/// The resulting `Vec<u8>` can then be written to a file or handled in
/// memory.
#[allow(clippy::unnecessary_cast)]
pub fn to_stl_binary(mesh: &MeshData) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let triangles: Vec<Triangle> = mesh
        .indices
        .chunks_exact(3)
        .map(|triangle| {
            let corners = triangle_corners(mesh, triangle);
            let n = facet_normal(&corners);
            Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: corners.map(|p| Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
            }
        })
        .collect();

    let mut cursor = std::io::Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

fn triangle_corners(mesh: &MeshData, triangle: &[u32]) -> [Point3<Real>; 3] {
    [
        mesh.vertices[triangle[0] as usize],
        mesh.vertices[triangle[1] as usize],
        mesh.vertices[triangle[2] as usize],
    ]
}

fn facet_normal(corners: &[Point3<Real>; 3]) -> Vector3<Real> {
    (corners[1] - corners[0])
        .cross(&(corners[2] - corners[0]))
        .try_normalize(EPSILON)
        .unwrap_or_else(Vector3::zeros)
}

impl MeshData {
    /// See [`to_stl_ascii`].
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }

    /// See [`to_stl_binary`].
    pub fn to_stl_binary(&self) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self)
    }
}
