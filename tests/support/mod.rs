//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::{Point3, Vector3};
use spheregen::MeshData;
use spheregen::float_types::Real;

/// The 3 corner positions of triangle `triangle_ix`.
pub fn triangle_corners(mesh: &MeshData, triangle_ix: usize) -> [Point3<Real>; 3] {
    let ix = triangle_ix * 3;
    [
        mesh.vertices[mesh.indices[ix] as usize],
        mesh.vertices[mesh.indices[ix + 1] as usize],
        mesh.vertices[mesh.indices[ix + 2] as usize],
    ]
}

/// Orientation of triangle `triangle_ix` with respect to the origin:
/// positive when its winding faces away from the origin, negative when it
/// faces inward.
pub fn signed_orientation(mesh: &MeshData, triangle_ix: usize) -> Real {
    let [a, b, c] = triangle_corners(mesh, triangle_ix);
    let normal: Vector3<Real> = (b - a).cross(&(c - a));
    let centroid = (a.coords + b.coords + c.coords) / 3.0;
    normal.dot(&centroid)
}

/// Asserts the buffer invariants every generator promises: whole triangles
/// only, every index addressing a real vertex.
pub fn assert_valid_topology(mesh: &MeshData) {
    assert_eq!(mesh.indices.len() % 3, 0, "index count must be a multiple of 3");
    assert!(
        mesh.indices.iter().all(|&ix| (ix as usize) < mesh.vertices.len()),
        "every index must address a vertex"
    );
}
