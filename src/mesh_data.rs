//! The mesh buffer: one vertex array and one index array with matching
//! triangle topology.

use crate::float_types::Real;
use nalgebra::Point3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An indexed triangle mesh owning exactly one vertex array and one index
/// array. Every 3 consecutive indices form a triangle; the winding order
/// encodes the outward-facing direction and is never altered by any operation
/// in this crate.
///
/// `MeshData` is a move-only handle: returning one from a function transfers
/// ownership of both arrays, so a depth-0 fragmentation hands the caller's
/// buffer straight back without copying and a buffer can never be released
/// twice.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Vertex positions. Once [`set_radius`](Self::set_radius) has run, each
    /// one is a direction-from-origin scaled to the sphere radius.
    pub vertices: Vec<Point3<Real>>,
    /// Triangle list, 3 entries per triangle, each entry `< vertices.len()`.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Build a buffer from existing vertex and index arrays, taking ownership
    /// of both.
    pub fn new(vertices: Vec<Point3<Real>>, indices: Vec<u32>) -> Self {
        debug_assert!(indices.len() % 3 == 0, "index count must be a multiple of 3");
        debug_assert!(
            indices.iter().all(|&ix| (ix as usize) < vertices.len()),
            "every index must address a vertex"
        );
        MeshData { vertices, indices }
    }

    /// Number of triangles described by the index array.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices in the vertex array.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Put every vertex at distance `radius` from the origin, keeping its
    /// direction. Runs once, after all fragmentation, so the cost is
    /// `O(final vertex count)` rather than once per depth level.
    #[cfg(not(feature = "parallel"))]
    pub fn set_radius(&mut self, radius: Real) {
        for vertex in &mut self.vertices {
            *vertex = Point3::from(vertex.coords.normalize() * radius);
        }
    }

    /// Parallel version of the radius projection. Vertices are independent,
    /// so this is a plain data-parallel map.
    #[cfg(feature = "parallel")]
    pub fn set_radius(&mut self, radius: Real) {
        self.vertices.par_iter_mut().for_each(|vertex| {
            *vertex = Point3::from(vertex.coords.normalize() * radius);
        });
    }
}
