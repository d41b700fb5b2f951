//! The fragmentation engine: each depth level splits every triangle of a mesh
//! into 4 smaller ones, writing into a pair of exactly-sized double buffers.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::mesh_data::MeshData;
use nalgebra::{Point3, center};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Each fragmented triangle emits 6 vertices (its 3 corners, duplicated, plus
// the 3 edge midpoints) and 4 triangles worth of indices.
const VERTICES_PER_TRIANGLE: usize = 6;
const INDICES_PER_TRIANGLE: usize = 12;

/// Fragment `mesh` `depth` times, quadrupling the triangle count at every
/// level. Depth 0 returns the input unchanged without allocating.
///
/// The final buffer sizes are known in closed form, so exactly two vertex
/// arrays and two index arrays of final size are allocated up front and
/// ping-ponged between depth levels; nothing ever grows or reallocates
/// mid-algorithm. New edge vertices are chord midpoints; pushing everything
/// onto the sphere is left to one [`MeshData::set_radius`] pass after the
/// last level.
///
/// ## Errors
/// [`ValidationError::FragmentationDepth`] if the final mesh would escape the
/// `u32` index range; raised before any buffer is allocated.
pub fn fragment(mesh: MeshData, depth: u32) -> Result<MeshData, ValidationError> {
    if depth == 0 {
        return Ok(mesh);
    }

    let initial_triangle_count = mesh.triangle_count();
    let (final_vertex_count, final_index_count) =
        fragmented_counts(initial_triangle_count, depth)?;

    // Two buffer pairs sized for the final depth. Shallow depths occupy only
    // a prefix of each array; the last one fills them completely.
    let mut read_vertices = vec![Point3::origin(); final_vertex_count];
    read_vertices[..mesh.vertex_count()].copy_from_slice(&mesh.vertices);
    let mut write_vertices = vec![Point3::origin(); final_vertex_count];
    let mut read_indices = vec![0u32; final_index_count];
    read_indices[..mesh.indices.len()].copy_from_slice(&mesh.indices);
    let mut write_indices = vec![0u32; final_index_count];

    let mut triangle_count = initial_triangle_count;

    for _ in 0..depth {
        fragment_depth(
            triangle_count,
            &read_indices,
            &read_vertices,
            &mut write_indices,
            &mut write_vertices,
        );
        triangle_count *= 4;
        // The write pair now holds the denser mesh: it becomes the read pair
        // of the next level, and the stale read pair gets overwritten.
        std::mem::swap(&mut read_vertices, &mut write_vertices);
        std::mem::swap(&mut read_indices, &mut write_indices);
    }

    drop(write_vertices);
    drop(write_indices);
    Ok(MeshData::new(read_vertices, read_indices))
}

/// One fragmentation pass over the first `triangle_count` triangles of the
/// read pair. Every source triangle writes a disjoint, precomputable slice of
/// the destination arrays, so there are no cross-triangle dependencies within
/// a pass.
#[cfg(not(feature = "parallel"))]
fn fragment_depth(
    triangle_count: usize,
    read_indices: &[u32],
    read_vertices: &[Point3<Real>],
    write_indices: &mut [u32],
    write_vertices: &mut [Point3<Real>],
) {
    let vertex_chunks = write_vertices[..triangle_count * VERTICES_PER_TRIANGLE]
        .chunks_exact_mut(VERTICES_PER_TRIANGLE);
    let index_chunks = write_indices[..triangle_count * INDICES_PER_TRIANGLE]
        .chunks_exact_mut(INDICES_PER_TRIANGLE);

    for (triangle_ix, (out_vertices, out_indices)) in
        vertex_chunks.zip(index_chunks).enumerate()
    {
        fragment_triangle(triangle_ix, read_indices, read_vertices, out_indices, out_vertices);
    }
}

/// Parallel fragmentation pass. The destination slices are disjoint, so the
/// triangles fan out with no synchronization; rayon's implicit join is the
/// barrier between one depth level and the next.
#[cfg(feature = "parallel")]
fn fragment_depth(
    triangle_count: usize,
    read_indices: &[u32],
    read_vertices: &[Point3<Real>],
    write_indices: &mut [u32],
    write_vertices: &mut [Point3<Real>],
) {
    write_vertices[..triangle_count * VERTICES_PER_TRIANGLE]
        .par_chunks_exact_mut(VERTICES_PER_TRIANGLE)
        .zip(
            write_indices[..triangle_count * INDICES_PER_TRIANGLE]
                .par_chunks_exact_mut(INDICES_PER_TRIANGLE),
        )
        .enumerate()
        .for_each(|(triangle_ix, (out_vertices, out_indices))| {
            fragment_triangle(triangle_ix, read_indices, read_vertices, out_indices, out_vertices);
        });
}

/// Split the source triangle at `triangle_ix` into 4: one corner triangle per
/// original corner plus the center triangle connecting the 3 new midpoints,
/// keeping the source winding. Midpoints are arithmetic (chord) midpoints,
/// not great-circle ones; intermediate levels work in chord space and the
/// final radius projection happens once at the end.
fn fragment_triangle(
    triangle_ix: usize,
    read_indices: &[u32],
    read_vertices: &[Point3<Real>],
    out_indices: &mut [u32],
    out_vertices: &mut [Point3<Real>],
) {
    let read_ix = triangle_ix * 3;
    let v1 = read_vertices[read_indices[read_ix] as usize];
    let v2 = read_vertices[read_indices[read_ix + 1] as usize];
    let v3 = read_vertices[read_indices[read_ix + 2] as usize];

    out_vertices[0] = v1;
    out_vertices[1] = v2;
    out_vertices[2] = v3;
    out_vertices[3] = center(&v1, &v2);
    out_vertices[4] = center(&v2, &v3);
    out_vertices[5] = center(&v3, &v1);

    // Destination vertex indices are linear in the triangle index, which is
    // what makes the whole pass index-addressable.
    let base = (triangle_ix * VERTICES_PER_TRIANGLE) as u32;
    let (ix1, ix2, ix3) = (base, base + 1, base + 2);
    let (mid12, mid23, mid31) = (base + 3, base + 4, base + 5);

    out_indices[0] = ix1;
    out_indices[1] = mid12;
    out_indices[2] = mid31;

    out_indices[3] = mid12;
    out_indices[4] = mid23;
    out_indices[5] = mid31;

    out_indices[6] = mid23;
    out_indices[7] = ix3;
    out_indices[8] = mid31;

    out_indices[9] = mid12;
    out_indices[10] = ix2;
    out_indices[11] = mid23;
}

/// Closed-form buffer sizes for fragmenting `initial_triangle_count`
/// triangles `depth` times: `4^depth` times the triangles, 3 indices per
/// triangle, and exactly half as many vertices as indices: every level
/// emits 6 vertices and 12 indices per source triangle, so the 1:2 ratio
/// holds at every depth.
fn fragmented_counts(
    initial_triangle_count: usize,
    depth: u32,
) -> Result<(usize, usize), ValidationError> {
    let overflow = ValidationError::FragmentationDepth {
        triangles: initial_triangle_count,
        depth,
    };

    let final_index_count = 4u128
        .checked_pow(depth)
        .and_then(|factor| factor.checked_mul(initial_triangle_count as u128))
        .and_then(|triangles| triangles.checked_mul(3))
        .ok_or_else(|| overflow.clone())?;
    let final_vertex_count = final_index_count / 2;

    // Every emitted index value must fit the u32 index width, and both
    // buffers must be addressable on this platform.
    if final_vertex_count > u32::MAX as u128 {
        return Err(overflow);
    }
    let final_index_count = usize::try_from(final_index_count).map_err(|_| overflow)?;

    Ok((final_vertex_count as usize, final_index_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragmented_counts_stay_exact() {
        // 20 base triangles: the icosahedron
        let (vertices, indices) = fragmented_counts(20, 1).unwrap();
        assert_eq!(indices, 20 * 4 * 3);
        assert_eq!(vertices, indices / 2);

        // The deepest icosahedron still addressable by u32 indices
        let (vertices, indices) = fragmented_counts(20, 13).unwrap();
        assert_eq!(indices, 20 * 4usize.pow(13) * 3);
        assert_eq!(vertices, indices / 2);
    }

    #[test]
    fn fragmented_counts_reject_unaddressable_depths() {
        // 20 * 4^16 triangles needs more vertex slots than u32 can address
        assert!(fragmented_counts(20, 16).is_err());
        // 4^depth overflows long before the multiply gets a say
        assert!(fragmented_counts(1, 200).is_err());
    }
}
