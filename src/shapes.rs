//! The three base topologies: fixed tables for the icosahedron and cube, and
//! a closed-form builder for the UV sphere.

use crate::errors::ValidationError;
use crate::float_types::{PI, Real};
use crate::mesh_data::MeshData;
use nalgebra::Point3;

/// Triangle indices of a regular icosahedron, 20 triangles wound outward.
const ICOSAHEDRON_INDICES: [u32; 60] = [
    0, 1, 2,
    0, 3, 1,
    0, 2, 4,
    3, 0, 5,
    0, 4, 5,
    1, 3, 6,
    1, 7, 2,
    7, 1, 6,
    4, 2, 8,
    7, 8, 2,
    9, 3, 5,
    6, 3, 9,
    5, 4, 10,
    4, 8, 10,
    9, 5, 10,
    7, 6, 11,
    7, 11, 8,
    11, 6, 9,
    8, 11, 10,
    10, 11, 9,
];

/// Triangle indices of a cube, 12 triangles wound outward.
const CUBE_INDICES: [u32; 36] = [
    0, 1, 2,
    0, 2, 3,
    0, 4, 1,
    4, 5, 1,
    7, 5, 6,
    6, 5, 4,
    0, 3, 6,
    6, 4, 0,
    1, 5, 7,
    1, 7, 2,
    2, 7, 3,
    7, 6, 3,
];

/// A regular icosahedron with unit-length vertices: 12 vertices, 20
/// triangles. The base shape for [`crate::icosphere`].
pub fn icosahedron() -> MeshData {
    // Golden-ratio construction, normalised so the circumradius is 1: every
    // vertex is a permutation of (±b, ±a, 0) with a = 1/√(1+φ²), b = φ·a.
    let phi: Real = (1.0 + (5.0 as Real).sqrt()) * 0.5;
    let a = (1.0 + phi * phi).sqrt().recip();
    let b = phi * a;

    let vertices = vec![
        Point3::new(b, a, 0.0),
        Point3::new(0.0, b, -a),
        Point3::new(0.0, b, a),
        Point3::new(a, 0.0, -b),
        Point3::new(a, 0.0, b),
        Point3::new(b, -a, 0.0),
        Point3::new(-a, 0.0, -b),
        Point3::new(-b, a, 0.0),
        Point3::new(-a, 0.0, b),
        Point3::new(0.0, -b, -a),
        Point3::new(0.0, -b, a),
        Point3::new(-b, -a, 0.0),
    ];

    MeshData::new(vertices, ICOSAHEDRON_INDICES.to_vec())
}

/// A cube whose 8 corners are unit length: every coordinate is ±√(1/3), so a
/// single normalise-and-scale step lands each vertex exactly on the target
/// sphere. The base shape for [`crate::cube_sphere`].
pub fn cube() -> MeshData {
    // A coordinate that, used on all three axes, yields a unit vector.
    let c = ((1.0 as Real) / 3.0).sqrt();

    let vertices = vec![
        Point3::new(-c, c, -c),
        Point3::new(c, c, -c),
        Point3::new(c, -c, -c),
        Point3::new(-c, -c, -c),
        Point3::new(-c, c, c),
        Point3::new(c, c, c),
        Point3::new(-c, -c, c),
        Point3::new(c, -c, c),
    ];

    MeshData::new(vertices, CUBE_INDICES.to_vec())
}

/// A unit UV sphere with `slices` polar bands and `slices` azimuthal slices.
///
/// The north pole sits at index 0, the interior bands follow in polar-major
/// order, and the south pole comes last. Unlike the other two bases this
/// topology is complete on its own and never passes through the fragmenter:
/// `slices` directly controls the level of detail.
///
/// ## Errors
/// [`ValidationError::UvSphereSlices`] if `slices < 3`;
/// [`ValidationError::VertexIndexOverflow`] if the band vertices could not be
/// addressed by a `u32` index. Both are raised before any allocation.
pub fn uv_sphere(slices: u32) -> Result<MeshData, ValidationError> {
    if slices < 3 {
        return Err(ValidationError::UvSphereSlices(slices));
    }

    let vertex_count = (slices as u64 - 1) * slices as u64 + 2;
    if vertex_count > u32::MAX as u64 {
        return Err(ValidationError::VertexIndexOverflow(vertex_count));
    }
    let vertex_count = vertex_count as usize;

    // Each pole is ringed by `slices` triangles; every band boundary except
    // the two next to the poles carries `slices` quads of 2 triangles each.
    let quad_count = slices as u64 * (slices as u64 - 2);
    let index_count = ((2 * quad_count + 2 * slices as u64) * 3) as usize;

    // Polar slices sweep 0..180 degrees, azimuthal slices 0..360.
    let polar_delta = PI / slices as Real;
    let azimuthal_delta = 2.0 * polar_delta;

    let mut vertices = Vec::with_capacity(vertex_count);
    let mut indices = Vec::with_capacity(index_count);

    vertices.push(Point3::new(0.0, 1.0, 0.0));

    for polar_step in 1..slices {
        for azimuthal_step in 0..slices {
            let vertex_ix = vertices.len() as u32;
            let polar = polar_delta * polar_step as Real;
            let azimuth = azimuthal_delta * azimuthal_step as Real;
            vertices.push(polar_to_cartesian(polar, azimuth));

            let above_ix = vertex_above(polar_step, vertex_ix, slices);
            let next_ix = next_in_band(azimuthal_step, vertex_ix, slices);
            indices.extend_from_slice(&[vertex_ix, above_ix, next_ix]);

            // The first band borders the pole and only needs the fan triangle
            // above; every later band closes a quad per vertex.
            if polar_step != 1 {
                let above_next_ix = vertex_above(polar_step, next_ix, slices);
                indices.extend_from_slice(&[above_ix, above_next_ix, next_ix]);
            }
        }
    }

    let south_pole_ix = vertices.len() as u32;
    vertices.push(Point3::new(0.0, -1.0, 0.0));
    let last_band_start = south_pole_ix - slices;

    for azimuthal_step in 0..slices {
        let second_ix = last_band_start + azimuthal_step;
        let third_ix = if azimuthal_step == slices - 1 {
            last_band_start
        } else {
            second_ix + 1
        };
        indices.extend_from_slice(&[south_pole_ix, second_ix, third_ix]);
    }

    debug_assert_eq!(vertices.len(), vertex_count);
    debug_assert_eq!(indices.len(), index_count);
    Ok(MeshData::new(vertices, indices))
}

fn polar_to_cartesian(polar: Real, azimuth: Real) -> Point3<Real> {
    let polar_sin = polar.sin();
    Point3::new(polar_sin * azimuth.cos(), polar.cos(), polar_sin * azimuth.sin())
}

/// Index of the vertex directly above (previous band, same azimuth). The
/// first band hangs under the north pole.
fn vertex_above(polar_step: u32, vertex_ix: u32, slices: u32) -> u32 {
    if polar_step == 1 { 0 } else { vertex_ix - slices }
}

/// Index of the next vertex within the same band, wrapping back to the band
/// start after the last azimuthal slice.
fn next_in_band(azimuthal_step: u32, vertex_ix: u32, slices: u32) -> u32 {
    if azimuthal_step == slices - 1 {
        vertex_ix - (slices - 1)
    } else {
        vertex_ix + 1
    }
}
