use spheregen::float_types::{EPSILON, Real};
use spheregen::{Sphere, ValidationError, cube_sphere, icosphere, uv_sphere};

mod support;

#[test]
fn every_generator_lands_all_vertices_on_the_radius() {
    let radius = 2.5;
    let meshes = [
        icosphere(radius, 3).unwrap(),
        cube_sphere(radius, 3).unwrap(),
        uv_sphere(radius, 12).unwrap(),
    ];

    for mesh in &meshes {
        support::assert_valid_topology(mesh);
        for vertex in &mesh.vertices {
            assert!(
                (vertex.coords.norm() - radius).abs() < EPSILON,
                "vertex {:?} missed the radius",
                vertex
            );
        }
    }
}

#[test]
fn fragmented_generators_grow_by_powers_of_four() {
    for depth in 0..5u32 {
        let factor = 4usize.pow(depth);
        let ico = icosphere(1.0, depth).unwrap();
        let cube = cube_sphere(1.0, depth).unwrap();
        assert_eq!(ico.triangle_count(), 20 * factor);
        assert_eq!(cube.triangle_count(), 12 * factor);

        // Fragmentation duplicates vertices per triangle at a fixed 1:2
        // vertex-to-index ratio; the unfragmented bases keep their shared
        // vertices (12 and 8).
        if depth > 0 {
            assert_eq!(ico.vertex_count(), ico.triangle_count() * 3 / 2);
            assert_eq!(cube.vertex_count(), cube.triangle_count() * 3 / 2);
        } else {
            assert_eq!(ico.vertex_count(), 12);
            assert_eq!(cube.vertex_count(), 8);
        }
    }
}

#[test]
fn icosphere_depth_one_regression() {
    let mesh = icosphere(1.0, 1).unwrap();
    assert_eq!(mesh.triangle_count(), 80);
    assert_eq!(mesh.vertex_count(), 120);
    for vertex in &mesh.vertices {
        assert!((vertex.coords.norm() - 1.0).abs() < EPSILON);
    }
}

#[test]
fn windings_face_outward_everywhere() {
    let meshes = [
        icosphere(1.0, 2).unwrap(),
        cube_sphere(1.0, 2).unwrap(),
        uv_sphere(1.0, 8).unwrap(),
    ];

    for mesh in &meshes {
        for triangle_ix in 0..mesh.triangle_count() {
            assert!(
                support::signed_orientation(mesh, triangle_ix) > 0.0,
                "triangle {} faces inward",
                triangle_ix
            );
        }
    }
}

#[test]
fn projection_to_radius_is_idempotent() {
    let once = icosphere(3.0, 2).unwrap();
    let mut twice = once.clone();
    twice.set_radius(3.0);

    assert_eq!(once.indices, twice.indices);
    for (a, b) in once.vertices.iter().zip(&twice.vertices) {
        assert!((a - b).norm() < EPSILON);
    }
}

#[test]
fn bad_radii_fail_fast() {
    assert_eq!(icosphere(0.0, 1), Err(ValidationError::InvalidRadius(0.0)));
    assert_eq!(cube_sphere(-2.0, 1), Err(ValidationError::InvalidRadius(-2.0)));
    assert!(uv_sphere(Real::NAN, 5).is_err());
    assert!(icosphere(Real::INFINITY, 1).is_err());
}

#[test]
fn depth_overflow_is_an_invalid_argument() {
    assert_eq!(
        icosphere(1.0, 16),
        Err(ValidationError::FragmentationDepth { triangles: 20, depth: 16 })
    );
    assert!(cube_sphere(1.0, 40).is_err());
}

#[test]
fn the_enum_surface_matches_the_free_functions() {
    let via_enum = Sphere::CubeSphere { depth: 1 }.generate(1.0).unwrap();
    let via_fn = cube_sphere(1.0, 1).unwrap();
    assert_eq!(via_enum, via_fn);

    let via_enum = Sphere::UvSphere { slices: 6 }.generate(2.0).unwrap();
    let via_fn = uv_sphere(2.0, 6).unwrap();
    assert_eq!(via_enum, via_fn);
}
