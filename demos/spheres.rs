//! This example generates the three sphere variants and writes them as STL

use spheregen::{MeshData, cube_sphere, icosphere, uv_sphere};
use std::{fs, path::Path};

const PATH: &str = "stl/spheres";

fn main() {
    // Ensure the output folder exists
    let _ = fs::create_dir_all(PATH);

    let ico = icosphere(1.0, 3).unwrap(); // radius=1, 20 * 4^3 = 1280 triangles
    write_example(&ico, "icosphere");

    let cube = cube_sphere(1.0, 4).unwrap(); // radius=1, 12 * 4^4 = 3072 triangles
    write_example(&cube, "cube_sphere");

    let uv = uv_sphere(1.0, 24).unwrap(); // radius=1, 24 polar bands and azimuthal slices
    write_example(&uv, "uv_sphere");
}

fn write_example(mesh: &MeshData, name: &str) {
    let _ = fs::write(
        Path::new(PATH).join(name).with_extension("stl"),
        mesh.to_stl_binary().unwrap(),
    );
}
