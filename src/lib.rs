//! Procedural **sphere mesh generation** by recursive fragmentation of coarse
//! polyhedral bases.
//!
//! Three base topologies are supported: a regular [icosahedron](shapes::icosahedron),
//! a [cube](shapes::cube) with unit-length corners, and a closed-form
//! [UV sphere](shapes::uv_sphere). The icosahedron and cube are refined by the
//! [fragmentation engine](fragment::fragment), which splits every triangle into
//! four at each depth level using chord midpoints; a single final pass then
//! pushes all vertices onto the target radius.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for multithreading
//!
//! # Example
//! ```
//! use spheregen::icosphere;
//!
//! // 20 * 4^2 = 320 triangles, all vertices at distance 2.5 from the origin
//! let mesh = icosphere(2.5, 2).unwrap();
//! assert_eq!(mesh.triangle_count(), 320);
//! ```

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod mesh_data;
pub mod fragment;
pub mod shapes;
pub mod generators;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::ValidationError;
pub use fragment::fragment;
pub use generators::{Sphere, cube_sphere, icosphere, uv_sphere};
pub use mesh_data::MeshData;

#[cfg(feature = "stl-io")]
pub mod io;
