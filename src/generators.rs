//! The generator surface: a closed set of sphere recipes sharing one
//! build-fragment-project pipeline.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::fragment::fragment;
use crate::mesh_data::MeshData;
use crate::shapes;

/// A sphere recipe: which base topology to start from and how much detail to
/// give it. A closed enum dispatched through [`generate`](Sphere::generate)
/// keeps the shared pipeline in one place without any virtual dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sphere {
    /// Regular icosahedron base, fragmented `depth` times.
    Icosphere { depth: u32 },
    /// Cube base, fragmented `depth` times.
    CubeSphere { depth: u32 },
    /// Direct polar/azimuthal parameterization. `slices` shapes the base
    /// topology itself, so the fragmenter is never involved.
    UvSphere { slices: u32 },
}

impl Sphere {
    /// Generate the mesh for this recipe with every vertex at distance
    /// `radius` from the origin.
    ///
    /// ## Errors
    /// [`ValidationError::InvalidRadius`] for a non-positive or non-finite
    /// radius, plus whatever the base builder or the fragmenter rejects. No
    /// partial buffers survive a failed validation.
    pub fn generate(self, radius: Real) -> Result<MeshData, ValidationError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ValidationError::InvalidRadius(radius));
        }

        let mut mesh = match self {
            Sphere::Icosphere { depth } => fragment(shapes::icosahedron(), depth)?,
            Sphere::CubeSphere { depth } => fragment(shapes::cube(), depth)?,
            Sphere::UvSphere { slices } => shapes::uv_sphere(slices)?,
        };

        mesh.set_radius(radius);
        Ok(mesh)
    }
}

/// An icosahedron-based sphere: `20 * 4^depth` triangles, the most uniform
/// triangle distribution of the three recipes.
pub fn icosphere(radius: Real, depth: u32) -> Result<MeshData, ValidationError> {
    Sphere::Icosphere { depth }.generate(radius)
}

/// A cube-based sphere: `12 * 4^depth` triangles.
pub fn cube_sphere(radius: Real, depth: u32) -> Result<MeshData, ValidationError> {
    Sphere::CubeSphere { depth }.generate(radius)
}

/// A UV sphere with `slices` polar bands and azimuthal slices (at least 3).
pub fn uv_sphere(radius: Real, slices: u32) -> Result<MeshData, ValidationError> {
    Sphere::UvSphere { slices }.generate(radius)
}
