//! Validation errors

use crate::float_types::Real;
use std::fmt::Display;

/// All the ways a generation request can fail validation. Every variant is
/// raised synchronously, before any buffer is allocated; generation is a
/// total function for all in-range inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (InvalidRadius) The sphere radius is zero, negative, or not finite
    InvalidRadius(Real),
    /// (UvSphereSlices) A UV sphere needs at least 3 slices to close
    UvSphereSlices(u32),
    /// (FragmentationDepth) Fragmenting to the requested depth escapes the addressable index range
    FragmentationDepth { triangles: usize, depth: u32 },
    /// (VertexIndexOverflow) The mesh would hold more vertices than an index can address
    VertexIndexOverflow(u64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidRadius(radius) => write!(f, "(InvalidRadius) The sphere radius must be positive and finite, got: {}", radius),
            ValidationError::UvSphereSlices(slices) => write!(f, "(UvSphereSlices) A UV sphere needs at least 3 slices to close, got: {}", slices),
            ValidationError::FragmentationDepth { triangles, depth } => write!(f, "(FragmentationDepth) Fragmenting {} triangles to depth {} escapes the addressable index range", triangles, depth),
            ValidationError::VertexIndexOverflow(vertices) => write!(f, "(VertexIndexOverflow) {} vertices cannot be addressed by a u32 index", vertices),
        }
    }
}
