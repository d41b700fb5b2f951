//! Scalar type selection and the numeric constants shared across the crate.

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Tolerance used when comparing vertex norms and detecting degenerate
/// triangles. Depends on precision (`f32` vs `f64`).
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Tolerance used when comparing vertex norms and detecting degenerate
/// triangles. Depends on precision (`f32` vs `f64`).
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-10;

/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;
