//! Export of mesh data in exchange formats.

pub mod stl;
