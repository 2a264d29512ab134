//! Hexagon coordinate systems used to project H3 cells onto icosahedron faces.

pub(crate) mod face_ijk;
pub(crate) mod ijk;
