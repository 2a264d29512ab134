#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // error cases are listed under "# Returns"
#![allow(clippy::cast_possible_truncation)] // Common in C ports, review carefully
#![allow(clippy::cast_sign_loss)] // Common in C ports, review carefully
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)] // H3 index literals read best unseparated
#![allow(clippy::wildcard_imports)] // Allow for re-exporting from modules

//! `xs-h3-vertex` numbers the vertices of H3 cells.
//!
//! Given an H3 cell, it resolves how many 60 degree counter-clockwise steps
//! separate the cell's vertex numbering from its base cell's home face
//! orientation, and which vertex starts the edge shared with the neighbor in a
//! given direction.
//!
//! ```
//! use xs_h3_vertex::{vertex_num_for_direction, Direction, H3Index};
//!
//! let cell = H3Index(0x823d6ffffffffff);
//! let vertex = vertex_num_for_direction(&cell, Direction::JAxes).unwrap();
//! assert!((0..6).contains(&vertex));
//! ```

// Declare modules
pub mod base_cells;
pub mod constants;
pub(crate) mod coords;
pub mod h3_index;
pub mod types;
pub mod vertex;

// Re-export key public types and functions for easier use
pub use base_cells::pentagon_base_cells;
pub use h3_index::{cell_from_digits, get_base_cell_number, is_pentagon, is_valid_cell};
pub use types::{CoordIJK, Direction, FaceIJK, H3Error, H3Index, H3_NULL};
pub use vertex::{
  base_cell_vertex_rotations, direction_for_vertex_num, vertex_num_for_direction, vertex_rotations, BaseCellRotation,
  CellFacts, VertexCell, INVALID_FACE, INVALID_VERTEX_NUM,
};
