//! Vertex orientation of H3 cells.
//!
//! A cell's vertices are numbered counter-clockwise relative to the
//! orientation of its base cell's home face. When a cell lies on a different
//! face than its base cell's home face, the numbering is rotated by
//! [`vertex_rotations`]; [`vertex_num_for_direction`] and
//! [`direction_for_vertex_num`] translate between neighbor directions and
//! vertex numbers with that rotation applied.

pub mod direction;
pub mod orientation;
pub mod rotations;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::base_cells::_is_base_cell_pentagon;
use crate::h3_index::{_h3_leading_non_zero_digit, _h3_to_face_ijk, get_base_cell, is_pentagon};
use crate::types::{Direction, H3Error, H3Index};

pub use direction::{direction_for_vertex_num, vertex_num_for_direction, INVALID_VERTEX_NUM};
pub use orientation::{base_cell_vertex_rotations, BaseCellRotation, INVALID_FACE};
pub use rotations::vertex_rotations;

/// The cell facts vertex orientation depends on.
pub trait VertexCell {
  /// Base cell number (0-121).
  fn base_cell(&self) -> i32;

  /// Icosahedron face the cell's center projects onto.
  fn face(&self) -> Result<i32, H3Error>;

  /// First non-center digit, coarsest resolution first, or `Direction::Center`.
  fn leading_digit(&self) -> Direction;

  /// Whether the cell itself is a pentagon.
  fn is_pentagon(&self) -> bool;

  /// Whether the cell's base cell is a pentagon. Unlike [`VertexCell::is_pentagon`]
  /// this is also `true` for the hexagonal descendants of a pentagon.
  fn is_base_cell_pentagon(&self) -> bool {
    _is_base_cell_pentagon(self.base_cell())
  }
}

impl VertexCell for H3Index {
  #[inline]
  fn base_cell(&self) -> i32 {
    get_base_cell(*self)
  }

  #[inline]
  fn face(&self) -> Result<i32, H3Error> {
    _h3_to_face_ijk(*self).map(|fijk| fijk.face)
  }

  #[inline]
  fn leading_digit(&self) -> Direction {
    _h3_leading_non_zero_digit(*self)
  }

  #[inline]
  fn is_pentagon(&self) -> bool {
    is_pentagon(*self)
  }
}

/// Precomputed facts about a cell, for callers that already hold its face
/// projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellFacts {
  /// Base cell number (0-121).
  pub base_cell: i32,
  /// Face the cell's center projects onto.
  pub face: i32,
  /// First non-center digit.
  pub leading_digit: Direction,
  /// Cell pentagon flag.
  pub is_pentagon: bool,
}

impl CellFacts {
  /// Captures the vertex orientation facts of `h`.
  pub fn from_cell(h: H3Index) -> Result<Self, H3Error> {
    Ok(Self {
      base_cell: h.base_cell(),
      face: h.face()?,
      leading_digit: h.leading_digit(),
      is_pentagon: VertexCell::is_pentagon(&h),
    })
  }
}

impl VertexCell for CellFacts {
  #[inline]
  fn base_cell(&self) -> i32 {
    self.base_cell
  }

  #[inline]
  fn face(&self) -> Result<i32, H3Error> {
    Ok(self.face)
  }

  #[inline]
  fn leading_digit(&self) -> Direction {
    self.leading_digit
  }

  #[inline]
  fn is_pentagon(&self) -> bool {
    self.is_pentagon
  }
}
