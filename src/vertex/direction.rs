//! Translation between neighbor directions and topological vertex numbers.
//!
//! The neighbor in a given direction shares the edge running from the returned
//! vertex number to the next one in counter-clockwise order.

use super::rotations::vertex_rotations;
use super::VertexCell;
use crate::constants::{NUM_HEX_VERTS, NUM_PENT_VERTS};
use crate::types::{Direction, H3Error};

/// Vertex number placeholder for directions that have no vertex.
pub const INVALID_VERTEX_NUM: i32 = -1;

/// Hexagon direction to vertex number, on the base cell's home face.
/// Indexed by digit; center and invalid have no vertex.
#[rustfmt::skip]
const DIRECTION_TO_VERTEX_NUM_HEX: [i32; 8] = [
  INVALID_VERTEX_NUM, 3, 1, 2, 5, 4, 0, INVALID_VERTEX_NUM,
];

/// Pentagon direction to vertex number, on the base cell's home face.
/// The deleted K axis has no vertex.
#[rustfmt::skip]
const DIRECTION_TO_VERTEX_NUM_PENT: [i32; 8] = [
  INVALID_VERTEX_NUM, INVALID_VERTEX_NUM, 1, 2, 4, 3, 0, INVALID_VERTEX_NUM,
];

/// Hexagon vertex number to the direction of the edge it starts.
const VERTEX_NUM_TO_DIRECTION_HEX: [Direction; NUM_HEX_VERTS as usize] = [
  Direction::IjAxes,
  Direction::JAxes,
  Direction::JkAxes,
  Direction::KAxes,
  Direction::IkAxes,
  Direction::IAxes,
];

/// Pentagon vertex number to the direction of the edge it starts.
const VERTEX_NUM_TO_DIRECTION_PENT: [Direction; NUM_PENT_VERTS as usize] = [
  Direction::IjAxes,
  Direction::JAxes,
  Direction::JkAxes,
  Direction::IkAxes,
  Direction::IAxes,
];

/// Returns whether `direction` names an edge of a cell, given its pentagon flag.
#[inline]
fn is_edge_direction(direction: Direction, is_pentagon: bool) -> bool {
  match direction {
    Direction::Center | Direction::InvalidDigit => false,
    Direction::KAxes => !is_pentagon,
    Direction::JAxes | Direction::JkAxes | Direction::IAxes | Direction::IkAxes | Direction::IjAxes => true,
  }
}

/// Get the first vertex number for a given direction. The neighbor in this
/// direction is located between this vertex number and the next number in
/// sequence.
///
/// # Returns
/// The vertex number, in `0..6` for hexagons and `0..5` for pentagons.
/// `H3Error::Domain` for `Direction::Center`, `Direction::InvalidDigit`, and
/// `Direction::KAxes` on a pentagon; otherwise any error of [`vertex_rotations`].
pub fn vertex_num_for_direction<C: VertexCell + ?Sized>(cell: &C, direction: Direction) -> Result<i32, H3Error> {
  let is_pentagon = cell.is_pentagon();
  if !is_edge_direction(direction, is_pentagon) {
    return Err(H3Error::Domain);
  }

  let rotations = vertex_rotations(cell)?;

  // rotate the home face vertex clockwise by the cell's ccw rotation
  let (canonical, num_verts) = if is_pentagon {
    (DIRECTION_TO_VERTEX_NUM_PENT[direction as usize], NUM_PENT_VERTS)
  } else {
    (DIRECTION_TO_VERTEX_NUM_HEX[direction as usize], NUM_HEX_VERTS)
  };
  Ok((canonical + num_verts - rotations).rem_euclid(num_verts))
}

/// Get the direction of the edge that begins at `vertex_num`. Inverse of
/// [`vertex_num_for_direction`].
///
/// # Returns
/// The neighbor direction, or `H3Error::Domain` if `vertex_num` is not a
/// vertex of the cell; otherwise any error of [`vertex_rotations`].
pub fn direction_for_vertex_num<C: VertexCell + ?Sized>(cell: &C, vertex_num: i32) -> Result<Direction, H3Error> {
  let is_pentagon = cell.is_pentagon();
  let num_verts = if is_pentagon { NUM_PENT_VERTS } else { NUM_HEX_VERTS };
  if !(0..num_verts).contains(&vertex_num) {
    return Err(H3Error::Domain);
  }

  let rotations = vertex_rotations(cell)?;

  let idx = ((vertex_num + rotations) % num_verts) as usize;
  Ok(if is_pentagon { VERTEX_NUM_TO_DIRECTION_PENT[idx] } else { VERTEX_NUM_TO_DIRECTION_HEX[idx] })
}
