use log::{error, trace};

use super::orientation::base_cell_vertex_rotations;
use super::VertexCell;
use crate::types::{Direction, H3Error};

/// Slot of a pentagon rotation row holding the face entered through `digit`.
#[inline]
const fn pentagon_slot(digit: Direction) -> usize {
  digit as usize - 2
}

/// Number of 60 degree counter-clockwise rotations of `cell`'s vertex numbers
/// relative to the directional layout of its neighbors.
///
/// Descendants of a pentagon whose leading digit places them on the far side
/// of the deleted K subsequence get one extra rotation: clockwise when crossing
/// from the JK sector onto the IK sector's face, counter-clockwise when crossing
/// from the IK sector onto the JK sector's face.
///
/// # Returns
/// A rotation count in `0..=5`, `H3Error::Failed` if the cell's face is not
/// one its base cell touches, or the face projection error. An unlisted face is
/// logged with `log::error!` and returned, never asserted, since `CellFacts`
/// can carry any face.
pub fn vertex_rotations<C: VertexCell + ?Sized>(cell: &C) -> Result<i32, H3Error> {
  let base_cell = cell.base_cell();
  let face = cell.face()?;
  let row = base_cell_vertex_rotations(base_cell).ok_or(H3Error::CellInvalid)?;

  let Some(slot) = row.iter().find(|slot| slot.is_valid() && slot.face == face) else {
    error!("base cell {base_cell} has no vertex rotation for face {face}");
    return Err(H3Error::Failed);
  };
  let ccw_rot60 = slot.ccw_rot60;

  if cell.is_base_cell_pentagon() {
    let leading_digit = cell.leading_digit();
    if leading_digit == Direction::JkAxes && face == row[pentagon_slot(Direction::IkAxes)].face {
      trace!("base cell {base_cell} face {face}: JK sector crosses to IK, rotating cw");
      return Ok((ccw_rot60 + 5) % 6);
    }
    if leading_digit == Direction::IkAxes && face == row[pentagon_slot(Direction::JkAxes)].face {
      trace!("base cell {base_cell} face {face}: IK sector crosses to JK, rotating ccw");
      return Ok((ccw_rot60 + 1) % 6);
    }
  }

  Ok(ccw_rot60)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::vertex::orientation::BASE_CELL_VERTEX_ROTATIONS;
  use crate::vertex::CellFacts;

  fn facts(base_cell: i32, face: i32, leading_digit: Direction) -> CellFacts {
    CellFacts { base_cell, face, leading_digit, is_pentagon: false }
  }

  #[test]
  fn test_hexagon_uses_slot_rotation() {
    // base cell 2: {0, 5}, {1, 0}, {2, 1}, {6, 3}
    assert_eq!(vertex_rotations(&facts(2, 6, Direction::JAxes)), Ok(3));
    assert_eq!(vertex_rotations(&facts(2, 0, Direction::IAxes)), Ok(5));
    assert_eq!(vertex_rotations(&facts(2, 1, Direction::Center)), Ok(0));
  }

  #[test]
  fn test_hexagon_ignores_leading_digit() {
    for digit in [Direction::JkAxes, Direction::IkAxes] {
      assert_eq!(vertex_rotations(&facts(2, 2, digit)), Ok(1));
    }
  }

  #[test]
  fn test_pentagon_jk_crossing_rotates_cw() {
    // base cell 4: {4, 5}, {0, 0}, {2, 3}, {1, 2}, {3, 4}; IK sector is face 1
    assert_eq!(vertex_rotations(&facts(4, 1, Direction::JkAxes)), Ok(1));
    // base cell 14 IK sector is face 7 with rotation 4
    assert_eq!(vertex_rotations(&facts(14, 7, Direction::JkAxes)), Ok(3));
  }

  #[test]
  fn test_pentagon_ik_crossing_rotates_ccw() {
    // base cell 4 JK sector is face 0
    assert_eq!(vertex_rotations(&facts(4, 0, Direction::IkAxes)), Ok(1));
    // base cell 117: {15, 5}, {19, 0}, {17, 3}, {18, 2}, {16, 4}; JK sector is face 19
    assert_eq!(vertex_rotations(&facts(117, 19, Direction::IkAxes)), Ok(1));
  }

  #[test]
  fn test_pentagon_without_crossing() {
    // leading JK on the JK face, and IK on the IK face, need no correction
    assert_eq!(vertex_rotations(&facts(4, 0, Direction::JkAxes)), Ok(0));
    assert_eq!(vertex_rotations(&facts(4, 1, Direction::IkAxes)), Ok(2));
    assert_eq!(vertex_rotations(&facts(24, 0, Direction::JkAxes)), Ok(0));
    // other leading digits are never corrected
    for digit in [Direction::JAxes, Direction::IAxes, Direction::IjAxes, Direction::Center] {
      assert_eq!(vertex_rotations(&facts(4, 1, digit)), Ok(2), "{digit:?}");
      assert_eq!(vertex_rotations(&facts(4, 0, digit)), Ok(0), "{digit:?}");
    }
  }

  #[test]
  fn test_pentagon_corrections_exclusive() {
    for (bc, row) in BASE_CELL_VERTEX_ROTATIONS.iter().enumerate() {
      let bc = bc as i32;
      if !crate::base_cells::_is_base_cell_pentagon(bc) {
        continue;
      }
      for slot in row {
        let corrected = [Direction::JkAxes, Direction::IkAxes]
          .into_iter()
          .filter(|digit| vertex_rotations(&facts(bc, slot.face, *digit)) != Ok(slot.ccw_rot60))
          .count();
        assert!(corrected <= 1, "base cell {bc} face {}", slot.face);
      }
    }
  }

  #[test]
  fn test_unlisted_face_fails() {
    // base cell 1 only touches faces 1 and 2
    assert_eq!(vertex_rotations(&facts(1, 7, Direction::JAxes)), Err(H3Error::Failed));
    // unused slots never match
    assert_eq!(vertex_rotations(&facts(1, -1, Direction::JAxes)), Err(H3Error::Failed));
  }

  #[test]
  fn test_out_of_range_base_cell() {
    assert_eq!(vertex_rotations(&facts(122, 0, Direction::JAxes)), Err(H3Error::CellInvalid));
    assert_eq!(vertex_rotations(&facts(-3, 0, Direction::JAxes)), Err(H3Error::CellInvalid));
  }
}
