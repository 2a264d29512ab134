//! Per base cell face associations and the counter-clockwise rotations that
//! bring each face's vertex layout to the base cell's home face orientation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_BASE_CELL_FACES, NUM_BASE_CELLS};

/// Face number of an unused slot in a base cell's rotation row.
pub const INVALID_FACE: i32 = -1;

/// One face a base cell touches and the number of 60 degree counter-clockwise
/// rotations from that face's orientation to the base cell's home face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BaseCellRotation {
  /// Icosahedron face number, or `INVALID_FACE` for an unused slot.
  pub face: i32,
  /// Counter-clockwise 60 degree rotations, 0 to 5.
  pub ccw_rot60: i32,
}

impl BaseCellRotation {
  /// Whether this slot names a face.
  #[inline]
  #[must_use]
  pub const fn is_valid(&self) -> bool {
    self.face != INVALID_FACE
  }
}

const fn rot(face: i32, ccw_rot60: i32) -> BaseCellRotation {
  BaseCellRotation { face, ccw_rot60 }
}

/// Vertex rotation rows for every base cell.
///
/// Hexagon rows list their faces in no particular order, with the unused slots
/// trailing. Pentagon rows fill all five slots in directional order starting at
/// `Direction::JAxes`, so slot `d - 2` holds the face entered through digit `d`.
#[rustfmt::skip]
pub(crate) static BASE_CELL_VERTEX_ROTATIONS: [[BaseCellRotation; MAX_BASE_CELL_FACES]; NUM_BASE_CELLS as usize] = [
  [rot( 0, 5), rot( 1, 0), rot( 2, 1), rot(-1, 0), rot(-1, 0)], // base cell 0
  [rot( 1, 5), rot( 2, 0), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 1
  [rot( 0, 5), rot( 1, 0), rot( 2, 1), rot( 6, 3), rot(-1, 0)], // base cell 2
  [rot( 1, 5), rot( 2, 0), rot( 3, 1), rot(-1, 0), rot(-1, 0)], // base cell 3
  [rot( 4, 5), rot( 0, 0), rot( 2, 3), rot( 1, 2), rot( 3, 4)], // base cell 4 (pentagon)
  [rot( 0, 5), rot( 1, 0), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 5
  [rot( 1, 0), rot( 2, 1), rot( 6, 3), rot(-1, 0), rot(-1, 0)], // base cell 6
  [rot( 1, 5), rot( 2, 0), rot( 3, 1), rot( 7, 3), rot(-1, 0)], // base cell 7
  [rot( 0, 0), rot( 1, 1), rot( 4, 5), rot(-1, 0), rot(-1, 0)], // base cell 8
  [rot( 1, 5), rot( 2, 0), rot( 7, 3), rot(-1, 0), rot(-1, 0)], // base cell 9
  [rot( 0, 5), rot( 1, 0), rot( 6, 3), rot(-1, 0), rot(-1, 0)], // base cell 10
  [rot( 1, 0), rot( 6, 3), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 11
  [rot( 2, 5), rot( 3, 0), rot( 4, 1), rot(-1, 0), rot(-1, 0)], // base cell 12
  [rot( 2, 5), rot( 3, 0), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 13
  [rot( 6, 3), rot(11, 0), rot( 2, 1), rot( 7, 4), rot( 1, 0)], // base cell 14 (pentagon)
  [rot( 0, 1), rot( 3, 5), rot( 4, 0), rot(-1, 0), rot(-1, 0)], // base cell 15
  [rot( 0, 0), rot( 1, 1), rot( 4, 5), rot( 5, 3), rot(-1, 0)], // base cell 16
  [rot( 1, 3), rot( 6, 0), rot(11, 3), rot(-1, 0), rot(-1, 0)], // base cell 17
  [rot( 0, 0), rot( 1, 1), rot( 5, 3), rot(-1, 0), rot(-1, 0)], // base cell 18
  [rot( 2, 0), rot( 7, 3), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 19
  [rot( 2, 3), rot( 7, 0), rot(11, 3), rot(-1, 0), rot(-1, 0)], // base cell 20
  [rot( 2, 0), rot( 3, 1), rot( 7, 3), rot(-1, 0), rot(-1, 0)], // base cell 21
  [rot( 0, 0), rot( 4, 5), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 22
  [rot( 1, 3), rot( 6, 0), rot(10, 3), rot(-1, 0), rot(-1, 0)], // base cell 23
  [rot( 5, 3), rot(10, 0), rot( 1, 1), rot( 6, 4), rot( 0, 0)], // base cell 24 (pentagon)
  [rot( 1, 3), rot( 6, 0), rot(10, 3), rot(11, 3), rot(-1, 0)], // base cell 25
  [rot( 2, 5), rot( 3, 0), rot( 4, 1), rot( 8, 3), rot(-1, 0)], // base cell 26
  [rot( 6, 3), rot( 7, 3), rot(11, 0), rot(-1, 0), rot(-1, 0)], // base cell 27
  [rot( 3, 5), rot( 4, 0), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 28
  [rot( 2, 5), rot( 3, 0), rot( 8, 3), rot(-1, 0), rot(-1, 0)], // base cell 29
  [rot( 0, 0), rot( 5, 3), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 30
  [rot( 0, 1), rot( 3, 5), rot( 4, 0), rot( 9, 3), rot(-1, 0)], // base cell 31
  [rot( 0, 3), rot( 5, 0), rot(10, 3), rot(-1, 0), rot(-1, 0)], // base cell 32
  [rot( 0, 0), rot( 4, 5), rot( 5, 3), rot(-1, 0), rot(-1, 0)], // base cell 33
  [rot( 2, 3), rot( 7, 0), rot(12, 3), rot(-1, 0), rot(-1, 0)], // base cell 34
  [rot( 6, 3), rot(11, 0), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 35
  [rot( 2, 3), rot( 7, 0), rot(11, 3), rot(12, 3), rot(-1, 0)], // base cell 36
  [rot( 5, 3), rot( 6, 3), rot(10, 0), rot(-1, 0), rot(-1, 0)], // base cell 37
  [rot( 7, 3), rot(12, 0), rot( 3, 1), rot( 8, 4), rot( 2, 0)], // base cell 38 (pentagon)
  [rot( 6, 0), rot(10, 3), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 39
  [rot( 7, 0), rot(11, 3), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 40
  [rot( 0, 1), rot( 4, 0), rot( 9, 3), rot(-1, 0), rot(-1, 0)], // base cell 41
  [rot( 3, 0), rot( 4, 1), rot( 8, 3), rot(-1, 0), rot(-1, 0)], // base cell 42
  [rot( 3, 0), rot( 8, 3), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 43
  [rot( 3, 5), rot( 4, 0), rot( 9, 3), rot(-1, 0), rot(-1, 0)], // base cell 44
  [rot( 6, 0), rot(10, 3), rot(11, 3), rot(-1, 0), rot(-1, 0)], // base cell 45
  [rot( 6, 3), rot( 7, 3), rot(11, 0), rot(16, 3), rot(-1, 0)], // base cell 46
  [rot( 3, 3), rot( 8, 0), rot(12, 3), rot(-1, 0), rot(-1, 0)], // base cell 47
  [rot( 0, 3), rot( 5, 0), rot(14, 3), rot(-1, 0), rot(-1, 0)], // base cell 48
  [rot( 9, 3), rot(14, 0), rot( 0, 1), rot( 5, 4), rot( 4, 0)], // base cell 49 (pentagon)
  [rot( 0, 3), rot( 5, 0), rot(10, 3), rot(14, 3), rot(-1, 0)], // base cell 50
  [rot( 7, 3), rot( 8, 3), rot(12, 0), rot(-1, 0), rot(-1, 0)], // base cell 51
  [rot( 5, 3), rot(10, 0), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 52
  [rot( 4, 0), rot( 9, 3), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 53
  [rot( 7, 3), rot(12, 0), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 54
  [rot( 7, 0), rot(11, 3), rot(12, 3), rot(-1, 0), rot(-1, 0)], // base cell 55
  [rot( 6, 3), rot(11, 0), rot(16, 3), rot(-1, 0), rot(-1, 0)], // base cell 56
  [rot( 5, 1), rot( 6, 3), rot(10, 0), rot(15, 3), rot(-1, 0)], // base cell 57
  [rot( 8, 3), rot(13, 0), rot( 4, 1), rot( 9, 4), rot( 3, 0)], // base cell 58 (pentagon)
  [rot( 6, 3), rot(10, 0), rot(15, 3), rot(-1, 0), rot(-1, 0)], // base cell 59
  [rot( 7, 3), rot(11, 0), rot(16, 3), rot(-1, 0), rot(-1, 0)], // base cell 60
  [rot( 4, 3), rot( 9, 0), rot(14, 3), rot(-1, 0), rot(-1, 0)], // base cell 61
  [rot( 3, 3), rot( 8, 0), rot(13, 3), rot(-1, 0), rot(-1, 0)], // base cell 62
  [rot(11, 3), rot( 6, 0), rot(15, 1), rot(10, 4), rot(16, 0)], // base cell 63 (pentagon)
  [rot( 3, 3), rot( 8, 0), rot(12, 3), rot(13, 3), rot(-1, 0)], // base cell 64
  [rot( 4, 3), rot( 9, 0), rot(13, 3), rot(-1, 0), rot(-1, 0)], // base cell 65
  [rot( 5, 3), rot( 9, 3), rot(14, 0), rot(-1, 0), rot(-1, 0)], // base cell 66
  [rot( 5, 0), rot(14, 3), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 67
  [rot(11, 3), rot(16, 0), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 68
  [rot( 8, 0), rot(12, 3), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 69
  [rot( 5, 0), rot(10, 3), rot(14, 3), rot(-1, 0), rot(-1, 0)], // base cell 70
  [rot( 7, 3), rot( 8, 3), rot(12, 0), rot(17, 3), rot(-1, 0)], // base cell 71
  [rot(12, 3), rot( 7, 0), rot(16, 1), rot(11, 4), rot(17, 0)], // base cell 72 (pentagon)
  [rot( 7, 3), rot(12, 0), rot(17, 3), rot(-1, 0), rot(-1, 0)], // base cell 73
  [rot( 5, 3), rot(10, 0), rot(15, 3), rot(-1, 0), rot(-1, 0)], // base cell 74
  [rot( 4, 3), rot( 9, 0), rot(13, 3), rot(14, 3), rot(-1, 0)], // base cell 75
  [rot( 8, 3), rot( 9, 3), rot(13, 0), rot(-1, 0), rot(-1, 0)], // base cell 76
  [rot(11, 3), rot(15, 1), rot(16, 0), rot(-1, 0), rot(-1, 0)], // base cell 77
  [rot(10, 3), rot(15, 0), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 78
  [rot(10, 3), rot(15, 0), rot(16, 5), rot(-1, 0), rot(-1, 0)], // base cell 79
  [rot(11, 3), rot(16, 0), rot(17, 5), rot(-1, 0), rot(-1, 0)], // base cell 80
  [rot( 9, 3), rot(14, 0), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 81
  [rot( 8, 3), rot(13, 0), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 82
  [rot(10, 3), rot( 5, 0), rot(19, 1), rot(14, 4), rot(15, 0)], // base cell 83 (pentagon)
  [rot( 8, 0), rot(12, 3), rot(13, 3), rot(-1, 0), rot(-1, 0)], // base cell 84
  [rot( 5, 3), rot( 9, 3), rot(14, 0), rot(19, 3), rot(-1, 0)], // base cell 85
  [rot( 9, 0), rot(13, 3), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 86
  [rot( 5, 3), rot(14, 0), rot(19, 3), rot(-1, 0), rot(-1, 0)], // base cell 87
  [rot(12, 3), rot(16, 1), rot(17, 0), rot(-1, 0), rot(-1, 0)], // base cell 88
  [rot( 8, 3), rot(12, 0), rot(17, 3), rot(-1, 0), rot(-1, 0)], // base cell 89
  [rot(11, 3), rot(15, 1), rot(16, 0), rot(17, 5), rot(-1, 0)], // base cell 90
  [rot(12, 3), rot(17, 0), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 91
  [rot(10, 3), rot(15, 0), rot(19, 1), rot(-1, 0), rot(-1, 0)], // base cell 92
  [rot(15, 1), rot(16, 0), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 93
  [rot( 9, 0), rot(13, 3), rot(14, 3), rot(-1, 0), rot(-1, 0)], // base cell 94
  [rot(10, 3), rot(15, 0), rot(16, 5), rot(19, 1), rot(-1, 0)], // base cell 95
  [rot( 8, 3), rot( 9, 3), rot(13, 0), rot(18, 3), rot(-1, 0)], // base cell 96
  [rot(13, 3), rot( 8, 0), rot(17, 1), rot(12, 4), rot(18, 0)], // base cell 97 (pentagon)
  [rot( 8, 3), rot(13, 0), rot(18, 3), rot(-1, 0), rot(-1, 0)], // base cell 98
  [rot(16, 1), rot(17, 0), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 99
  [rot(14, 3), rot(15, 5), rot(19, 0), rot(-1, 0), rot(-1, 0)], // base cell 100
  [rot( 9, 3), rot(14, 0), rot(19, 3), rot(-1, 0), rot(-1, 0)], // base cell 101
  [rot(14, 3), rot(19, 0), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 102
  [rot(12, 3), rot(17, 0), rot(18, 5), rot(-1, 0), rot(-1, 0)], // base cell 103
  [rot( 9, 3), rot(13, 0), rot(18, 3), rot(-1, 0), rot(-1, 0)], // base cell 104
  [rot(12, 3), rot(16, 1), rot(17, 0), rot(18, 5), rot(-1, 0)], // base cell 105
  [rot(15, 1), rot(16, 0), rot(17, 5), rot(-1, 0), rot(-1, 0)], // base cell 106
  [rot(14, 3), rot( 9, 0), rot(18, 1), rot(13, 4), rot(19, 0)], // base cell 107 (pentagon)
  [rot(15, 0), rot(19, 1), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 108
  [rot(15, 0), rot(16, 5), rot(19, 1), rot(-1, 0), rot(-1, 0)], // base cell 109
  [rot(13, 3), rot(18, 0), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 110
  [rot(13, 3), rot(17, 1), rot(18, 0), rot(-1, 0), rot(-1, 0)], // base cell 111
  [rot(14, 3), rot(18, 1), rot(19, 0), rot(-1, 0), rot(-1, 0)], // base cell 112
  [rot(16, 1), rot(17, 0), rot(18, 5), rot(-1, 0), rot(-1, 0)], // base cell 113
  [rot(14, 3), rot(15, 5), rot(18, 1), rot(19, 0), rot(-1, 0)], // base cell 114
  [rot(13, 3), rot(18, 0), rot(19, 5), rot(-1, 0), rot(-1, 0)], // base cell 115
  [rot(17, 1), rot(18, 0), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 116
  [rot(15, 5), rot(19, 0), rot(17, 3), rot(18, 2), rot(16, 4)], // base cell 117 (pentagon)
  [rot(15, 5), rot(18, 1), rot(19, 0), rot(-1, 0), rot(-1, 0)], // base cell 118
  [rot(13, 3), rot(17, 1), rot(18, 0), rot(19, 5), rot(-1, 0)], // base cell 119
  [rot(18, 1), rot(19, 0), rot(-1, 0), rot(-1, 0), rot(-1, 0)], // base cell 120
  [rot(17, 1), rot(18, 0), rot(19, 5), rot(-1, 0), rot(-1, 0)], // base cell 121
];

/// Returns the vertex rotation row for `base_cell`, or `None` if it is not a
/// base cell number.
#[inline]
#[must_use]
pub fn base_cell_vertex_rotations(base_cell: i32) -> Option<&'static [BaseCellRotation; MAX_BASE_CELL_FACES]> {
  usize::try_from(base_cell).ok().and_then(|bc| BASE_CELL_VERTEX_ROTATIONS.get(bc))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::base_cells::{_base_cell_data, _is_base_cell_pentagon};
  use crate::constants::NUM_ICOSA_FACES;

  #[test]
  fn test_every_base_cell_touches_a_face() {
    for bc in 0..NUM_BASE_CELLS {
      let row = base_cell_vertex_rotations(bc).expect("in range");
      assert!(row.iter().any(BaseCellRotation::is_valid), "base cell {bc}");
    }
  }

  #[test]
  fn test_out_of_range_base_cells() {
    assert!(base_cell_vertex_rotations(-1).is_none());
    assert!(base_cell_vertex_rotations(NUM_BASE_CELLS).is_none());
  }

  #[test]
  fn test_slot_values_in_range() {
    for (bc, row) in BASE_CELL_VERTEX_ROTATIONS.iter().enumerate() {
      for slot in row {
        assert!((0..6).contains(&slot.ccw_rot60), "base cell {bc}: {slot:?}");
        if slot.is_valid() {
          assert!((0..NUM_ICOSA_FACES).contains(&slot.face), "base cell {bc}: {slot:?}");
        } else {
          assert_eq!(slot.ccw_rot60, 0, "base cell {bc}: unused slot carries a rotation");
        }
      }
    }
  }

  #[test]
  fn test_unused_slots_trail() {
    for (bc, row) in BASE_CELL_VERTEX_ROTATIONS.iter().enumerate() {
      let used = row.iter().take_while(|slot| slot.is_valid()).count();
      assert!(row[used..].iter().all(|slot| !slot.is_valid()), "base cell {bc}");
    }
  }

  #[test]
  fn test_faces_unique_within_row() {
    for (bc, row) in BASE_CELL_VERTEX_ROTATIONS.iter().enumerate() {
      let faces: Vec<i32> = row.iter().filter(|s| s.is_valid()).map(|s| s.face).collect();
      for (i, face) in faces.iter().enumerate() {
        assert!(!faces[i + 1..].contains(face), "base cell {bc} repeats face {face}");
      }
    }
  }

  #[test]
  fn test_home_face_needs_no_rotation() {
    for bc in 0..NUM_BASE_CELLS {
      let home = _base_cell_data(bc).expect("in range").home_fijk.face;
      let row = base_cell_vertex_rotations(bc).expect("in range");
      let slot = row.iter().find(|s| s.face == home).expect("home face listed");
      assert_eq!(slot.ccw_rot60, 0, "base cell {bc}");
    }
  }

  #[test]
  fn test_pentagons_fill_every_slot() {
    for bc in 0..NUM_BASE_CELLS {
      let row = base_cell_vertex_rotations(bc).expect("in range");
      let used = row.iter().filter(|s| s.is_valid()).count();
      if _is_base_cell_pentagon(bc) {
        assert_eq!(used, MAX_BASE_CELL_FACES, "pentagon base cell {bc}");
        assert_ne!(row[1].face, row[3].face, "pentagon base cell {bc}");
      } else {
        assert!(used < MAX_BASE_CELL_FACES, "hexagon base cell {bc}");
      }
    }
  }
}
