//! Resolution 0 base cell data.

use crate::constants::NUM_BASE_CELLS;
use crate::types::{CoordIJK, FaceIJK};

/// Information on a single base cell.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BaseCellData {
  /// "home" face and normalized ijk coordinates on that face
  pub home_fijk: FaceIJK,
  /// is this base cell a pentagon?
  pub is_pentagon: bool,
}

impl BaseCellData {
  const fn new(face: i32, i: i32, j: i32, k: i32, is_pentagon: bool) -> Self {
    Self {
      home_fijk: FaceIJK {
        face,
        coord: CoordIJK { i, j, k },
      },
      is_pentagon,
    }
  }
}

/// Resolution 0 base cell data lookup table: home face, home IJK+ coordinates
/// and pentagon flag of every base cell.
#[rustfmt::skip]
pub(crate) static BASE_CELL_DATA: [BaseCellData; NUM_BASE_CELLS as usize] = [
    BaseCellData::new( 1, 1, 0, 0, false),  // base cell 0
    BaseCellData::new( 2, 1, 1, 0, false),  // base cell 1
    BaseCellData::new( 1, 0, 0, 0, false),  // base cell 2
    BaseCellData::new( 2, 1, 0, 0, false),  // base cell 3
    BaseCellData::new( 0, 2, 0, 0, true),   // base cell 4 (pentagon)
    BaseCellData::new( 1, 1, 1, 0, false),  // base cell 5
    BaseCellData::new( 1, 0, 0, 1, false),  // base cell 6
    BaseCellData::new( 2, 0, 0, 0, false),  // base cell 7
    BaseCellData::new( 0, 1, 0, 0, false),  // base cell 8
    BaseCellData::new( 2, 0, 1, 0, false),  // base cell 9
    BaseCellData::new( 1, 0, 1, 0, false),  // base cell 10
    BaseCellData::new( 1, 0, 1, 1, false),  // base cell 11
    BaseCellData::new( 3, 1, 0, 0, false),  // base cell 12
    BaseCellData::new( 3, 1, 1, 0, false),  // base cell 13
    BaseCellData::new(11, 2, 0, 0, true),   // base cell 14 (pentagon)
    BaseCellData::new( 4, 1, 0, 0, false),  // base cell 15
    BaseCellData::new( 0, 0, 0, 0, false),  // base cell 16
    BaseCellData::new( 6, 0, 1, 0, false),  // base cell 17
    BaseCellData::new( 0, 0, 0, 1, false),  // base cell 18
    BaseCellData::new( 2, 0, 1, 1, false),  // base cell 19
    BaseCellData::new( 7, 0, 0, 1, false),  // base cell 20
    BaseCellData::new( 2, 0, 0, 1, false),  // base cell 21
    BaseCellData::new( 0, 1, 1, 0, false),  // base cell 22
    BaseCellData::new( 6, 0, 0, 1, false),  // base cell 23
    BaseCellData::new(10, 2, 0, 0, true),   // base cell 24 (pentagon)
    BaseCellData::new( 6, 0, 0, 0, false),  // base cell 25
    BaseCellData::new( 3, 0, 0, 0, false),  // base cell 26
    BaseCellData::new(11, 1, 0, 0, false),  // base cell 27
    BaseCellData::new( 4, 1, 1, 0, false),  // base cell 28
    BaseCellData::new( 3, 0, 1, 0, false),  // base cell 29
    BaseCellData::new( 0, 0, 1, 1, false),  // base cell 30
    BaseCellData::new( 4, 0, 0, 0, false),  // base cell 31
    BaseCellData::new( 5, 0, 1, 0, false),  // base cell 32
    BaseCellData::new( 0, 0, 1, 0, false),  // base cell 33
    BaseCellData::new( 7, 0, 1, 0, false),  // base cell 34
    BaseCellData::new(11, 1, 1, 0, false),  // base cell 35
    BaseCellData::new( 7, 0, 0, 0, false),  // base cell 36
    BaseCellData::new(10, 1, 0, 0, false),  // base cell 37
    BaseCellData::new(12, 2, 0, 0, true),   // base cell 38 (pentagon)
    BaseCellData::new( 6, 1, 0, 1, false),  // base cell 39
    BaseCellData::new( 7, 1, 0, 1, false),  // base cell 40
    BaseCellData::new( 4, 0, 0, 1, false),  // base cell 41
    BaseCellData::new( 3, 0, 0, 1, false),  // base cell 42
    BaseCellData::new( 3, 0, 1, 1, false),  // base cell 43
    BaseCellData::new( 4, 0, 1, 0, false),  // base cell 44
    BaseCellData::new( 6, 1, 0, 0, false),  // base cell 45
    BaseCellData::new(11, 0, 0, 0, false),  // base cell 46
    BaseCellData::new( 8, 0, 0, 1, false),  // base cell 47
    BaseCellData::new( 5, 0, 0, 1, false),  // base cell 48
    BaseCellData::new(14, 2, 0, 0, true),   // base cell 49 (pentagon)
    BaseCellData::new( 5, 0, 0, 0, false),  // base cell 50
    BaseCellData::new(12, 1, 0, 0, false),  // base cell 51
    BaseCellData::new(10, 1, 1, 0, false),  // base cell 52
    BaseCellData::new( 4, 0, 1, 1, false),  // base cell 53
    BaseCellData::new(12, 1, 1, 0, false),  // base cell 54
    BaseCellData::new( 7, 1, 0, 0, false),  // base cell 55
    BaseCellData::new(11, 0, 1, 0, false),  // base cell 56
    BaseCellData::new(10, 0, 0, 0, false),  // base cell 57
    BaseCellData::new(13, 2, 0, 0, true),   // base cell 58 (pentagon)
    BaseCellData::new(10, 0, 0, 1, false),  // base cell 59
    BaseCellData::new(11, 0, 0, 1, false),  // base cell 60
    BaseCellData::new( 9, 0, 1, 0, false),  // base cell 61
    BaseCellData::new( 8, 0, 1, 0, false),  // base cell 62
    BaseCellData::new( 6, 2, 0, 0, true),   // base cell 63 (pentagon)
    BaseCellData::new( 8, 0, 0, 0, false),  // base cell 64
    BaseCellData::new( 9, 0, 0, 1, false),  // base cell 65
    BaseCellData::new(14, 1, 0, 0, false),  // base cell 66
    BaseCellData::new( 5, 1, 0, 1, false),  // base cell 67
    BaseCellData::new(16, 0, 1, 1, false),  // base cell 68
    BaseCellData::new( 8, 1, 0, 1, false),  // base cell 69
    BaseCellData::new( 5, 1, 0, 0, false),  // base cell 70
    BaseCellData::new(12, 0, 0, 0, false),  // base cell 71
    BaseCellData::new( 7, 2, 0, 0, true),   // base cell 72 (pentagon)
    BaseCellData::new(12, 0, 1, 0, false),  // base cell 73
    BaseCellData::new(10, 0, 1, 0, false),  // base cell 74
    BaseCellData::new( 9, 0, 0, 0, false),  // base cell 75
    BaseCellData::new(13, 1, 0, 0, false),  // base cell 76
    BaseCellData::new(16, 0, 0, 1, false),  // base cell 77
    BaseCellData::new(15, 0, 1, 1, false),  // base cell 78
    BaseCellData::new(15, 0, 1, 0, false),  // base cell 79
    BaseCellData::new(16, 0, 1, 0, false),  // base cell 80
    BaseCellData::new(14, 1, 1, 0, false),  // base cell 81
    BaseCellData::new(13, 1, 1, 0, false),  // base cell 82
    BaseCellData::new( 5, 2, 0, 0, true),   // base cell 83 (pentagon)
    BaseCellData::new( 8, 1, 0, 0, false),  // base cell 84
    BaseCellData::new(14, 0, 0, 0, false),  // base cell 85
    BaseCellData::new( 9, 1, 0, 1, false),  // base cell 86
    BaseCellData::new(14, 0, 0, 1, false),  // base cell 87
    BaseCellData::new(17, 0, 0, 1, false),  // base cell 88
    BaseCellData::new(12, 0, 0, 1, false),  // base cell 89
    BaseCellData::new(16, 0, 0, 0, false),  // base cell 90
    BaseCellData::new(17, 0, 1, 1, false),  // base cell 91
    BaseCellData::new(15, 0, 0, 1, false),  // base cell 92
    BaseCellData::new(16, 1, 0, 1, false),  // base cell 93
    BaseCellData::new( 9, 1, 0, 0, false),  // base cell 94
    BaseCellData::new(15, 0, 0, 0, false),  // base cell 95
    BaseCellData::new(13, 0, 0, 0, false),  // base cell 96
    BaseCellData::new( 8, 2, 0, 0, true),   // base cell 97 (pentagon)
    BaseCellData::new(13, 0, 1, 0, false),  // base cell 98
    BaseCellData::new(17, 1, 0, 1, false),  // base cell 99
    BaseCellData::new(19, 0, 1, 0, false),  // base cell 100
    BaseCellData::new(14, 0, 1, 0, false),  // base cell 101
    BaseCellData::new(19, 0, 1, 1, false),  // base cell 102
    BaseCellData::new(17, 0, 1, 0, false),  // base cell 103
    BaseCellData::new(13, 0, 0, 1, false),  // base cell 104
    BaseCellData::new(17, 0, 0, 0, false),  // base cell 105
    BaseCellData::new(16, 1, 0, 0, false),  // base cell 106
    BaseCellData::new( 9, 2, 0, 0, true),   // base cell 107 (pentagon)
    BaseCellData::new(15, 1, 0, 1, false),  // base cell 108
    BaseCellData::new(15, 1, 0, 0, false),  // base cell 109
    BaseCellData::new(18, 0, 1, 1, false),  // base cell 110
    BaseCellData::new(18, 0, 0, 1, false),  // base cell 111
    BaseCellData::new(19, 0, 0, 1, false),  // base cell 112
    BaseCellData::new(17, 1, 0, 0, false),  // base cell 113
    BaseCellData::new(19, 0, 0, 0, false),  // base cell 114
    BaseCellData::new(18, 0, 1, 0, false),  // base cell 115
    BaseCellData::new(18, 1, 0, 1, false),  // base cell 116
    BaseCellData::new(19, 2, 0, 0, true),   // base cell 117 (pentagon)
    BaseCellData::new(19, 1, 0, 0, false),  // base cell 118
    BaseCellData::new(18, 0, 0, 0, false),  // base cell 119
    BaseCellData::new(19, 1, 0, 1, false),  // base cell 120
    BaseCellData::new(18, 1, 0, 0, false),  // base cell 121
];

/// Return whether or not the indicated base cell is a pentagon.
#[inline]
#[must_use]
pub(crate) fn _is_base_cell_pentagon(base_cell: i32) -> bool {
  _base_cell_data(base_cell).is_some_and(|data| data.is_pentagon)
}

/// Looks up a base cell's data, or `None` if `base_cell` is out of range.
#[inline]
#[must_use]
pub(crate) fn _base_cell_data(base_cell: i32) -> Option<&'static BaseCellData> {
  usize::try_from(base_cell).ok().and_then(|idx| BASE_CELL_DATA.get(idx))
}

/// Iterates over the numbers of the twelve pentagonal base cells, ascending.
pub fn pentagon_base_cells() -> impl Iterator<Item = i32> {
  (0..NUM_BASE_CELLS).filter(|&bc| _is_base_cell_pentagon(bc))
}
