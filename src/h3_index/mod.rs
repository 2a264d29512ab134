pub mod inspection;

use crate::base_cells::{_base_cell_data, _is_base_cell_pentagon};
use crate::coords::face_ijk::{Overage, _adjust_overage_class_ii};
use crate::coords::ijk::{_down_ap7, _down_ap7r, _neighbor, _rotate60_cw, _up_ap7r};
use crate::types::{Direction, FaceIJK, H3Error, H3Index};
use crate::constants::*;

pub use inspection::{get_base_cell_number, is_pentagon, is_valid_cell};

// H3Index bit layout accessors/mutators

/// Gets the mode of the H3 index.
#[inline(always)]
#[must_use]
pub const fn get_mode(h: H3Index) -> u8 {
  ((h.0 & H3_MODE_MASK) >> H3_MODE_OFFSET) as u8
}

/// Sets the mode of the H3 index.
#[inline(always)]
pub fn set_mode(h: &mut H3Index, mode: u8) {
  h.0 = (h.0 & H3_MODE_MASK_NEGATIVE) | (u64::from(mode) << H3_MODE_OFFSET);
}

/// Gets the resolution of the H3 index.
#[inline(always)]
#[must_use]
pub const fn get_resolution(h: H3Index) -> i32 {
  ((h.0 & H3_RES_MASK) >> H3_RES_OFFSET) as i32
}

/// Sets the resolution of the H3 index.
#[inline(always)]
pub fn set_resolution(h: &mut H3Index, res: i32) {
  h.0 = (h.0 & H3_RES_MASK_NEGATIVE) | ((res as u64) << H3_RES_OFFSET);
}

/// Gets the base cell of the H3 index.
#[inline(always)]
#[must_use]
pub const fn get_base_cell(h: H3Index) -> i32 {
  ((h.0 & H3_BC_MASK) >> H3_BC_OFFSET) as i32
}

/// Sets the base cell of the H3 index.
#[inline(always)]
pub fn set_base_cell(h: &mut H3Index, bc: i32) {
  h.0 = (h.0 & H3_BC_MASK_NEGATIVE) | ((bc as u64) << H3_BC_OFFSET);
}

/// Gets the H3 digit at the given resolution `res` from the H3 index.
/// `res` must be between 1 and `MAX_H3_RES`.
#[inline(always)]
#[must_use]
pub fn get_index_digit(h: H3Index, res: i32) -> Direction {
  let offset = (MAX_H3_RES - res) * i32::from(H3_PER_DIGIT_OFFSET);
  Direction::from_bits(((h.0 >> offset) & H3_DIGIT_MASK) as u8)
}

/// Sets the H3 digit at the given resolution `res` in the H3 index.
/// `res` must be between 1 and `MAX_H3_RES`.
#[inline(always)]
pub fn set_index_digit(h: &mut H3Index, res: i32, digit: Direction) {
  let offset = (MAX_H3_RES - res) * i32::from(H3_PER_DIGIT_OFFSET);
  h.0 = (h.0 & !(H3_DIGIT_MASK << offset)) | ((digit as u64) << offset);
}

/// Gets the reserved bits of the H3 index. Should be 0 for valid cell indexes.
#[inline(always)]
#[must_use]
pub const fn get_reserved_bits(h: H3Index) -> u8 {
  ((h.0 & H3_RESERVED_MASK) >> H3_RESERVED_OFFSET) as u8
}

/// Gets the high bit of the H3 index (should be 0).
#[inline(always)]
#[must_use]
pub const fn get_high_bit(h: H3Index) -> u8 {
  ((h.0 & H3_HIGH_BIT_MASK) >> 63) as u8
}

/// Builds the cell index on `base_cell` whose resolution digits are `digits`,
/// coarsest first. The resolution is `digits.len()`.
///
/// No validation is performed; a pentagon base cell with a leading
/// `Direction::KAxes` digit yields an index that `is_valid_cell` rejects.
#[must_use]
pub fn cell_from_digits(base_cell: i32, digits: &[Direction]) -> H3Index {
  let mut h = H3Index(H3_INIT);
  set_mode(&mut h, H3_CELL_MODE);
  set_resolution(&mut h, digits.len() as i32);
  set_base_cell(&mut h, base_cell);
  for (r, digit) in (1..).zip(digits) {
    set_index_digit(&mut h, r, *digit);
  }
  h
}

/// Returns whether or not a resolution is a Class III grid.
/// Odd resolutions are Class III, even are Class II.
#[inline]
#[must_use]
pub(crate) fn is_resolution_class_iii(r: i32) -> bool {
  r % 2 == 1
}

/// Returns the highest resolution non-zero digit in an H3Index.
#[inline]
#[must_use]
pub(crate) fn _h3_leading_non_zero_digit(h: H3Index) -> Direction {
  (1..=get_resolution(h))
    .map(|r| get_index_digit(h, r))
    .find(|digit| *digit != Direction::Center)
    .unwrap_or(Direction::Center)
}

/// Rotate an H3Index 60 degrees clockwise.
#[inline]
#[must_use]
pub(crate) fn _h3_rotate60_cw(mut h: H3Index) -> H3Index {
  for r in 1..=get_resolution(h) {
    let rotated = _rotate60_cw(get_index_digit(h, r));
    set_index_digit(&mut h, r, rotated);
  }
  h
}

/// Convert an `H3Index` to the `FaceIJK` address of the face its center lies on.
///
/// # Returns
/// The face and normalized IJK+ coordinates on that face, or
/// `H3Error::CellInvalid` if the index does not name a base cell.
pub(crate) fn _h3_to_face_ijk(h: H3Index) -> Result<FaceIJK, H3Error> {
  let base_cell = get_base_cell(h);
  let data = _base_cell_data(base_cell).ok_or(H3Error::CellInvalid)?;
  let is_pent = data.is_pentagon;

  // adjust for the pentagonal missing sequence; all of sub-sequence 5 needs
  // to be adjusted (and some of sub-sequence 4 below)
  let h = if is_pent && _h3_leading_non_zero_digit(h) == Direction::IkAxes {
    _h3_rotate60_cw(h)
  } else {
    h
  };

  // start with the "home" face and ijk+ coordinates for the base cell of h
  let mut fijk = data.home_fijk;
  if !_h3_to_face_ijk_with_initialized_fijk(h, &mut fijk) {
    // no overage is possible; h lies on this face
    return Ok(fijk);
  }

  // if we're here we have the potential for an "overage"; i.e., it is
  // possible that h lies on an adjacent face
  let orig_ijk = fijk.coord;

  // if we're in Class III, drop into the next finer Class II grid
  let res = get_resolution(h);
  let mut adj_res = res;
  if is_resolution_class_iii(res) {
    _down_ap7r(&mut fijk.coord);
    adj_res += 1;
  }

  // adjust for overage if needed
  // a pentagon base cell with a leading 4 digit requires special handling
  let pent_leading_4 = is_pent && _h3_leading_non_zero_digit(h) == Direction::IAxes;
  if _adjust_overage_class_ii(&mut fijk, adj_res, pent_leading_4) == Overage::NoOverage {
    if res != adj_res {
      fijk.coord = orig_ijk;
    }
    return Ok(fijk);
  }

  // if the base cell is a pentagon we have the potential for secondary overages
  if is_pent {
    while _adjust_overage_class_ii(&mut fijk, adj_res, false) == Overage::NewFace {}
  }

  if res != adj_res {
    _up_ap7r(&mut fijk.coord);
  }
  Ok(fijk)
}

/// Walks the resolution digits of `h` down from the base cell address already
/// stored in `fijk`. Works in place.
///
/// # Returns
/// `true` if the possibility of overage exists, `false` otherwise.
pub(crate) fn _h3_to_face_ijk_with_initialized_fijk(h: H3Index, fijk: &mut FaceIJK) -> bool {
  let ijk = &mut fijk.coord;
  let res = get_resolution(h);

  // center base cell hierarchy is entirely on this face
  let at_center = ijk.i == 0 && ijk.j == 0 && ijk.k == 0;
  let possible_overage = _is_base_cell_pentagon(get_base_cell(h)) || !(res == 0 || at_center);

  for r in 1..=res {
    if is_resolution_class_iii(r) {
      // Class III == rotate ccw
      _down_ap7(ijk);
    } else {
      // Class II == rotate cw
      _down_ap7r(ijk);
    }
    _neighbor(ijk, get_index_digit(h, r));
  }

  possible_overage
}
