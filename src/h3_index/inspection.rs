// src/h3_index/inspection.rs

use super::{
  _h3_leading_non_zero_digit, get_base_cell, get_high_bit, get_index_digit, get_mode, get_reserved_bits,
  get_resolution,
};
use crate::base_cells::_is_base_cell_pentagon;
use crate::constants::*;
use crate::types::{Direction, H3Index};

/// Check that no digit from 1 to `res` is `Direction::InvalidDigit` (7).
#[inline]
fn _has_any_invalid_digit_up_to_res(h: H3Index, res: i32) -> bool {
  (1..=res).any(|r| get_index_digit(h, r) == Direction::InvalidDigit)
}

/// Check that all unused digits after `res` are set to `Direction::InvalidDigit` (7).
#[inline]
fn _has_all_invalid_digits_after_res(h: H3Index, res: i32) -> bool {
  if res >= MAX_H3_RES {
    return true;
  }
  let later_bits = (MAX_H3_RES - res) * i32::from(H3_PER_DIGIT_OFFSET);
  let later_bits_mask: u64 = (1u64 << later_bits) - 1;
  (h.0 & later_bits_mask) == later_bits_mask
}

/// A pentagon cell whose first non-zero digit is `Direction::KAxes` names a
/// deleted subsequence.
#[inline]
fn _has_deleted_subsequence(h: H3Index, base_cell: i32) -> bool {
  _is_base_cell_pentagon(base_cell) && _h3_leading_non_zero_digit(h) == Direction::PENTAGON_SKIPPED
}

/// Determines if an H3 cell is a pentagon.
///
/// # Returns
/// `true` if the H3 index is a pentagon, `false` otherwise.
/// Returns `false` for invalid H3 indexes.
#[must_use]
pub fn is_pentagon(h: H3Index) -> bool {
  if get_mode(h) != H3_CELL_MODE || !is_valid_cell(h) {
    return false;
  }
  // the base cell is a pentagon and every digit is the center digit
  _is_base_cell_pentagon(get_base_cell(h)) && _h3_leading_non_zero_digit(h) == Direction::Center
}

/// Returns the base cell number (0-121) for an H3 cell index.
///
/// No validation is performed on `h`.
#[must_use]
pub fn get_base_cell_number(h: H3Index) -> i32 {
  get_base_cell(h)
}

/// Validates an H3 cell index.
///
/// # Returns
/// `true` if the H3 index is a valid cell index, `false` otherwise.
#[must_use]
pub fn is_valid_cell(h: H3Index) -> bool {
  if get_high_bit(h) != 0 || get_mode(h) != H3_CELL_MODE || get_reserved_bits(h) != 0 {
    return false;
  }

  let res = get_resolution(h);
  if !(0..=MAX_H3_RES).contains(&res) {
    return false;
  }

  let base_cell = get_base_cell(h);
  if !(0..NUM_BASE_CELLS).contains(&base_cell) {
    return false;
  }

  !_has_any_invalid_digit_up_to_res(h, res)
    && _has_all_invalid_digits_after_res(h, res)
    && !_has_deleted_subsequence(h, base_cell)
}
