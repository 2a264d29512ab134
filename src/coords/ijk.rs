// src/coords/ijk.rs

use crate::types::{CoordIJK, Direction};

/// IJK unit vectors corresponding to the 7 H3 digits (0-6).
#[rustfmt::skip]
pub(crate) static UNIT_VECS: [CoordIJK; 7] = [
    CoordIJK { i: 0, j: 0, k: 0 },  // CENTER_DIGIT
    CoordIJK { i: 0, j: 0, k: 1 },  // K_AXES_DIGIT
    CoordIJK { i: 0, j: 1, k: 0 },  // J_AXES_DIGIT
    CoordIJK { i: 0, j: 1, k: 1 },  // JK_AXES_DIGIT (J_AXES_DIGIT | K_AXES_DIGIT)
    CoordIJK { i: 1, j: 0, k: 0 },  // I_AXES_DIGIT
    CoordIJK { i: 1, j: 0, k: 1 },  // IK_AXES_DIGIT (I_AXES_DIGIT | K_AXES_DIGIT)
    CoordIJK { i: 1, j: 1, k: 0 },  // IJ_AXES_DIGIT (I_AXES_DIGIT | J_AXES_DIGIT)
];

/// Sets an IJK coordinate to the specified component values.
#[inline]
pub(crate) fn _set_ijk(ijk: &mut CoordIJK, i: i32, j: i32, k: i32) {
  *ijk = CoordIJK { i, j, k };
}

/// Add two IJK coordinates.
#[inline]
pub(crate) fn _ijk_add(h1: &CoordIJK, h2: &CoordIJK, sum: &mut CoordIJK) {
  sum.i = h1.i.saturating_add(h2.i);
  sum.j = h1.j.saturating_add(h2.j);
  sum.k = h1.k.saturating_add(h2.k);
}

/// Subtract two IJK coordinates. (h1 - h2)
#[inline]
pub(crate) fn _ijk_sub(h1: &CoordIJK, h2: &CoordIJK, diff: &mut CoordIJK) {
  diff.i = h1.i.saturating_sub(h2.i);
  diff.j = h1.j.saturating_sub(h2.j);
  diff.k = h1.k.saturating_sub(h2.k);
}

/// Uniformly scale IJK coordinates by a scalar. Works in place.
#[inline]
pub(crate) fn _ijk_scale(c: &mut CoordIJK, factor: i32) {
  c.i = c.i.saturating_mul(factor);
  c.j = c.j.saturating_mul(factor);
  c.k = c.k.saturating_mul(factor);
}

/// Normalizes IJK coordinates by setting the components to the smallest possible
/// values. Works in place.
#[inline]
pub(crate) fn _ijk_normalize(c: &mut CoordIJK) {
  // remove any negative values
  if c.i < 0 {
    c.j = c.j.saturating_sub(c.i);
    c.k = c.k.saturating_sub(c.i);
    c.i = 0;
  }
  if c.j < 0 {
    c.i = c.i.saturating_sub(c.j);
    c.k = c.k.saturating_sub(c.j);
    c.j = 0;
  }
  if c.k < 0 {
    c.i = c.i.saturating_sub(c.k);
    c.j = c.j.saturating_sub(c.k);
    c.k = 0;
  }

  // remove the min value if needed
  let min_val = c.i.min(c.j).min(c.k);
  if min_val > 0 {
    c.i -= min_val;
    c.j -= min_val;
    c.k -= min_val;
  }
}

/// Replaces `ijk` with `i * i_vec + j * j_vec + k * k_vec`, normalized.
///
/// The aperture 7 refinements and the 60 degree rotations are all this
/// change of basis with different unit vector images.
#[inline]
fn _ijk_change_basis(ijk: &mut CoordIJK, i_vec: CoordIJK, j_vec: CoordIJK, k_vec: CoordIJK) {
  let mut scaled_i = i_vec;
  _ijk_scale(&mut scaled_i, ijk.i);
  let mut scaled_j = j_vec;
  _ijk_scale(&mut scaled_j, ijk.j);
  let mut scaled_k = k_vec;
  _ijk_scale(&mut scaled_k, ijk.k);

  let mut partial = CoordIJK::default();
  _ijk_add(&scaled_i, &scaled_j, &mut partial);
  _ijk_add(&partial, &scaled_k, ijk);
  _ijk_normalize(ijk);
}

/// Find the normalized IJK coordinates of the hex in the specified digit
/// direction from the specified IJK coordinates. Works in place.
#[inline]
pub(crate) fn _neighbor(ijk: &mut CoordIJK, digit: Direction) {
  if digit != Direction::Center && digit != Direction::InvalidDigit {
    let origin = *ijk;
    _ijk_add(&origin, &UNIT_VECS[digit as usize], ijk);
    _ijk_normalize(ijk);
  }
}

/// Find the normalized IJK coordinates of the hex centered on the indicated
/// hex at the next finer aperture 7 counter-clockwise resolution. Works in place.
#[inline]
pub(crate) fn _down_ap7(ijk: &mut CoordIJK) {
  // res r unit vectors in res r+1
  _ijk_change_basis(
    ijk,
    CoordIJK { i: 3, j: 0, k: 1 },
    CoordIJK { i: 1, j: 3, k: 0 },
    CoordIJK { i: 0, j: 1, k: 3 },
  );
}

/// Find the normalized IJK coordinates of the hex centered on the indicated
/// hex at the next finer aperture 7 clockwise resolution. Works in place.
#[inline]
pub(crate) fn _down_ap7r(ijk: &mut CoordIJK) {
  // res r unit vectors in res r+1
  _ijk_change_basis(
    ijk,
    CoordIJK { i: 3, j: 1, k: 0 },
    CoordIJK { i: 0, j: 3, k: 1 },
    CoordIJK { i: 1, j: 0, k: 3 },
  );
}

/// Find the normalized IJK coordinates of the indexing parent of a cell in a
/// clockwise aperture 7 grid. Works in place.
#[inline]
pub(crate) fn _up_ap7r(ijk: &mut CoordIJK) {
  let i = ijk.i - ijk.k;
  let j = ijk.j - ijk.k;

  // f64::round rounds half away from zero, like C's lround
  ijk.i = (f64::from(2 * i + j) / 7.0).round() as i32;
  ijk.j = (f64::from(3 * j - i) / 7.0).round() as i32;
  ijk.k = 0;
  _ijk_normalize(ijk);
}

/// Rotates IJK coordinates 60 degrees counter-clockwise. Works in place.
#[inline]
pub(crate) fn _ijk_rotate60_ccw(ijk: &mut CoordIJK) {
  // unit vector rotations
  _ijk_change_basis(
    ijk,
    CoordIJK { i: 1, j: 1, k: 0 },
    CoordIJK { i: 0, j: 1, k: 1 },
    CoordIJK { i: 1, j: 0, k: 1 },
  );
}

/// Rotates IJK coordinates 60 degrees clockwise. Works in place.
#[inline]
pub(crate) fn _ijk_rotate60_cw(ijk: &mut CoordIJK) {
  // unit vector rotations
  _ijk_change_basis(
    ijk,
    CoordIJK { i: 1, j: 0, k: 1 },
    CoordIJK { i: 1, j: 1, k: 0 },
    CoordIJK { i: 0, j: 1, k: 1 },
  );
}

/// Rotates an H3 digit 60 degrees clockwise.
#[inline]
#[must_use]
pub(crate) fn _rotate60_cw(digit: Direction) -> Direction {
  use Direction::*;
  match digit {
    KAxes => JkAxes,
    JkAxes => JAxes,
    JAxes => IjAxes,
    IjAxes => IAxes,
    IAxes => IkAxes,
    IkAxes => KAxes,
    Center | InvalidDigit => digit,
  }
}
