// src/coords/face_ijk.rs

use crate::constants::{MAX_H3_RES, NUM_ICOSA_FACES};
use crate::coords::ijk::{_ijk_add, _ijk_normalize, _ijk_rotate60_ccw, _ijk_rotate60_cw, _ijk_scale, _ijk_sub, _set_ijk};
use crate::types::{CoordIJK, FaceIJK};

/// IJ quadrant faceNeighbors table direction
pub(crate) const IJ_QUADRANT: usize = 1;
/// KI quadrant faceNeighbors table direction
pub(crate) const KI_QUADRANT: usize = 2;
/// JK quadrant faceNeighbors table direction
pub(crate) const JK_QUADRANT: usize = 3;

/// Overage distance table, indexed by Class II resolution.
/// Class III entries are never read; overage is always checked on the
/// next finer Class II grid, so index 16 covers Class III resolution 15.
#[rustfmt::skip]
static MAX_DIM_BY_CII_RES: [i32; (MAX_H3_RES + 2) as usize] = [
    2,          // res 0
    -1,         // res 1
    14,         // res 2
    -1,         // res 3
    98,         // res 4
    -1,         // res 5
    686,        // res 6
    -1,         // res 7
    4802,       // res 8
    -1,         // res 9
    33614,      // res 10
    -1,         // res 11
    235_298,    // res 12
    -1,         // res 13
    1_647_086,  // res 14
    -1,         // res 15
    11_529_602, // res 16
];

/// Unit scale distance table, indexed by Class II resolution.
#[rustfmt::skip]
static UNIT_SCALE_BY_CII_RES: [i32; (MAX_H3_RES + 2) as usize] = [
    1,          // res 0
    -1,         // res 1
    7,          // res 2
    -1,         // res 3
    49,         // res 4
    -1,         // res 5
    343,        // res 6
    -1,         // res 7
    2401,       // res 8
    -1,         // res 9
    16807,      // res 10
    -1,         // res 11
    117_649,    // res 12
    -1,         // res 13
    823_543,    // res 14
    -1,         // res 15
    5_764_801,  // res 16
];

/// Information to transform into an adjacent face IJK system
#[derive(Debug, Clone, Copy)]
pub(crate) struct FaceOrientIJK {
  /// face number
  pub(crate) face: i32,
  /// res 0 translation relative to primary face
  pub(crate) translate: CoordIJK,
  /// number of 60 degree ccw rotations relative to primary face
  pub(crate) ccw_rot60: i32,
}

impl FaceOrientIJK {
  const fn new(face: i32, i: i32, j: i32, k: i32, ccw_rot60: i32) -> Self {
    Self {
      face,
      translate: CoordIJK { i, j, k },
      ccw_rot60,
    }
  }
}

/// Definition of which faces neighbor each other.
#[rustfmt::skip]
pub(crate) static FACE_NEIGHBORS: [[FaceOrientIJK; 4]; NUM_ICOSA_FACES as usize] = [
    // face 0
    [
        FaceOrientIJK::new( 0, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new( 4, 2, 0, 2, 1),  // ij quadrant
        FaceOrientIJK::new( 1, 2, 2, 0, 5),  // ki quadrant
        FaceOrientIJK::new( 5, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 1
    [
        FaceOrientIJK::new( 1, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new( 0, 2, 0, 2, 1),  // ij quadrant
        FaceOrientIJK::new( 2, 2, 2, 0, 5),  // ki quadrant
        FaceOrientIJK::new( 6, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 2
    [
        FaceOrientIJK::new( 2, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new( 1, 2, 0, 2, 1),  // ij quadrant
        FaceOrientIJK::new( 3, 2, 2, 0, 5),  // ki quadrant
        FaceOrientIJK::new( 7, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 3
    [
        FaceOrientIJK::new( 3, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new( 2, 2, 0, 2, 1),  // ij quadrant
        FaceOrientIJK::new( 4, 2, 2, 0, 5),  // ki quadrant
        FaceOrientIJK::new( 8, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 4
    [
        FaceOrientIJK::new( 4, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new( 3, 2, 0, 2, 1),  // ij quadrant
        FaceOrientIJK::new( 0, 2, 2, 0, 5),  // ki quadrant
        FaceOrientIJK::new( 9, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 5
    [
        FaceOrientIJK::new( 5, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new(10, 2, 2, 0, 3),  // ij quadrant
        FaceOrientIJK::new(14, 2, 0, 2, 3),  // ki quadrant
        FaceOrientIJK::new( 0, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 6
    [
        FaceOrientIJK::new( 6, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new(11, 2, 2, 0, 3),  // ij quadrant
        FaceOrientIJK::new(10, 2, 0, 2, 3),  // ki quadrant
        FaceOrientIJK::new( 1, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 7
    [
        FaceOrientIJK::new( 7, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new(12, 2, 2, 0, 3),  // ij quadrant
        FaceOrientIJK::new(11, 2, 0, 2, 3),  // ki quadrant
        FaceOrientIJK::new( 2, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 8
    [
        FaceOrientIJK::new( 8, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new(13, 2, 2, 0, 3),  // ij quadrant
        FaceOrientIJK::new(12, 2, 0, 2, 3),  // ki quadrant
        FaceOrientIJK::new( 3, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 9
    [
        FaceOrientIJK::new( 9, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new(14, 2, 2, 0, 3),  // ij quadrant
        FaceOrientIJK::new(13, 2, 0, 2, 3),  // ki quadrant
        FaceOrientIJK::new( 4, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 10
    [
        FaceOrientIJK::new(10, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new( 5, 2, 2, 0, 3),  // ij quadrant
        FaceOrientIJK::new( 6, 2, 0, 2, 3),  // ki quadrant
        FaceOrientIJK::new(15, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 11
    [
        FaceOrientIJK::new(11, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new( 6, 2, 2, 0, 3),  // ij quadrant
        FaceOrientIJK::new( 7, 2, 0, 2, 3),  // ki quadrant
        FaceOrientIJK::new(16, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 12
    [
        FaceOrientIJK::new(12, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new( 7, 2, 2, 0, 3),  // ij quadrant
        FaceOrientIJK::new( 8, 2, 0, 2, 3),  // ki quadrant
        FaceOrientIJK::new(17, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 13
    [
        FaceOrientIJK::new(13, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new( 8, 2, 2, 0, 3),  // ij quadrant
        FaceOrientIJK::new( 9, 2, 0, 2, 3),  // ki quadrant
        FaceOrientIJK::new(18, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 14
    [
        FaceOrientIJK::new(14, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new( 9, 2, 2, 0, 3),  // ij quadrant
        FaceOrientIJK::new( 5, 2, 0, 2, 3),  // ki quadrant
        FaceOrientIJK::new(19, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 15
    [
        FaceOrientIJK::new(15, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new(16, 2, 0, 2, 1),  // ij quadrant
        FaceOrientIJK::new(19, 2, 2, 0, 5),  // ki quadrant
        FaceOrientIJK::new(10, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 16
    [
        FaceOrientIJK::new(16, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new(17, 2, 0, 2, 1),  // ij quadrant
        FaceOrientIJK::new(15, 2, 2, 0, 5),  // ki quadrant
        FaceOrientIJK::new(11, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 17
    [
        FaceOrientIJK::new(17, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new(18, 2, 0, 2, 1),  // ij quadrant
        FaceOrientIJK::new(16, 2, 2, 0, 5),  // ki quadrant
        FaceOrientIJK::new(12, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 18
    [
        FaceOrientIJK::new(18, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new(19, 2, 0, 2, 1),  // ij quadrant
        FaceOrientIJK::new(17, 2, 2, 0, 5),  // ki quadrant
        FaceOrientIJK::new(13, 0, 2, 2, 3),  // jk quadrant
    ],
    // face 19
    [
        FaceOrientIJK::new(19, 0, 0, 0, 0),  // central face
        FaceOrientIJK::new(15, 2, 0, 2, 1),  // ij quadrant
        FaceOrientIJK::new(18, 2, 2, 0, 5),  // ki quadrant
        FaceOrientIJK::new(14, 0, 2, 2, 3),  // jk quadrant
    ],
];

/// Digit representing overage type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overage {
  /// on original face
  NoOverage,
  /// overage on new face interior
  NewFace,
}

/// Adjusts a `FaceIJK` address in place so that the resulting cell address is
/// relative to the correct icosahedral face.
///
/// # Arguments
/// * `fijk` - The `FaceIJK` address of the cell, modified in place.
/// * `res` - The Class II resolution of the cell.
/// * `pent_leading_4` - Whether or not the cell is a pentagon with a leading
///   digit of `Direction::IAxes`.
///
/// # Returns
/// `Overage::NewFace` if the address moved to a neighboring face.
pub(crate) fn _adjust_overage_class_ii(fijk: &mut FaceIJK, res: i32, pent_leading_4: bool) -> Overage {
  let max_dim = MAX_DIM_BY_CII_RES[res as usize];
  let ijk = &mut fijk.coord;

  if ijk.i + ijk.j + ijk.k <= max_dim {
    return Overage::NoOverage;
  }

  let fijk_orient: &FaceOrientIJK = if ijk.k > 0 {
    if ijk.j > 0 {
      // jk "quadrant"
      &FACE_NEIGHBORS[fijk.face as usize][JK_QUADRANT]
    } else {
      // ik "quadrant"
      if pent_leading_4 {
        // translate origin to center of pentagon
        let mut origin = CoordIJK::default();
        _set_ijk(&mut origin, max_dim, 0, 0);
        let mut tmp = CoordIJK::default();
        _ijk_sub(ijk, &origin, &mut tmp);
        // rotate to adjust for the missing sequence
        _ijk_rotate60_cw(&mut tmp);
        // translate the origin back to the center of the triangle
        _ijk_add(&tmp, &origin, ijk);
      }
      &FACE_NEIGHBORS[fijk.face as usize][KI_QUADRANT]
    }
  } else {
    // ij "quadrant"
    &FACE_NEIGHBORS[fijk.face as usize][IJ_QUADRANT]
  };

  fijk.face = fijk_orient.face;

  // rotate and translate for adjacent face
  for _ in 0..fijk_orient.ccw_rot60 {
    _ijk_rotate60_ccw(ijk);
  }

  let mut trans_vec = fijk_orient.translate;
  _ijk_scale(&mut trans_vec, UNIT_SCALE_BY_CII_RES[res as usize]);
  let before = *ijk;
  _ijk_add(&before, &trans_vec, ijk);
  _ijk_normalize(ijk);

  Overage::NewFace
}
