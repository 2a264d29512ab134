//! Core H3 data structures used by the vertex orientation queries.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Represents an H3 cell index.
/// This is a 64-bit unsigned integer.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct H3Index(pub u64);

/// Invalid H3 index, often used to signify an error or missing data.
pub const H3_NULL: H3Index = H3Index(0);

/// Represents an H3 error code.
///
/// Discriminants match the numeric codes of the H3 C library. Success is
/// `Ok`, so code 0 has no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[allow(clippy::enum_variant_names)] // To match C naming
pub enum H3Error {
  /// The operation failed but a more specific error is not available.
  #[error("the operation failed")]
  Failed = 1,
  /// Argument was outside of acceptable range.
  #[error("argument was outside of acceptable range")]
  Domain = 2,
  /// `H3Index` cell argument was not valid.
  #[error("cell argument was not valid")]
  CellInvalid = 5,
}

/// IJK hexagon coordinates. Each axis is spaced 120 degrees apart.
/// The K component is redundant (`k = -i - j` after normalization) but kept for
/// the aperture arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJK {
  /// I component.
  pub i: i32,
  /// J component.
  pub j: i32,
  /// K component.
  pub k: i32,
}

/// Face number and IJK coordinates on that face-centered coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceIJK {
  /// Icosahedron face number (0-19).
  pub face: i32,
  /// IJK coordinates on that face.
  pub coord: CoordIJK,
}

/// H3 digit representing IJK+ axes direction (0-6), or invalid (7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  /// H3 digit in center.
  #[default]
  Center = 0,
  /// H3 digit in k-axes direction.
  KAxes = 1,
  /// H3 digit in j-axes direction.
  JAxes = 2,
  /// H3 digit in j == k direction.
  JkAxes = 3, // J_AXES_DIGIT | K_AXES_DIGIT
  /// H3 digit in i-axes direction.
  IAxes = 4,
  /// H3 digit in i == k direction.
  IkAxes = 5, // I_AXES_DIGIT | K_AXES_DIGIT
  /// H3 digit in i == j direction.
  IjAxes = 6, // I_AXES_DIGIT | J_AXES_DIGIT
  /// H3 digit in the invalid direction.
  InvalidDigit = 7,
}

impl Direction {
  /// The six neighbor directions, in digit order.
  pub const NEIGHBORS: [Direction; 6] = [
    Direction::KAxes,
    Direction::JAxes,
    Direction::JkAxes,
    Direction::IAxes,
    Direction::IkAxes,
    Direction::IjAxes,
  ];

  /// The axis deleted at every pentagon.
  pub const PENTAGON_SKIPPED: Direction = Direction::KAxes;

  /// Returns the digit for the low three bits of `value`.
  #[inline]
  #[must_use]
  pub(crate) const fn from_bits(value: u8) -> Self {
    match value & 0b111 {
      0 => Direction::Center,
      1 => Direction::KAxes,
      2 => Direction::JAxes,
      3 => Direction::JkAxes,
      4 => Direction::IAxes,
      5 => Direction::IkAxes,
      6 => Direction::IjAxes,
      _ => Direction::InvalidDigit,
    }
  }
}

impl TryFrom<u8> for Direction {
  type Error = H3Error;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    if value > Direction::InvalidDigit as u8 {
      // Value out of range for Direction
      return Err(H3Error::Domain);
    }
    // 7 is a valid enum variant, but invalid as an H3 digit; callers reject it.
    Ok(Direction::from_bits(value))
  }
}
