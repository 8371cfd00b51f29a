// Words of dynamic width, one bit per element.

use crate::Error;

/// An arbitrary sized unsigned word.
///
/// Bits are stored most significant first. A word always has at least one
/// bit, and leading zeros are kept: the width is part of the value and the
/// operations grow or shrink it on purpose.
///
/// Equality is structural: words of different widths are never equal, even
/// when they denote the same number.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UInt {
  pub(crate) bits: Vec<bool>
}

impl UInt {

  /// Create a 0 initialized word of the given width.
  pub fn zero(width: usize) -> UInt {
    assert!(width > 0, "a word needs at least one bit");
    UInt { bits: vec![false; width] }
  }

  /// Build a word from its bits, most significant first.
  pub fn from_bits(bits: impl Into<Vec<bool>>) -> Result<UInt, Error> {
    let bits = bits.into();
    if bits.is_empty() { return Err(Error::EmptyBits) }
    Ok(UInt { bits })
  }

  /// The size of the word in bits.
  pub fn width(&self) -> usize { self.bits.len() }

  /// Gain access to the underlying bits, most significant first.
  pub fn as_slice(&self) -> &[bool] { &self.bits }

  /// Mutable access to the bits. The width cannot be changed through this.
  pub fn as_slice_mut(&mut self) -> &mut [bool] { &mut self.bits }

  /// Take the underlying bits, most significant first.
  pub fn into_bits(self) -> Vec<bool> { self.bits }

  /// Are all bits 0.
  pub fn is_zero(&self) -> bool { self.bits.iter().all(|b| !b) }

}
