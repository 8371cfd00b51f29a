use std::iter::{Copied, Rev};
use std::slice::Iter;
use crate::UInt;

/// Traverse a word as bits, in either direction.
pub type TraverseBits<'a> = Copied<Iter<'a, bool>>;

impl UInt {

  /// Iterate over the bits, starting at the most significant end.
  pub fn iter_bits_msb(&self) -> TraverseBits<'_> {
    self.bits.iter().copied()
  }

  /// Iterate over the bits, starting at the least significant end.
  pub fn iter_bits_lsb(&self) -> Rev<TraverseBits<'_>> {
    self.bits.iter().copied().rev()
  }

}

impl<'a> IntoIterator for &'a UInt {
  type Item     = bool;
  type IntoIter = TraverseBits<'a>;
  fn into_iter(self) -> Self::IntoIter { self.iter_bits_msb() }
}
