use crate::UInt;

impl UInt {

  /// Extract the bit at the given index, counting from the most
  /// significant end.
  pub fn index_msb(&self, i: usize) -> bool {
    assert!(i < self.width());
    self.bits[i]
  }

  /// Extract the bit at the given index, counting from the least
  /// significant end.
  pub fn index_lsb(&self, i: usize) -> bool {
    assert!(i < self.width());
    self.bits[self.width() - i - 1]
  }

  pub fn set_bit_msb(&mut self, i: usize, value: bool) {
    assert!(i < self.width());
    self.bits[i] = value
  }

  pub fn set_bit_lsb(&mut self, i: usize, value: bool) {
    assert!(i < self.width());
    let w = self.width();
    self.bits[w - i - 1] = value
  }

  pub fn msb(&self) -> bool { self.bits[0] }

  pub fn lsb(&self) -> bool { self.bits[self.width() - 1] }

  pub fn leading_zeros(&self) -> usize {
    self.bits.iter().take_while(|b| !**b).count()
  }

  /// Number of bits left once leading zeros are dropped.
  pub fn significant_bits(&self) -> usize {
    self.width() - self.leading_zeros()
  }

}

#[cfg(test)]
mod test {
  use crate::UInt;
  use crate::proptest::*;

  #[test]
  fn index_lsb() {
    do_test(word_and::<usize>, |(x, i0): (UInt, usize)| {
      let i = i0 % x.width();
      let (xr, a) = x.sem();
      Some(xr.index_lsb(i) == a.bit(i as u64))
    })
  }

  #[test]
  fn index_msb() {
    do_test(word_and::<usize>, |(x, i0): (UInt, usize)| {
      let i = i0 % x.width();
      let j = (x.width() - 1 - i) as u64;
      let (xr, a) = x.sem();
      Some(xr.index_msb(i) == a.bit(j))
    })
  }

  #[test]
  fn set_bits() {
    let mut x = UInt::zero(4);
    x.set_bit_lsb(0, true);
    x.set_bit_msb(1, true);
    assert_eq!(x.to_string(), "0b0101");
    assert!(x.lsb());
    assert!(!x.msb());
  }

  #[test]
  fn test_leading_zeros() {
    do_test(unary, |x: UInt| {
      let n = x.leading_zeros();
      assert!(n <= x.width());
      for i in 0 .. n { assert!(!x.index_msb(i)) }
      if n < x.width() { assert!(x.index_msb(n)) }
      Some(x.significant_bits() as u64 == x.sem().1.bits())
    })
  }

}
