use crate::UInt;

// Bitwise operations line the operands up at their least significant bits
// and combine the overlapping positions. The left operand keeps its width.

impl UInt {

  /// AND in place. Bits of `self` above the width of `rhs` are cleared.
  pub fn and_assign(&mut self, rhs: &UInt) {
    self.zip_assign(rhs, |x, y| x & y);
    let w = self.width();
    if w > rhs.width() {
      for b in &mut self.bits[0 .. w - rhs.width()] { *b = false }
    }
  }

  /// OR in place. Bits of `self` above the width of `rhs` are kept.
  pub fn or_assign(&mut self, rhs: &UInt) {
    self.zip_assign(rhs, |x, y| x | y)
  }

  /// XOR in place. Bits of `self` above the width of `rhs` are kept.
  pub fn xor_assign(&mut self, rhs: &UInt) {
    self.zip_assign(rhs, |x, y| x ^ y)
  }

  pub fn not_assign(&mut self) {
    for b in self.bits.iter_mut() { *b = !*b }
  }

  fn zip_assign(&mut self, rhs: &UInt, op: impl Fn(bool, bool) -> bool) {
    for (x, y) in self.bits.iter_mut().rev().zip(rhs.iter_bits_lsb()) {
      *x = op(*x, y)
    }
  }

}

macro_rules! do_logic {
  ($assign_trait:ident, $assign_method:ident,
   $trait:ident, $method:ident, $inherent:ident) => {

    impl std::ops::$assign_trait<&UInt> for UInt {
      fn $assign_method(&mut self, rhs: &UInt) { self.$inherent(rhs) }
    }

    impl std::ops::$trait<&UInt> for &UInt {
      type Output = UInt;
      fn $method(self, rhs: &UInt) -> Self::Output {
        let mut result = self.clone();
        result.$inherent(rhs);
        result
      }
    }

    impl std::ops::$trait<&UInt> for UInt {
      type Output = UInt;
      fn $method(mut self, rhs: &UInt) -> Self::Output {
        self.$inherent(rhs);
        self
      }
    }
  };
}

do_logic!(BitAndAssign, bitand_assign, BitAnd, bitand, and_assign);
do_logic!(BitOrAssign,  bitor_assign,  BitOr,  bitor,  or_assign);
do_logic!(BitXorAssign, bitxor_assign, BitXor, bitxor, xor_assign);

impl std::ops::Not for &UInt {
  type Output = UInt;
  fn not(self) -> Self::Output {
    let mut result = self.clone();
    result.not_assign();
    result
  }
}
