use std::borrow::Cow;
use crate::UInt;

/// Ripple-carry addition of `rhs` into `acc`. Both are most significant bit
/// first and of the same width. Returns the carry out of the top bit.
pub(crate) fn ripple_carry_assign(acc: &mut [bool], rhs: &[bool]) -> bool {
  assert_eq!(acc.len(), rhs.len());
  let mut carry = false;
  for (x, &y) in acc.iter_mut().rev().zip(rhs.iter().rev()) {
    let sum = *x ^ y ^ carry;
    carry   = (*x && y) || (carry && (*x || y));
    *x      = sum;
  }
  carry
}

/// The bits of `x` extended to `width` with `fill`, copying only if needed.
fn widened(x: &UInt, width: usize, fill: bool) -> Cow<'_, [bool]> {
  if x.width() >= width { return Cow::Borrowed(x.as_slice()) }
  let mut bits = vec![fill; width - x.width()];
  bits.extend_from_slice(x.as_slice());
  Cow::Owned(bits)
}

impl UInt {

  /// Unsigned addition. Both operands are zero extended to the wider width;
  /// a carry out of the top bit grows the result by one bit.
  pub fn add_assign(&mut self, rhs: &UInt) {
    let width = self.width().max(rhs.width());
    self.pad_to_width(width);
    if ripple_carry_assign(&mut self.bits, &widened(rhs, width, false)) {
      self.bits.insert(0, true)
    }
  }

  /// Two's complement addition: both operands are sign extended to the
  /// wider width and the carry out of the top bit is dropped.
  pub(crate) fn add_with_negative(&mut self, rhs: &UInt) {
    let width = self.width().max(rhs.width());
    self.sign_extend_to(width);
    ripple_carry_assign(&mut self.bits, &widened(rhs, width, rhs.msb()));
  }

  /// Two's complement negation: flip every bit, then add 1.
  /// Like any addition this grows the word if the top bit carries,
  /// which only happens for 0.
  pub fn negate(&mut self) {
    self.not_assign();
    self.add_assign(&UInt::from_u64(1))
  }

  /// Subtraction modulo `2^w`, where `w` is the wider of the two widths.
  /// The result has width `w`; a borrow wraps around silently.
  pub fn sub_assign(&mut self, rhs: &UInt) {
    let width = self.width().max(rhs.width());

    // One spare 0 bit on top, so neither operand reads as negative.
    let mut negated = rhs.clone();
    negated.pad_to_width(width + 1);
    negated.negate();
    self.pad_to_width(width + 1);

    self.add_with_negative(&negated);
    self.trim_to_width(width);
  }

  /// Multiplication, using Booth's algorithm.
  pub fn mul_assign(&mut self, rhs: &UInt) {
    *self = crate::booth::multiply(self, rhs)
  }

}

macro_rules! do_arith {
  ($assign_trait:ident, $assign_method:ident,
   $trait:ident, $method:ident, $inherent:ident) => {

    impl std::ops::$assign_trait<&UInt> for UInt {
      #[inline(always)]
      fn $assign_method(&mut self, rhs: &UInt) { UInt::$inherent(self, rhs) }
    }

    impl std::ops::$trait<&UInt> for &UInt {
      type Output = UInt;
      fn $method(self, rhs: &UInt) -> Self::Output {
        let mut result = self.clone();
        UInt::$inherent(&mut result, rhs);
        result
      }
    }

    impl std::ops::$trait<&UInt> for UInt {
      type Output = UInt;
      fn $method(mut self, rhs: &UInt) -> Self::Output {
        UInt::$inherent(&mut self, rhs);
        self
      }
    }
  };
}

do_arith!(AddAssign, add_assign, Add, add, add_assign);
do_arith!(SubAssign, sub_assign, Sub, sub, sub_assign);
do_arith!(MulAssign, mul_assign, Mul, mul, mul_assign);

impl std::ops::Neg for &UInt {
  type Output = UInt;

  fn neg(self) -> Self::Output {
    let mut result = self.clone();
    result.negate();
    result
  }
}
