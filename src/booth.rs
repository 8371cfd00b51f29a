//! Multiplication with Booth's algorithm.
//!
//! For operands of width `W` we work with three registers of `2W + 1` bits:
//!   * `A` holds the multiplicand `M` in its top `W` bits,
//!   * `S` holds `-M` in its top `W` bits,
//!   * `P` starts with the multiplier `R` in its middle `W` bits.
//!
//! Each of the `W` steps looks at the low two bits of `P`, adds `S` or `A`
//! into `P` (wrapping at `2W + 1` bits) and then shifts `P` right keeping its
//! top bit. At the end `P` holds the signed `2W` bit product followed by one
//! extra bit.
//!
//! The registers are signed, so both operands must have a 0 top bit. Words
//! built from native integers always do; otherwise `W` grows by one.

use tracing::{debug, trace};
use crate::UInt;
use crate::arith::ripple_carry_assign;

/// Place `x` in the top bits of a zero register of the given width.
fn register_with_top(width: usize, x: &UInt) -> UInt {
  let mut reg = UInt::zero(width);
  reg.bits[.. x.width()].copy_from_slice(x.as_slice());
  reg
}

pub fn multiply(lhs: &UInt, rhs: &UInt) -> UInt {
  let (m, r) = if lhs.width() >= rhs.width() { (lhs, rhs) } else { (rhs, lhs) };

  let mut w = m.width();
  if m.msb() || (r.width() == w && r.msb()) { w += 1 }

  let mut m = m.clone();
  m.pad_to_width(w);
  let mut r = r.clone();
  r.pad_to_width(w);

  // Negating 0 carries out of the top bit, which we drop.
  let mut neg_m = m.clone();
  neg_m.negate();
  neg_m.trim_to_width(w);

  let len   = 2 * w + 1;
  let a     = register_with_top(len, &m);
  let s     = register_with_top(len, &neg_m);
  let mut p = UInt::zero(len);
  p.bits[w .. 2 * w].copy_from_slice(r.as_slice());

  debug!(width = w, "booth multiply {} * {}", m, r);

  for step in 0 .. w {
    let window = p.last_two_bits();
    match window {
      "10" => { ripple_carry_assign(&mut p.bits, s.as_slice()); }
      "01" => { ripple_carry_assign(&mut p.bits, a.as_slice()); }
      _    => {}
    }
    p.arithmetic_shift_right();
    trace!(step, window, "P = {}", p);
  }

  if len <= 3 { return UInt::zero(1) }
  UInt { bits: p.bits[2 .. len - 1].to_vec() }
}
