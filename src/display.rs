use crate::UInt;
use std::fmt;

fn digits(x: &UInt) -> String {
  x.iter_bits_msb().map(|b| if b { '1' } else { '0' }).collect()
}

/// `0b` followed by every bit, most significant first. Nothing is stripped.
impl fmt::Display for UInt {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "0b{}", digits(self))
  }
}

impl fmt::Binary for UInt {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0b", &digits(self))
  }
}

impl fmt::Debug for UInt {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "UInt({})", self)
  }
}
