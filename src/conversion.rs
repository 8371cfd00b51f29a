use crate::{UInt, Error};

impl UInt {

  /// The value as a native integer.
  /// Fails if a set bit lies beyond the 64 bits of a `u64`;
  /// leading zeros do not count.
  pub fn to_u64(&self) -> Result<u64, Error> {
    self.to_native(u64::BITS as usize)
  }

  /// Evaluate the bits as a base 2 numeral, most significant first,
  /// provided the value fits in `max` bits.
  fn to_native(&self, max: usize) -> Result<u64, Error> {
    let bits = self.significant_bits();
    if bits > max { return Err(Error::ValueTooLarge { bits, max }) }

    let mut result: u64 = 0;
    for b in self.iter_bits_msb().skip(self.width() - bits) {
      result = (result << 1) | b as u64;
    }
    Ok(result)
  }

}

macro_rules! to_unsigned {
  ($($t:ty),*) => { $(
    impl TryFrom<&UInt> for $t {
      type Error = Error;
      fn try_from(x: &UInt) -> Result<Self, Self::Error> {
        x.to_native(<$t>::BITS as usize).map(|v| v as $t)
      }
    }
  )* };
}

to_unsigned!(u8, u16, u32, u64, usize);


impl From<&UInt> for num::BigUint {
  fn from(x: &UInt) -> Self {
    let mut result = num::BigUint::default();
    for (i, b) in x.iter_bits_lsb().enumerate() {
      if b { result.set_bit(i as u64, true) }
    }
    result
  }
}

/// Same width rule as the native integers: one bit more than needed.
impl From<&num::BigUint> for UInt {
  fn from(n: &num::BigUint) -> Self {
    let have = n.bits();
    if have == 0 { return UInt::zero(1) }

    let mut result = UInt::zero(have as usize + 1);
    for i in 0 .. have {
      result.set_bit_lsb(i as usize, n.bit(i))
    }
    result
  }
}
