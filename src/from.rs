use crate::{UInt, Error};

impl UInt {

  /// Build the word for a native integer.
  /// 0 is a single 0 bit. Any other value gets `floor(log2(value)) + 2` bits,
  /// one more than it strictly needs, so the most significant bit is always 0.
  pub fn from_u64(value: u64) -> UInt {
    if value == 0 { return UInt::zero(1) }

    let width = (u64::BITS - value.leading_zeros()) as usize + 1;
    let mut bits = vec![false; width];
    let mut v = value;
    for b in bits.iter_mut().rev() {
      *b = v & 1 == 1;
      v >>= 1;
    }
    UInt { bits }
  }

  pub fn from_u8(value: u8) -> UInt { Self::from_u64(value as u64) }

  pub fn from_u16(value: u16) -> UInt { Self::from_u64(value as u64) }

  pub fn from_u32(value: u32) -> UInt { Self::from_u64(value as u64) }

  /// Build the word for a signed native integer, which must not be negative.
  pub fn from_i64(value: i64) -> Result<UInt, Error> {
    if value < 0 { return Err(Error::NegativeValue(value)) }
    Ok(Self::from_u64(value as u64))
  }

}

macro_rules! from_unsigned {
  ($($t:ty),*) => { $(
    impl From<$t> for UInt {
      fn from(value: $t) -> Self { UInt::from_u64(value as u64) }
    }
  )* };
}

macro_rules! from_signed {
  ($($t:ty),*) => { $(
    impl TryFrom<$t> for UInt {
      type Error = Error;
      fn try_from(value: $t) -> Result<Self, Self::Error> {
        UInt::from_i64(value as i64)
      }
    }
  )* };
}

from_unsigned!(u8, u16, u32, u64, usize);
from_signed!(i8, i16, i32, i64, isize);
