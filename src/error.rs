//! Errors reported while building or converting words.

use thiserror::Error as ThisError;

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum Error {
  /// A word was requested from a negative native integer.
  #[error("Value is negative: {0}")]
  NegativeValue(i64),

  /// A word was requested from an empty sequence of bits.
  #[error("Empty bit sequence")]
  EmptyBits,

  /// The word does not fit in the destination type.
  /// `bits` is the number of significant bits of the word,
  /// `max` is the number of bits available in the destination.
  #[error("Value too large: {bits} significant bits, destination holds {max}")]
  ValueTooLarge { bits: usize, max: usize },
}
