use crate::UInt;
use proptest::prelude::*;
use proptest::strategy::*;
use proptest::arbitrary::*;
use proptest::test_runner::*;

impl ValueTree for UInt {
  type Value = UInt;

  fn current(&self) -> UInt { self.clone() }

  fn simplify(&mut self) -> bool { false }
  fn complicate(&mut self) -> bool { false }
}

/// Words of a fixed width with uniformly random bits.
#[derive(Debug)]
pub struct UIntStrategy { pub bits: usize }

impl Strategy for UIntStrategy {
  type Tree  = UInt;
  type Value = UInt;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    let rng = runner.rng();
    let mut bits = Vec::<bool>::with_capacity(self.bits);
    let mut word = 0_u64;
    for i in 0 .. self.bits {
      if i % 64 == 0 { word = rng.next_u64() }
      bits.push(word & 1 == 1);
      word >>= 1;
    }
    UInt::from_bits(bits).map_err(|e| e.to_string().into())
  }
}

impl Arbitrary for UInt {
  type Parameters = usize;
  type Strategy   = UIntStrategy;

  fn arbitrary_with(bits: usize) -> Self::Strategy {
    UIntStrategy { bits: bits.max(1) }
  }
}


/// Check a property for words of every width from 1 to 96 bits.
/// The property answers `None` to reject an input.
pub fn do_test<T: Arbitrary>
    ( s: fn (usize) -> StrategyFor<T>
    , p: fn(T)      -> Option<bool>
    ) {
  for bits in 1 .. 97 {
    let mut cfg: Config = <_>::default();
    cfg.cases = 64;
    cfg.failure_persistence = None;
    let mut runner = TestRunner::new(cfg);
    let strategy = s(bits);
    runner.run(&strategy, |arg| {
      match p(arg) {
        Some(result) =>
          if result { Ok(()) }
          else {
            Err(TestCaseError::Fail("unexpected result".into()))
          },
        None => Err(TestCaseError::Reject("invalid input".into()))
      }
    }).unwrap()
  }
}

impl UInt {
  /// The word along with its value, for comparing against `num`.
  pub fn sem(&self) -> (&UInt, num::BigUint) {
    (self, self.into())
  }
}

pub fn pow2(bits: usize) -> num::BigUint {
  let x: num::BigUint = 2_u64.into();
  x.pow(bits as u32)
}

pub fn binary(bits: usize) -> StrategyFor<(UInt, UInt)> {
  arbitrary_with((bits, bits))
}

/// Two words where the second is roughly a third as wide as the first.
pub fn mixed(bits: usize) -> StrategyFor<(UInt, UInt)> {
  arbitrary_with((bits, 1 + bits / 3))
}

pub fn unary(bits: usize) -> StrategyFor<UInt> {
  arbitrary_with(bits)
}

pub fn word_and<T>(bits: usize) -> StrategyFor<(UInt, T)>
  where T: Arbitrary<Parameters=()> {
  arbitrary_with((bits, ()))
}
