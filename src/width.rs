use crate::UInt;

impl UInt {

  /// Add 0s on the most significant side until the word has `target` bits.
  /// Wider words are left alone.
  pub fn pad_to_width(&mut self, target: usize) {
    self.extend_with(target, false)
  }

  /// Add copies of the most significant bit until the word has `target` bits.
  pub fn sign_extend_to(&mut self, target: usize) {
    let fill = self.msb();
    self.extend_with(target, fill)
  }

  fn extend_with(&mut self, target: usize, fill: bool) {
    let w = self.width();
    if w >= target { return }
    let mut bits = vec![fill; target - w];
    bits.append(&mut self.bits);
    self.bits = bits;
  }

  /// Keep only the `target` least significant bits.
  /// Narrower words are left alone.
  pub fn trim_to_width(&mut self, target: usize) {
    assert!(target > 0, "a word needs at least one bit");
    let w = self.width();
    if w <= target { return }
    self.bits.drain(0 .. w - target);
  }

  /// Shift towards the least significant end by one bit.
  /// The most significant bit stays where it is, so it ends up in the top
  /// two positions, and the least significant bit is lost.
  pub fn arithmetic_shift_right(&mut self) {
    let w = self.width();
    self.bits.copy_within(0 .. w - 1, 1);
  }

  /// The two least significant bits, read least significant first and then
  /// remapped so that `01` and `10` trade places. A single bit word gives
  /// just that bit.
  pub fn last_two_bits(&self) -> &'static str {
    if self.width() < 2 {
      return if self.lsb() { "1" } else { "0" }
    }
    let raw = match (self.index_lsb(0), self.index_lsb(1)) {
      (false, false) => "00",
      (false, true)  => "01",
      (true,  false) => "10",
      (true,  true)  => "11",
    };
    match raw {
      "01"  => "10",
      "10"  => "01",
      other => other,
    }
  }

}
