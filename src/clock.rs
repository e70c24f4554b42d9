/// Millisecond instant on a free-running 32-bit counter.
///
/// The counter wraps at `u32::MAX`. The only meaningful operation between two
/// instants is wrapping elapsed time, so ordering comparisons are not
/// provided.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Millis(pub u32);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// Elapsed milliseconds since `earlier`, modulo the counter width.
    /// Correct across wraparound as long as the real gap stays below
    /// `u32::MAX` milliseconds (about 49.7 days).
    pub const fn since(self, earlier: Millis) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    pub const fn plus(self, ms: u32) -> Millis {
        Millis(self.0.wrapping_add(ms))
    }
}
