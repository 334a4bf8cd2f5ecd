/// Injectable source of uniform randomness
///
/// Decision logic draws from this instead of a global generator so tests
/// can supply exact sequences.
pub trait RandomSource: Send {
    /// Uniform sample in [0, 1)
    fn next_f64(&mut self) -> f64;

    /// Uniform index in [0, len); `len` must be non-zero
    fn next_index(&mut self, len: usize) -> usize;

    /// Uniform integer in [low, high] (inclusive)
    fn next_in_range(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        let span = i128::from(high) - i128::from(low) + 1;
        let offset = match usize::try_from(span) {
            Ok(len) => self.next_index(len) as i128,
            // Wider than usize: scale a float sample instead
            Err(_) => ((self.next_f64() * span as f64) as i128).min(span - 1),
        };
        (i128::from(low) + offset) as i64
    }
}
