//! Triangle wave.

use super::{cycle_position, period};

/// Triangle wave value at `index`.
///
/// With `v = (position / period) * 4 - 1`, returns `v` on the rising half
/// (-1.0 up to 1.0 at half period) and `3 - v` after it. The second half
/// therefore starts back near 2.0 and falls to 0.0, so this generator is not
/// bounded by [-1, 1].
#[inline]
pub fn triangle(index: u64, sample_rate: u32, frequency: f64) -> f64 {
    let period = period(sample_rate, frequency);
    let value = (cycle_position(index, period) / period) * 4.0 - 1.0;
    if value <= 1.0 { value } else { 3.0 - value }
}
