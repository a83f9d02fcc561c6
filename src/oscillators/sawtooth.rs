//! Sawtooth wave.

use super::{cycle_position, period};

/// Sawtooth wave value at `index`.
///
/// Ramps linearly from -1.0 to 1.0 over one period and resets at the
/// period boundary.
#[inline]
pub fn sawtooth(index: u64, sample_rate: u32, frequency: f64) -> f64 {
    let period = period(sample_rate, frequency);
    (cycle_position(index, period) / period) * 2.0 - 1.0
}
