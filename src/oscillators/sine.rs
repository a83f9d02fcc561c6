//! Sine wave.

use std::f64::consts::PI;

/// Sine wave value at `index`: `sin(2π · frequency · index / sample_rate)`.
///
/// # Examples
///
/// ```
/// use signalgen::oscillators::sine;
///
/// assert_eq!(sine(0, 44100, 440.0), 0.0);
/// ```
#[inline]
pub fn sine(index: u64, sample_rate: u32, frequency: f64) -> f64 {
    (2.0 * PI * frequency * index as f64 / sample_rate as f64).sin()
}
