//! Periodic waveform evaluation.
//!
//! Every periodic generator here is a pure function of the sample index and
//! its parameters: there is no phase accumulator, so sample `n` can be
//! computed without computing samples `0..n` first. Noise is the exception
//! and draws from a caller-owned [`Signal`].

mod sawtooth;
mod sine;
mod square;
mod triangle;

pub use sawtooth::sawtooth;
pub use sine::sine;
pub use square::{DEFAULT_DUTY_CYCLE, square};
pub use triangle::triangle;

use crate::Signal;
use crate::waveform::{PeriodicShape, WaveformKind};

/// Length of one cycle in samples. Not necessarily an integer.
#[inline]
pub(crate) fn period(sample_rate: u32, frequency: f64) -> f64 {
    sample_rate as f64 / frequency
}

/// Position of `index` within its cycle, in samples.
#[inline]
pub(crate) fn cycle_position(index: u64, period: f64) -> f64 {
    index as f64 % period
}

/// Evaluates a periodic shape at `index`.
///
/// `duty_cycle` only affects [`PeriodicShape::Square`].
pub fn periodic(
    shape: PeriodicShape,
    index: u64,
    sample_rate: u32,
    frequency: f64,
    duty_cycle: f64,
) -> f64 {
    match shape {
        PeriodicShape::Sine => sine(index, sample_rate, frequency),
        PeriodicShape::Square => square(index, sample_rate, frequency, duty_cycle),
        PeriodicShape::Triangle => triangle(index, sample_rate, frequency),
        PeriodicShape::Sawtooth => sawtooth(index, sample_rate, frequency),
    }
}

/// Evaluates any waveform kind at `index`.
///
/// Periodic kinds ignore `noise`; [`WaveformKind::Noise`] ignores everything
/// except `noise`, pulling exactly one sample from it.
///
/// # Examples
///
/// ```
/// use signalgen::{WaveformKind, WhiteNoise, oscillators};
///
/// let mut noise = WhiteNoise::new();
/// let first = oscillators::generate(WaveformKind::Square, 0, 100, 2.0, 0.5, &mut noise);
/// assert_eq!(first, 1.0);
/// ```
pub fn generate<N: Signal + ?Sized>(
    kind: WaveformKind,
    index: u64,
    sample_rate: u32,
    frequency: f64,
    duty_cycle: f64,
    noise: &mut N,
) -> f64 {
    match kind.periodic() {
        Some(shape) => periodic(shape, index, sample_rate, frequency, duty_cycle),
        None => noise.next_sample(),
    }
}
