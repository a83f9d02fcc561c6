//! Additive synthesis over integer harmonics.
//!
//! A fundamental and its integer multiples are evaluated with the same
//! waveform and summed, each scaled by its own gain. The sum is divided by the
//! number of harmonics so that N harmonics at full gain peak at 1.0 when they
//! are phase-aligned. Nothing else normalizes or clamps the output.

use serde::{Deserialize, Serialize};

use crate::Signal;
use crate::oscillators::generate;
use crate::waveform::WaveformKind;

/// Gain given to a newly appended harmonic, in percent.
pub const DEFAULT_HARMONIC_GAIN: f64 = 100.0;

/// Per-harmonic gains in percent.
///
/// Index 0 is the fundamental (harmonic order 1), index `i` is harmonic order
/// `i + 1`. Gains are expected in `[0, 100]`, but only the synthesis driver
/// enforces that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OvertoneSpec {
    gains: Vec<f64>,
}

impl OvertoneSpec {
    /// Creates an empty spec. Synthesizing it yields silence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a spec from gains ordered by harmonic.
    pub fn from_gains(gains: impl Into<Vec<f64>>) -> Self {
        Self {
            gains: gains.into(),
        }
    }

    /// Appends the next harmonic at full gain.
    pub fn push(&mut self) {
        self.push_with_gain(DEFAULT_HARMONIC_GAIN);
    }

    /// Appends the next harmonic at `gain` percent.
    pub fn push_with_gain(&mut self, gain: f64) {
        self.gains.push(gain);
    }

    /// Removes the highest harmonic, returning its gain.
    pub fn pop(&mut self) -> Option<f64> {
        self.gains.pop()
    }

    /// Replaces the gain at `index`, returning the previous gain.
    ///
    /// Returns `None` and changes nothing if there is no such harmonic.
    pub fn update(&mut self, index: usize, gain: f64) -> Option<f64> {
        self.gains
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, gain))
    }

    /// Gains ordered by harmonic.
    pub fn gains(&self) -> &[f64] {
        &self.gains
    }

    /// Number of harmonics, fundamental included.
    pub fn len(&self) -> usize {
        self.gains.len()
    }

    /// True when no harmonics are configured.
    pub fn is_empty(&self) -> bool {
        self.gains.is_empty()
    }

    /// Iterates `(harmonic order, gain)` pairs, starting at order 1.
    pub fn harmonics(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.gains
            .iter()
            .enumerate()
            .map(|(i, &gain)| (i as u32 + 1, gain))
    }
}

impl From<Vec<f64>> for OvertoneSpec {
    fn from(gains: Vec<f64>) -> Self {
        Self { gains }
    }
}

/// Sums `gains.len()` harmonics of `fundamental` at `index`.
///
/// Harmonic `h` is evaluated at `fundamental * h` and scaled by
/// `(gain / 100) / N`. Returns 0.0 when `gains` is empty.
///
/// # Examples
///
/// ```
/// use signalgen::{WaveformKind, WhiteNoise, overtones::synthesize_overtones};
///
/// let mut noise = WhiteNoise::new();
/// // Fundamental and octave, both at full gain
/// let gains = [100.0, 100.0];
/// let value = synthesize_overtones(WaveformKind::Sine, 25, 100, 1.0, 0.5, &gains, &mut noise);
/// assert!((value - 0.5).abs() < 1e-12);
/// ```
pub fn synthesize_overtones<N: Signal + ?Sized>(
    kind: WaveformKind,
    index: u64,
    sample_rate: u32,
    fundamental: f64,
    duty_cycle: f64,
    gains: &[f64],
    noise: &mut N,
) -> f64 {
    let total = gains.len() as f64;
    let mut sum = 0.0;
    for (i, &gain) in gains.iter().enumerate() {
        let frequency = fundamental * (i + 1) as f64;
        let value = generate(kind, index, sample_rate, frequency, duty_cycle, noise);
        sum += value * ((gain / 100.0) / total);
    }
    sum
}
