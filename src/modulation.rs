//! Amplitude and frequency modulation of a fixed sine carrier.
//!
//! The carrier is always a 440 Hz sine. A modulating waveform, evaluated at
//! the same sample index, either scales the carrier's amplitude or shifts its
//! phase.
//!
//! Frequency mode adds the modulator's instantaneous value to the carrier's
//! phase argument instead of integrating a frequency deviation over time, so
//! it is phase modulation in the strict sense. The formula is kept exactly as
//! is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};
use crate::oscillators::{DEFAULT_DUTY_CYCLE, periodic, sine};
use crate::request::Tone;
use crate::waveform::PeriodicShape;

/// Carrier frequency in Hz.
pub const CARRIER_FREQUENCY: f64 = 440.0;

/// Modulating frequency used when a preset does not give one.
pub const DEFAULT_MODULATING_FREQUENCY: f64 = 2.0;

/// Modulation depth used when a preset does not give one.
pub const DEFAULT_DEPTH: f64 = 0.5;

/// How the modulator acts on the carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModulationMode {
    /// Scale the carrier's amplitude.
    #[default]
    Amplitude,
    /// Offset the carrier's phase.
    Frequency,
}

impl fmt::Display for ModulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModulationMode::Amplitude => f.write_str("amplitude"),
            ModulationMode::Frequency => f.write_str("frequency"),
        }
    }
}

impl FromStr for ModulationMode {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "am" | "amplitude" => Ok(ModulationMode::Amplitude),
            "fm" | "frequency" => Ok(ModulationMode::Frequency),
            other => Err(SynthError::config(format!(
                "unknown modulation mode '{other}'"
            ))),
        }
    }
}

/// A modulation request: mode, modulating tone and depth.
///
/// `depth` is a fraction in `[0, 1]`. The modulator's waveform must be
/// periodic; noise is rejected when the spec is resolved into a
/// [`Modulator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModulationSpec {
    pub mode: ModulationMode,
    pub modulator: Tone,
    pub depth: f64,
}

impl ModulationSpec {
    /// Creates a spec.
    pub fn new(mode: ModulationMode, modulator: Tone, depth: f64) -> Self {
        Self {
            mode,
            modulator,
            depth,
        }
    }

    /// The carrier frequency, which is fixed.
    pub fn carrier_frequency(&self) -> f64 {
        CARRIER_FREQUENCY
    }

    /// Resolves the modulating tone into a [`Modulator`].
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::Configuration`] if the modulating waveform is
    /// noise.
    pub fn modulator(&self) -> SynthResult<Modulator> {
        let shape = PeriodicShape::try_from(self.modulator.waveform).map_err(|_| {
            SynthError::configuration(format!(
                "{} cannot be used as a modulating waveform",
                self.modulator.waveform
            ))
        })?;
        Ok(Modulator {
            shape,
            frequency: self.modulator.frequency,
            duty_cycle: self.modulator.duty_cycle.unwrap_or(DEFAULT_DUTY_CYCLE),
            depth: self.depth,
        })
    }
}

/// A resolved modulating waveform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modulator {
    pub shape: PeriodicShape,
    pub frequency: f64,
    pub duty_cycle: f64,
    pub depth: f64,
}

impl Modulator {
    /// The modulating waveform's value at `index`.
    #[inline]
    pub fn value(&self, index: u64, sample_rate: u32) -> f64 {
        periodic(
            self.shape,
            index,
            sample_rate,
            self.frequency,
            self.duty_cycle,
        )
    }
}

/// Modulated carrier value at `index`.
///
/// With `m` the modulator's value:
/// - amplitude: `carrier(index) * (1 + m * depth * 0.5)`, so the carrier's
///   amplitude swings between `1 - depth/2` and `1 + depth/2`
/// - frequency: `sin(2π * carrier_frequency * index / sample_rate + θ)` with
///   `θ = m * depth * carrier_frequency * 0.5`
///
/// # Examples
///
/// ```
/// use signalgen::modulation::{modulate, ModulationMode, Modulator, CARRIER_FREQUENCY};
/// use signalgen::PeriodicShape;
///
/// let still = Modulator {
///     shape: PeriodicShape::Sine,
///     frequency: 2.0,
///     duty_cycle: 0.5,
///     depth: 0.0,
/// };
/// let value = modulate(ModulationMode::Amplitude, 10, 44100, CARRIER_FREQUENCY, &still);
/// assert_eq!(value, signalgen::oscillators::sine(10, 44100, CARRIER_FREQUENCY));
/// ```
pub fn modulate(
    mode: ModulationMode,
    index: u64,
    sample_rate: u32,
    carrier_frequency: f64,
    modulator: &Modulator,
) -> f64 {
    let m = modulator.value(index, sample_rate);
    match mode {
        ModulationMode::Amplitude => {
            let carrier = sine(index, sample_rate, carrier_frequency);
            carrier * (1.0 + m * modulator.depth * 0.5)
        }
        ModulationMode::Frequency => {
            let offset = m * modulator.depth * carrier_frequency * 0.5;
            (2.0 * std::f64::consts::PI * carrier_frequency * index as f64 / sample_rate as f64
                + offset)
                .sin()
        }
    }
}
