//! Waveform selectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SynthError;

/// The five base waveforms a generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveformKind {
    #[default]
    Sine,
    Square,
    Triangle,
    Sawtooth,
    Noise,
}

impl WaveformKind {
    /// All kinds, in display order.
    pub const ALL: [WaveformKind; 5] = [
        WaveformKind::Sine,
        WaveformKind::Sawtooth,
        WaveformKind::Triangle,
        WaveformKind::Square,
        WaveformKind::Noise,
    ];

    /// Returns the periodic shape for this kind, or `None` for noise.
    pub fn periodic(self) -> Option<PeriodicShape> {
        match self {
            WaveformKind::Sine => Some(PeriodicShape::Sine),
            WaveformKind::Square => Some(PeriodicShape::Square),
            WaveformKind::Triangle => Some(PeriodicShape::Triangle),
            WaveformKind::Sawtooth => Some(PeriodicShape::Sawtooth),
            WaveformKind::Noise => None,
        }
    }

    /// Lowercase name, as used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            WaveformKind::Sine => "sine",
            WaveformKind::Square => "square",
            WaveformKind::Triangle => "triangle",
            WaveformKind::Sawtooth => "sawtooth",
            WaveformKind::Noise => "noise",
        }
    }
}

impl fmt::Display for WaveformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveformKind {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sine" | "sin" => Ok(WaveformKind::Sine),
            "square" | "sq" => Ok(WaveformKind::Square),
            "triangle" | "tri" => Ok(WaveformKind::Triangle),
            "sawtooth" | "saw" => Ok(WaveformKind::Sawtooth),
            "noise" | "white" => Ok(WaveformKind::Noise),
            other => Err(SynthError::config(format!("unknown waveform '{other}'"))),
        }
    }
}

/// The deterministic subset of [`WaveformKind`].
///
/// Anything that must be reproducible from a time index alone (such as a
/// modulator) takes a `PeriodicShape` rather than a `WaveformKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodicShape {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl From<PeriodicShape> for WaveformKind {
    fn from(shape: PeriodicShape) -> Self {
        match shape {
            PeriodicShape::Sine => WaveformKind::Sine,
            PeriodicShape::Square => WaveformKind::Square,
            PeriodicShape::Triangle => WaveformKind::Triangle,
            PeriodicShape::Sawtooth => WaveformKind::Sawtooth,
        }
    }
}

impl TryFrom<WaveformKind> for PeriodicShape {
    type Error = SynthError;

    fn try_from(kind: WaveformKind) -> Result<Self, Self::Error> {
        kind.periodic()
            .ok_or_else(|| SynthError::configuration(format!("{kind} is not a periodic waveform")))
    }
}
