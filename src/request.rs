//! Synthesis request types.
//!
//! A [`SynthesisRequest`] is built fresh for every play action and handed to
//! [`synthesize`](crate::synthesize). Nothing here is validated on
//! construction; the driver checks every field before rendering.

use serde::{Deserialize, Serialize};

use crate::modulation::ModulationSpec;
use crate::oscillators::DEFAULT_DUTY_CYCLE;
use crate::overtones::OvertoneSpec;
use crate::waveform::WaveformKind;

/// Length of every rendered buffer, in seconds.
pub const DURATION_SECONDS: u32 = 1;

/// Upper bound for any frequency, in Hz.
pub const MAX_FREQUENCY: f64 = 10_000.0;

/// A waveform at a frequency, with an optional duty cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub waveform: WaveformKind,
    pub frequency: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duty_cycle: Option<f64>,
}

impl Tone {
    /// Creates a tone with the default duty cycle.
    pub fn new(waveform: WaveformKind, frequency: f64) -> Self {
        Self {
            waveform,
            frequency,
            duty_cycle: None,
        }
    }

    /// Sets the duty cycle (only meaningful for square waves).
    pub fn with_duty_cycle(mut self, duty_cycle: f64) -> Self {
        self.duty_cycle = Some(duty_cycle);
        self
    }

    /// The duty cycle, falling back to 0.5.
    pub fn duty_cycle_or_default(&self) -> f64 {
        self.duty_cycle.unwrap_or(DEFAULT_DUTY_CYCLE)
    }
}

/// Which engine fills the buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum Strategy {
    /// A single waveform.
    Plain(Tone),
    /// Integer harmonics of the tone's frequency, each with its own gain.
    Overtone {
        tone: Tone,
        overtones: OvertoneSpec,
    },
    /// A 440 Hz sine carrier modulated by another waveform.
    Modulated(ModulationSpec),
}

impl Strategy {
    /// Short name used in logs and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Plain(_) => "plain",
            Strategy::Overtone { .. } => "overtone",
            Strategy::Modulated(_) => "modulated",
        }
    }
}

/// Everything needed to render one buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    /// Output sample rate in Hz, normally the audio device's rate.
    pub sample_rate: u32,
    #[serde(flatten)]
    pub strategy: Strategy,
}

impl SynthesisRequest {
    /// Creates a request.
    pub fn new(sample_rate: u32, strategy: Strategy) -> Self {
        Self {
            sample_rate,
            strategy,
        }
    }

    /// A single waveform.
    pub fn plain(sample_rate: u32, tone: Tone) -> Self {
        Self::new(sample_rate, Strategy::Plain(tone))
    }

    /// Harmonics of `tone`.
    pub fn overtone(sample_rate: u32, tone: Tone, overtones: impl Into<OvertoneSpec>) -> Self {
        Self::new(
            sample_rate,
            Strategy::Overtone {
                tone,
                overtones: overtones.into(),
            },
        )
    }

    /// A modulated carrier.
    pub fn modulated(sample_rate: u32, spec: ModulationSpec) -> Self {
        Self::new(sample_rate, Strategy::Modulated(spec))
    }

    /// Number of samples the rendered buffer will hold.
    pub fn sample_count(&self) -> usize {
        self.sample_rate as usize * DURATION_SECONDS as usize
    }
}
