//! TOML configuration: device sample rate and a default synthesis preset.
//!
//! ```toml
//! [audio]
//! sample_rate = 48000
//!
//! [preset]
//! strategy = "overtone"
//! waveform = "square"
//! frequency = 220.0
//! duty_cycle = 0.3
//! overtones = [100.0, 50.0, 25.0]
//! ```
//!
//! Every key is optional. Values are not range-checked here; the synthesis
//! driver rejects anything out of range when the preset is rendered.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SynthError, SynthResult};
use crate::modulation::{
    DEFAULT_DEPTH, DEFAULT_MODULATING_FREQUENCY, ModulationMode, ModulationSpec,
};
use crate::overtones::OvertoneSpec;
use crate::request::{Strategy, SynthesisRequest, Tone};
use crate::waveform::WaveformKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub preset: PresetConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioConfig {
    #[serde(default = "AudioConfig::default_sample_rate")]
    pub sample_rate: u32,
}

impl AudioConfig {
    fn default_sample_rate() -> u32 {
        48_000
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: Self::default_sample_rate(),
        }
    }
}

/// Which strategy a preset renders with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Plain,
    Overtone,
    Modulated,
}

impl std::str::FromStr for StrategyKind {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "monophonic" => Ok(StrategyKind::Plain),
            "overtone" | "overtones" | "polyphonic" => Ok(StrategyKind::Overtone),
            "modulated" => Ok(StrategyKind::Modulated),
            other => Err(SynthError::config(format!("unknown strategy '{other}'"))),
        }
    }
}

/// A flat description of one request.
///
/// `waveform`, `frequency` and `duty_cycle` describe the voice for the plain
/// and overtone strategies, and the modulator for the modulated strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetConfig {
    #[serde(default)]
    pub strategy: StrategyKind,
    #[serde(default)]
    pub waveform: WaveformKind,
    /// Defaults to 440 Hz, or 2 Hz for the modulated strategy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duty_cycle: Option<f64>,
    #[serde(default)]
    pub overtones: OvertoneSpec,
    #[serde(default)]
    pub mode: ModulationMode,
    #[serde(default = "PresetConfig::default_depth")]
    pub depth: f64,
}

impl PresetConfig {
    const DEFAULT_FREQUENCY: f64 = 440.0;

    fn default_depth() -> f64 {
        DEFAULT_DEPTH
    }

    /// The frequency, falling back to the strategy's default.
    pub fn frequency_or_default(&self) -> f64 {
        self.frequency.unwrap_or(match self.strategy {
            StrategyKind::Modulated => DEFAULT_MODULATING_FREQUENCY,
            StrategyKind::Plain | StrategyKind::Overtone => Self::DEFAULT_FREQUENCY,
        })
    }

    /// The tone described by `waveform`, `frequency` and `duty_cycle`.
    pub fn tone(&self) -> Tone {
        Tone {
            waveform: self.waveform,
            frequency: self.frequency_or_default(),
            duty_cycle: self.duty_cycle,
        }
    }

    /// Builds the strategy this preset describes.
    pub fn strategy(&self) -> Strategy {
        match self.strategy {
            StrategyKind::Plain => Strategy::Plain(self.tone()),
            StrategyKind::Overtone => Strategy::Overtone {
                tone: self.tone(),
                overtones: self.overtones.clone(),
            },
            StrategyKind::Modulated => {
                Strategy::Modulated(ModulationSpec::new(self.mode, self.tone(), self.depth))
            }
        }
    }
}

impl Default for PresetConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            waveform: WaveformKind::default(),
            frequency: None,
            duty_cycle: None,
            overtones: OvertoneSpec::default(),
            mode: ModulationMode::default(),
            depth: Self::default_depth(),
        }
    }
}

impl Config {
    /// Parses a config from TOML text.
    pub fn from_toml_str(text: &str) -> SynthResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a config file.
    pub fn load(path: impl AsRef<Path>) -> SynthResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)
            .map_err(|err| SynthError::config(format!("{}: {err}", path.display())))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> SynthResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "config not found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Serializes the config as TOML.
    pub fn to_toml_string(&self) -> SynthResult<String> {
        toml::to_string_pretty(self).map_err(|err| SynthError::config(err.to_string()))
    }

    /// The preset as a request at the configured sample rate.
    pub fn request(&self) -> SynthesisRequest {
        SynthesisRequest::new(self.audio.sample_rate, self.preset.strategy())
    }
}
