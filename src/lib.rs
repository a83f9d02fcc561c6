//! Signalgen - one-second waveform synthesis
//!
//! This library renders a second of mono audio from a small set of
//! parameters. It provides:
//! - Periodic generators (sine, square with duty cycle, triangle, sawtooth)
//!   and white noise
//! - Overtone stacking: integer harmonics of a fundamental, each with its
//!   own gain
//! - Amplitude and frequency modulation of a 440 Hz sine carrier
//! - A driver that validates a request and fills a [`SampleBuffer`]
//! - A [`Player`] that loops a rendered buffer for an audio callback
//!
//! # Example
//!
//! ```
//! use signalgen::{synthesize, SynthesisRequest, Tone, WaveformKind};
//!
//! let tone = Tone::new(WaveformKind::Square, 2.0).with_duty_cycle(0.5);
//! let buffer = synthesize(&SynthesisRequest::plain(100, tone))?;
//!
//! assert_eq!(buffer.len(), 100);
//! assert!(buffer[..25].iter().all(|&s| s == 1.0));
//! assert!(buffer[25..50].iter().all(|&s| s == -1.0));
//! # Ok::<(), signalgen::SynthError>(())
//! ```

pub mod buffer;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod modulation;
pub mod noise;
pub mod oscillators;
pub mod overtones;
pub mod player;
pub mod request;
pub mod waveform;
#[cfg(feature = "wav")]
pub mod wav;

// Re-export commonly used types at the crate root
pub use buffer::SampleBuffer;
pub use config::Config;
pub use crate::core::Signal;
pub use engine::{synthesize, synthesize_with_noise, synthesize_with_rng};
pub use error::{SynthError, SynthResult};
pub use modulation::{CARRIER_FREQUENCY, ModulationMode, ModulationSpec};
pub use noise::WhiteNoise;
pub use overtones::OvertoneSpec;
pub use player::{Player, PlayerState};
pub use request::{Strategy, SynthesisRequest, Tone};
pub use waveform::{PeriodicShape, WaveformKind};
#[cfg(feature = "wav")]
pub use wav::write_wav;
