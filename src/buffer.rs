//! Rendered sample buffers.

use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;

/// An immutable block of mono `f32` samples.
///
/// Produced once per synthesis call. Cloning is cheap: clones share the same
/// samples, which lets a playback thread loop a buffer while the caller keeps
/// a handle to it.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Arc<[f32]>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Wraps rendered samples.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples: samples.into(),
            sample_rate,
        }
    }

    /// Sample rate the buffer was rendered at, in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Playback length at the buffer's sample rate.
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.samples.len() as f64 / self.sample_rate as f64)
    }

    /// Largest absolute sample value. 0.0 for an empty buffer.
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0_f32, |peak, s| peak.max(s.abs()))
    }

    /// Number of samples outside `[-1, 1]`.
    pub fn clipped_count(&self) -> usize {
        self.samples.iter().filter(|s| s.abs() > 1.0).count()
    }

    /// True when every sample is exactly zero.
    pub fn is_silent(&self) -> bool {
        self.samples.iter().all(|&s| s == 0.0)
    }

    /// Copies the samples out.
    pub fn to_vec(&self) -> Vec<f32> {
        self.samples.to_vec()
    }
}

impl Deref for SampleBuffer {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.samples
    }
}

impl AsRef<[f32]> for SampleBuffer {
    fn as_ref(&self) -> &[f32] {
        &self.samples
    }
}
