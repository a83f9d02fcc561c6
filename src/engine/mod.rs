//! Buffer synthesis driver.
//!
//! Validates a [`SynthesisRequest`], allocates a one-second buffer at the
//! request's sample rate and fills it sample by sample through the selected
//! strategy. Validation runs to completion before the first sample is
//! computed, so a request either yields a whole buffer or an error.

mod validate;

pub use validate::{check_depth, check_duty_cycle, check_frequency, check_gain, validate};

use rand::Rng;
use tracing::{debug, warn};

use crate::Signal;
use crate::buffer::SampleBuffer;
use crate::error::SynthResult;
use crate::modulation::modulate;
use crate::noise::WhiteNoise;
use crate::oscillators::generate;
use crate::overtones::synthesize_overtones;
use crate::request::{Strategy, SynthesisRequest};

/// Renders `request`, drawing any noise from the thread-local RNG.
///
/// # Errors
///
/// Returns the first problem [`validate`] finds. No buffer is produced in
/// that case.
///
/// # Examples
///
/// ```
/// use signalgen::{synthesize, SynthesisRequest, Tone, WaveformKind};
///
/// let request = SynthesisRequest::plain(44100, Tone::new(WaveformKind::Sine, 440.0));
/// let buffer = synthesize(&request)?;
/// assert_eq!(buffer.len(), 44100);
/// assert_eq!(buffer[0], 0.0);
/// # Ok::<(), signalgen::SynthError>(())
/// ```
pub fn synthesize(request: &SynthesisRequest) -> SynthResult<SampleBuffer> {
    synthesize_with_noise(request, &mut WhiteNoise::new())
}

/// Renders `request`, drawing any noise from `rng`.
///
/// With a seeded RNG the output is fully reproducible, noise included.
pub fn synthesize_with_rng<R: Rng + ?Sized>(
    request: &SynthesisRequest,
    rng: &mut R,
) -> SynthResult<SampleBuffer> {
    synthesize_with_noise(request, &mut WhiteNoise::with_rng(rng))
}

/// Renders `request`, drawing any noise from `noise`.
pub fn synthesize_with_noise<N: Signal + ?Sized>(
    request: &SynthesisRequest,
    noise: &mut N,
) -> SynthResult<SampleBuffer> {
    if let Err(err) = validate(request) {
        warn!(strategy = request.strategy.name(), error = %err, "rejected synthesis request");
        return Err(err);
    }

    let sample_rate = request.sample_rate;
    let len = request.sample_count() as u64;
    debug!(
        strategy = request.strategy.name(),
        sample_rate,
        samples = len,
        "synthesizing buffer"
    );

    let samples: Vec<f32> = match &request.strategy {
        Strategy::Plain(tone) => {
            let duty_cycle = tone.duty_cycle_or_default();
            (0..len)
                .map(|index| {
                    generate(
                        tone.waveform,
                        index,
                        sample_rate,
                        tone.frequency,
                        duty_cycle,
                        &mut *noise,
                    ) as f32
                })
                .collect()
        }
        Strategy::Overtone { tone, overtones } => {
            let duty_cycle = tone.duty_cycle_or_default();
            (0..len)
                .map(|index| {
                    synthesize_overtones(
                        tone.waveform,
                        index,
                        sample_rate,
                        tone.frequency,
                        duty_cycle,
                        overtones.gains(),
                        &mut *noise,
                    ) as f32
                })
                .collect()
        }
        Strategy::Modulated(spec) => {
            let modulator = spec.modulator()?;
            let carrier_frequency = spec.carrier_frequency();
            (0..len)
                .map(|index| {
                    modulate(spec.mode, index, sample_rate, carrier_frequency, &modulator) as f32
                })
                .collect()
        }
    };

    Ok(SampleBuffer::new(samples, sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynthError;
    use crate::modulation::{ModulationMode, ModulationSpec};
    use crate::request::Tone;
    use crate::waveform::WaveformKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_plain_sine_length_and_start() {
        let request = SynthesisRequest::plain(44100, Tone::new(WaveformKind::Sine, 440.0));
        let buffer = synthesize(&request).unwrap();
        assert_eq!(buffer.len(), 44100);
        assert_eq!(buffer.sample_rate(), 44100);
        assert_eq!(buffer[0], 0.0);
        let one_cycle = (44100.0_f64 / 440.0).round() as usize;
        assert!((buffer[one_cycle] - buffer[0]).abs() < 0.02);
    }

    #[test]
    fn test_rejects_bad_frequency_without_buffer() {
        for frequency in [0.0, 10_001.0, f64::NAN] {
            let request =
                SynthesisRequest::plain(44100, Tone::new(WaveformKind::Sine, frequency));
            let err = synthesize(&request).unwrap_err();
            assert!(matches!(err, SynthError::Validation { field: "frequency", .. }));
        }
    }

    #[test]
    fn test_noise_reproducible_with_seed() {
        let request = SynthesisRequest::plain(8000, Tone::new(WaveformKind::Noise, 440.0));
        let a = synthesize_with_rng(&request, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = synthesize_with_rng(&request, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn test_empty_overtones_are_silent() {
        let request =
            SynthesisRequest::overtone(8000, Tone::new(WaveformKind::Sine, 440.0), Vec::new());
        let buffer = synthesize(&request).unwrap();
        assert_eq!(buffer.len(), 8000);
        assert!(buffer.is_silent());
    }

    #[test]
    fn test_modulated_zero_depth_is_carrier() {
        let spec = ModulationSpec::new(
            ModulationMode::Frequency,
            Tone::new(WaveformKind::Triangle, 3.0),
            0.0,
        );
        let modulated = synthesize(&SynthesisRequest::modulated(22050, spec)).unwrap();
        let carrier =
            synthesize(&SynthesisRequest::plain(22050, Tone::new(WaveformKind::Sine, 440.0)))
                .unwrap();
        assert_eq!(modulated, carrier);
    }

    #[test]
    fn test_noise_modulator_is_configuration_error() {
        let spec = ModulationSpec::new(
            ModulationMode::Amplitude,
            Tone::new(WaveformKind::Noise, 3.0),
            0.5,
        );
        let err = synthesize(&SynthesisRequest::modulated(22050, spec)).unwrap_err();
        assert!(matches!(err, SynthError::Configuration { .. }));
    }
}
