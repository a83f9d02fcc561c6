use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use signalgen::{
    CARRIER_FREQUENCY, ModulationMode, ModulationSpec, SynthError, SynthesisRequest, Tone,
    WaveformKind, synthesize, synthesize_with_rng,
};

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn test_sine_440_at_44100() {
    let buffer =
        synthesize(&SynthesisRequest::plain(44100, Tone::new(WaveformKind::Sine, 440.0))).unwrap();
    assert_eq!(buffer.len(), 44100);
    assert_eq!(buffer.sample_rate(), 44100);
    assert_eq!(buffer[0], 0.0);

    let quarter = (2.0 * std::f64::consts::PI * 440.0 * 25.0 / 44100.0).sin() as f32;
    assert!(approx_eq(buffer[25], quarter));
    assert!(buffer.iter().all(|s| (-1.0..=1.0).contains(s)));
}

#[test]
fn test_square_2hz_at_100() {
    let tone = Tone::new(WaveformKind::Square, 2.0).with_duty_cycle(0.5);
    let buffer = synthesize(&SynthesisRequest::plain(100, tone)).unwrap();

    let mut expected = Vec::new();
    for _ in 0..2 {
        expected.extend([1.0f32; 25]);
        expected.extend([-1.0f32; 25]);
    }
    assert_eq!(buffer.to_vec(), expected);
}

#[test]
fn test_bounded_waveforms_stay_in_range() {
    for waveform in [
        WaveformKind::Sine,
        WaveformKind::Square,
        WaveformKind::Sawtooth,
    ] {
        let buffer =
            synthesize(&SynthesisRequest::plain(8000, Tone::new(waveform, 333.0))).unwrap();
        assert!(
            buffer.iter().all(|s| (-1.0..=1.0).contains(s)),
            "{waveform} left [-1, 1]"
        );
    }
}

#[test]
fn test_triangle_second_half_exceeds_one() {
    let buffer =
        synthesize(&SynthesisRequest::plain(8, Tone::new(WaveformKind::Triangle, 1.0))).unwrap();
    assert_eq!(buffer.to_vec(), vec![-1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 1.0, 0.5]);
}

#[test]
fn test_invalid_frequencies_are_rejected() {
    for frequency in [0.0, -5.0, 10_001.0, f64::NAN, f64::INFINITY] {
        let request = SynthesisRequest::plain(44100, Tone::new(WaveformKind::Sine, frequency));
        let err = synthesize(&request).unwrap_err();
        assert!(matches!(err, SynthError::Validation { .. }), "{frequency}: {err}");
        assert_eq!(err.field(), Some("frequency"));
    }
}

#[test]
fn test_max_frequency_is_accepted() {
    let request = SynthesisRequest::plain(44100, Tone::new(WaveformKind::Sine, 10_000.0));
    assert!(synthesize(&request).is_ok());
}

#[test]
fn test_invalid_duty_cycle_is_rejected() {
    for duty in [0.0, 1.5, -0.1] {
        let tone = Tone::new(WaveformKind::Square, 100.0).with_duty_cycle(duty);
        let err = synthesize(&SynthesisRequest::plain(1000, tone)).unwrap_err();
        assert_eq!(err.field(), Some("duty_cycle"));
    }
}

#[test]
fn test_zero_sample_rate_is_rejected() {
    let err = synthesize(&SynthesisRequest::plain(0, Tone::new(WaveformKind::Sine, 440.0)))
        .unwrap_err();
    assert_eq!(err.field(), Some("sample_rate"));
}

#[test]
fn test_single_overtone_matches_plain() {
    for waveform in [
        WaveformKind::Sine,
        WaveformKind::Square,
        WaveformKind::Triangle,
        WaveformKind::Sawtooth,
    ] {
        let tone = Tone::new(waveform, 220.0);
        let plain = synthesize(&SynthesisRequest::plain(8000, tone)).unwrap();
        let stacked =
            synthesize(&SynthesisRequest::overtone(8000, tone, vec![100.0])).unwrap();
        assert!(
            plain.iter().zip(stacked.iter()).all(|(&a, &b)| approx_eq(a, b)),
            "{waveform} differs"
        );
    }
}

#[test]
fn test_overtone_sum_is_bounded() {
    let tone = Tone::new(WaveformKind::Sawtooth, 110.0);
    let gains = vec![100.0, 80.0, 60.0, 40.0, 20.0];
    let buffer = synthesize(&SynthesisRequest::overtone(8000, tone, gains)).unwrap();
    assert!(buffer.peak() <= 1.0 + 1e-6);
}

#[test]
fn test_triangle_overtone_overflow_is_kept() {
    let tone = Tone::new(WaveformKind::Triangle, 110.0);
    let buffer =
        synthesize(&SynthesisRequest::overtone(8000, tone, vec![100.0, 100.0, 100.0])).unwrap();
    assert_eq!(buffer.len(), 8000);
    assert!(buffer.peak() > 1.0, "peak was {}", buffer.peak());
    assert!(buffer.clipped_count() > 0);
}

#[test]
fn test_empty_overtones_are_silent() {
    let tone = Tone::new(WaveformKind::Sine, 110.0);
    let buffer = synthesize(&SynthesisRequest::overtone(8000, tone, Vec::new())).unwrap();
    assert_eq!(buffer.len(), 8000);
    assert!(buffer.is_silent());
}

#[test]
fn test_overtone_gain_out_of_range() {
    let tone = Tone::new(WaveformKind::Sine, 110.0);
    let err = synthesize(&SynthesisRequest::overtone(8000, tone, vec![100.0, 150.0]))
        .unwrap_err();
    assert_eq!(err.field(), Some("overtone_gain"));
    assert!(err.to_string().contains("harmonic 2"), "{err}");
}

#[test]
fn test_zero_depth_modulation_is_plain_carrier() {
    let carrier = synthesize(&SynthesisRequest::plain(
        8000,
        Tone::new(WaveformKind::Sine, CARRIER_FREQUENCY),
    ))
    .unwrap();
    for mode in [ModulationMode::Amplitude, ModulationMode::Frequency] {
        let spec = ModulationSpec::new(mode, Tone::new(WaveformKind::Square, 2.0), 0.0);
        let buffer = synthesize(&SynthesisRequest::modulated(8000, spec)).unwrap();
        assert!(
            carrier.iter().zip(buffer.iter()).all(|(&a, &b)| approx_eq(a, b)),
            "{mode} with zero depth changed the carrier"
        );
    }
}

#[test]
fn test_full_depth_am_reaches_one_and_a_half() {
    let spec = ModulationSpec::new(
        ModulationMode::Amplitude,
        Tone::new(WaveformKind::Square, 2.0),
        1.0,
    );
    let buffer = synthesize(&SynthesisRequest::modulated(44100, spec)).unwrap();
    assert!(buffer.peak() > 1.4);
    assert!(buffer.peak() <= 1.5 + 1e-6);
}

#[test]
fn test_noise_modulator_is_configuration_error() {
    let spec = ModulationSpec::new(
        ModulationMode::Frequency,
        Tone::new(WaveformKind::Noise, 2.0),
        0.5,
    );
    let err = synthesize(&SynthesisRequest::modulated(8000, spec)).unwrap_err();
    assert!(matches!(err, SynthError::Configuration { .. }), "{err}");
}

#[test]
fn test_modulation_depth_out_of_range() {
    let spec = ModulationSpec::new(
        ModulationMode::Amplitude,
        Tone::new(WaveformKind::Sine, 2.0),
        1.5,
    );
    let err = synthesize(&SynthesisRequest::modulated(8000, spec)).unwrap_err();
    assert_eq!(err.field(), Some("depth"));
}

#[test]
fn test_seeded_noise_is_reproducible() {
    let request = SynthesisRequest::plain(8000, Tone::new(WaveformKind::Noise, 440.0));
    let a = synthesize_with_rng(&request, &mut StdRng::seed_from_u64(7)).unwrap();
    let b = synthesize_with_rng(&request, &mut StdRng::seed_from_u64(7)).unwrap();
    let c = synthesize_with_rng(&request, &mut StdRng::seed_from_u64(8)).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.iter().all(|s| (-1.0..=1.0).contains(s)));
    assert!(!a.is_silent());
}

#[test]
fn test_repeated_calls_are_identical() {
    let tone = Tone::new(WaveformKind::Triangle, 300.0);
    let request = SynthesisRequest::overtone(8000, tone, vec![100.0, 50.0]);
    assert_eq!(synthesize(&request).unwrap(), synthesize(&request).unwrap());
}
