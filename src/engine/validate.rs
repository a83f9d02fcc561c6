//! Request validation.
//!
//! The driver calls [`validate`] before rendering; the generators themselves
//! never check their inputs.

use crate::error::{SynthError, SynthResult};
use crate::request::{MAX_FREQUENCY, Strategy, SynthesisRequest, Tone};

/// Checks every parameter of `request`.
///
/// # Errors
///
/// - [`SynthError::Validation`] for a zero sample rate, a frequency that is
///   not finite or outside `(0, 10000]`, a duty cycle outside `(0, 1]`, a
///   depth outside `[0, 1]` or an overtone gain outside `[0, 100]`
/// - [`SynthError::Configuration`] when noise is used as a modulator
pub fn validate(request: &SynthesisRequest) -> SynthResult<()> {
    if request.sample_rate == 0 {
        return Err(SynthError::validation(
            "sample_rate",
            "must be a positive number of Hz",
        ));
    }

    match &request.strategy {
        Strategy::Plain(tone) => check_tone(tone, "frequency", "duty_cycle"),
        Strategy::Overtone { tone, overtones } => {
            check_tone(tone, "frequency", "duty_cycle")?;
            for (order, gain) in overtones.harmonics() {
                check_gain(order, gain)?;
            }
            Ok(())
        }
        Strategy::Modulated(spec) => {
            check_tone(
                &spec.modulator,
                "modulating_frequency",
                "modulating_duty_cycle",
            )?;
            check_depth(spec.depth)?;
            spec.modulator().map(|_| ())
        }
    }
}

fn check_tone(
    tone: &Tone,
    frequency_field: &'static str,
    duty_field: &'static str,
) -> SynthResult<()> {
    check_frequency(frequency_field, tone.frequency)?;
    if let Some(duty) = tone.duty_cycle {
        check_duty_cycle(duty_field, duty)?;
    }
    Ok(())
}

/// Frequencies must be finite and in `(0, 10000]` Hz.
pub fn check_frequency(field: &'static str, frequency: f64) -> SynthResult<()> {
    if !frequency.is_finite() {
        return Err(SynthError::validation(
            field,
            format!("{frequency} is not a finite number"),
        ));
    }
    if frequency <= 0.0 {
        return Err(SynthError::validation(
            field,
            format!("{frequency} Hz must be greater than 0"),
        ));
    }
    if frequency > MAX_FREQUENCY {
        return Err(SynthError::validation(
            field,
            format!("{frequency} Hz exceeds the {MAX_FREQUENCY} Hz limit"),
        ));
    }
    Ok(())
}

/// Duty cycles must be in `(0, 1]`.
pub fn check_duty_cycle(field: &'static str, duty: f64) -> SynthResult<()> {
    if !(duty.is_finite() && duty > 0.0 && duty <= 1.0) {
        return Err(SynthError::validation(
            field,
            format!("{duty} is outside (0, 1]"),
        ));
    }
    Ok(())
}

/// Modulation depth must be in `[0, 1]`.
pub fn check_depth(depth: f64) -> SynthResult<()> {
    if !(0.0..=1.0).contains(&depth) {
        return Err(SynthError::validation(
            "depth",
            format!("{depth} is outside [0, 1]"),
        ));
    }
    Ok(())
}

/// Overtone gains must be in `[0, 100]` percent.
pub fn check_gain(order: u32, gain: f64) -> SynthResult<()> {
    if !(0.0..=100.0).contains(&gain) {
        return Err(SynthError::validation(
            "overtone_gain",
            format!("harmonic {order} gain {gain} is outside [0, 100]"),
        ));
    }
    Ok(())
}
