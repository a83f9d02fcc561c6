//! WAV export.
//!
//! Samples are written unchanged as 32-bit float so that overtone sums
//! outside [-1, 1] survive the round trip.

use std::io::{Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use tracing::debug;

use crate::buffer::SampleBuffer;
use crate::error::SynthResult;

fn spec(buffer: &SampleBuffer) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate: buffer.sample_rate(),
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    }
}

/// Writes `buffer` to a mono WAV file at `path`.
pub fn write_wav(path: impl AsRef<Path>, buffer: &SampleBuffer) -> SynthResult<()> {
    let path = path.as_ref();
    let writer = WavWriter::create(path, spec(buffer))?;
    write_samples(writer, buffer)?;
    debug!(path = %path.display(), samples = buffer.len(), "wrote wav");
    Ok(())
}

/// Writes `buffer` as a mono WAV stream into `out`.
pub fn write_wav_to<W: Write + Seek>(out: W, buffer: &SampleBuffer) -> SynthResult<()> {
    let writer = WavWriter::new(out, spec(buffer))?;
    write_samples(writer, buffer)
}

fn write_samples<W: Write + Seek>(
    mut writer: WavWriter<W>,
    buffer: &SampleBuffer,
) -> SynthResult<()> {
    for &sample in buffer.iter() {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}
