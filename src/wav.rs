//! Writing sample streams to WAV files.
//!
//! Samples are quantized to mono 16-bit signed PCM. Values outside
//! `[-1.0, 1.0]` clip.

use crate::SynthError;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

/// Format of the files produced by this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavOptions {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

impl WavOptions {
    /// Single channel, 16-bit integer samples.
    pub fn mono_pcm16(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            channels: 1,
            bits_per_sample: 16,
        }
    }

    fn spec(&self) -> WavSpec {
        WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bits_per_sample,
            sample_format: SampleFormat::Int,
        }
    }
}

/// Converts a floating-point sample to 16-bit PCM, clipping to full scale.
///
/// # Examples
///
/// ```
/// use nanosynth::wav::quantize;
///
/// assert_eq!(quantize(0.0), 0);
/// assert_eq!(quantize(1.0), i16::MAX);
/// assert_eq!(quantize(2.5), i16::MAX);
/// assert_eq!(quantize(-1.0), -i16::MAX);
/// ```
pub fn quantize(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f64).round() as i16
}

/// Streams `samples` into a mono 16-bit WAV written to `writer`.
///
/// Returns the number of frames written.
pub fn write_samples<W, I>(writer: W, sample_rate: u32, samples: I) -> Result<usize, SynthError>
where
    W: Write + Seek,
    I: IntoIterator<Item = f64>,
{
    let mut wav = WavWriter::new(writer, WavOptions::mono_pcm16(sample_rate).spec())?;
    let mut frames = 0;
    for sample in samples {
        wav.write_sample(quantize(sample))?;
        frames += 1;
    }
    wav.finalize()?;
    Ok(frames)
}

/// Creates (or truncates) the file at `path` and writes `samples` into it.
pub fn write_file<P, I>(path: P, sample_rate: u32, samples: I) -> Result<usize, SynthError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = f64>,
{
    let path = path.as_ref();
    let file = BufWriter::new(File::create(path)?);
    let frames = write_samples(file, sample_rate, samples)?;
    tracing::info!(path = %path.display(), frames, sample_rate, "wrote WAV file");
    Ok(frames)
}
