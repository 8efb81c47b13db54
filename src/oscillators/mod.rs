//! Oscillators for sample generation.
//!
//! This module contains the `Waveform` shapes, the `Oscillator` trait, the
//! phase-accumulating `WaveformOscillator`, and `render`, which produces one
//! fresh buffer per call.

mod oscillator;
mod traits;
mod waveform;

pub use oscillator::WaveformOscillator;
pub use traits::Oscillator;
pub use waveform::Waveform;

use crate::SampleBuffer;
use rand::Rng;

/// Number of samples produced for a requested count: truncated toward zero,
/// with negative or NaN counts giving zero.
pub(crate) fn sample_len(sample_count: f64) -> usize {
    sample_count as usize
}

/// Renders one buffer of `waveform` starting from phase zero.
///
/// The number of samples produced is `sample_count` truncated toward zero;
/// negative or NaN counts produce an empty buffer. Phase state lives only for
/// the duration of the call. Only `Waveform::Noise` draws from `rng`, one
/// value per sample.
///
/// # Examples
///
/// ```
/// use nanosynth::{Waveform, render};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let samples = render::<44100, _>(Waveform::Square, 10.9, 440.0, 0.5, &mut rng);
/// assert_eq!(samples.len(), 10);
/// assert!(samples.iter().all(|s| s.abs() == 0.5));
/// ```
pub fn render<const SAMPLE_RATE: u32, R: Rng>(
    waveform: Waveform,
    sample_count: f64,
    frequency: f64,
    amplitude: f64,
    rng: &mut R,
) -> SampleBuffer {
    let count = sample_len(sample_count);
    tracing::trace!(%waveform, count, frequency, amplitude, "rendering segment");
    WaveformOscillator::<SAMPLE_RATE, _>::new(waveform, frequency, amplitude, rng)
        .take_buffer(count)
}
