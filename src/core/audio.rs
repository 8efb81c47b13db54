//! Audio signal trait for sample-rate-aware signals.

use crate::Signal;

/// A signal rendered at a fixed sample rate.
///
/// The sample rate is encoded as a const generic parameter, so buffers
/// rendered at different rates cannot be accidentally spliced together.
///
/// # Type Parameters
///
/// * `SAMPLE_RATE` - Sample rate in Hz (e.g., 44100 for CD quality)
///
/// # Examples
///
/// ```
/// use nanosynth::{AudioSignal, Waveform, WaveformOscillator};
///
/// let osc = WaveformOscillator::<44100, _>::new(Waveform::Saw, 440.0, 1.0, rand::thread_rng());
/// assert_eq!(osc.sample_rate(), 44100.0);
/// ```
pub trait AudioSignal<const SAMPLE_RATE: u32>: Signal {
    /// Gets the sample rate at which this signal is generated, in Hz.
    fn sample_rate(&self) -> f64 {
        SAMPLE_RATE as f64
    }
}
