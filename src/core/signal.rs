//! Core signal trait and pitch control.
//!
//! This module provides the fundamental `Signal` trait that represents
//! anything producing a stream of samples, plus `Pitched` for sources with a
//! tunable frequency.

/// Common interface for all sample sources.
///
/// The trait provides two fundamental operations:
/// - Single sample generation via `next_sample()`
/// - Batch generation via `process()`
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value, nominally within the source's peak amplitude
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element, in order.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// Minimal trait for anything with a controllable pitch.
///
/// # Examples
///
/// ```
/// use nanosynth::{Pitched, Waveform, WaveformOscillator};
///
/// let mut osc = WaveformOscillator::<44100, _>::new(Waveform::Sine, 11025.0, 1.0, rand::thread_rng());
/// assert_eq!(osc.frequency(), 11025.0);
///
/// osc.set_frequency(22050.0);
/// assert_eq!(osc.frequency(), 22050.0);
/// ```
pub trait Pitched {
    /// Sets the frequency of the signal in Hz.
    fn set_frequency(&mut self, freq: f64);

    /// Gets the current frequency of the signal in Hz.
    fn frequency(&self) -> f64;
}
