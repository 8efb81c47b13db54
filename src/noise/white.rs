//! White noise generator implementation.

use crate::Signal;
use rand::Rng;

/// A white noise generator.
///
/// Each sample is drawn independently and uniformly from
/// `[-amplitude, amplitude]`. The random source is supplied by the caller so
/// that renders can be reproduced from a seed; pass `&mut rng` to share one
/// stream between several consumers.
pub struct WhiteNoise<R: Rng = rand::rngs::ThreadRng> {
    /// Peak amplitude (always non-negative)
    amplitude: f64,
    /// Random number generator
    rng: R,
}

impl WhiteNoise<rand::rngs::ThreadRng> {
    /// Creates a new white noise generator with the default ThreadRng.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanosynth::{Signal, WhiteNoise};
    ///
    /// let mut noise = WhiteNoise::new(0.5);
    /// let sample = noise.next_sample();
    /// assert!((-0.5..=0.5).contains(&sample));
    /// ```
    pub fn new(amplitude: f64) -> Self {
        Self::with_rng(amplitude, rand::thread_rng())
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a new white noise generator with a custom RNG.
    ///
    /// # Arguments
    ///
    /// * `amplitude` - Peak amplitude; the sign is ignored
    /// * `rng` - Random number generator to draw from
    ///
    /// # Examples
    ///
    /// ```
    /// use nanosynth::{Signal, WhiteNoise};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = WhiteNoise::with_rng(1.0, rng);
    /// let sample = noise.next_sample();
    /// ```
    pub fn with_rng(amplitude: f64, rng: R) -> Self {
        Self {
            amplitude: amplitude.abs(),
            rng,
        }
    }

    /// Returns the peak amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Sets the peak amplitude; the sign is ignored.
    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.amplitude = amplitude.abs();
    }
}

impl<R: Rng> Signal for WhiteNoise<R> {
    fn next_sample(&mut self) -> f64 {
        // A zero amplitude still draws, so stream consumption does not depend on loudness
        self.rng.gen_range(-self.amplitude..=self.amplitude)
    }
}
