//! Invocation parameters and fixed rendering constants.

use crate::{Composition, Waveform};
use rand::Rng;

/// Sample rate used when none is chosen explicitly, in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Length of one voice segment, in seconds.
pub const SEGMENT_SECONDS: f64 = 0.1;

/// File written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "mysound.wav";

/// Parameters of one synthesis run.
///
/// # Examples
///
/// ```
/// use nanosynth::{SynthSettings, Waveform};
///
/// let settings = SynthSettings::new(Waveform::Sine, 440.0, 0.5);
/// assert_eq!(settings.base_sample_count(44100), 4410.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthSettings {
    pub waveform: Waveform,
    /// Base frequency in Hz
    pub frequency: f64,
    /// Peak amplitude; values above 1.0 clip when quantized
    pub amplitude: f64,
    /// Length of one voice segment in seconds
    pub seconds: f64,
}

impl SynthSettings {
    /// Creates settings with the default segment length.
    pub fn new(waveform: Waveform, frequency: f64, amplitude: f64) -> Self {
        Self {
            waveform,
            frequency,
            amplitude,
            seconds: SEGMENT_SECONDS,
        }
    }

    /// Sets the voice segment length in seconds.
    pub fn with_seconds(mut self, seconds: f64) -> Self {
        self.seconds = seconds;
        self
    }

    /// Number of samples in one voice segment, before truncation.
    pub fn base_sample_count(&self, sample_rate: u32) -> f64 {
        sample_rate as f64 * self.seconds
    }

    /// Renders the segments of the composite described by these settings.
    pub fn composition<const SAMPLE_RATE: u32, R: Rng>(
        &self,
        rng: &mut R,
    ) -> Composition<SAMPLE_RATE> {
        Composition::new(
            self.waveform,
            self.base_sample_count(SAMPLE_RATE),
            self.frequency,
            self.amplitude,
            rng,
        )
    }
}
