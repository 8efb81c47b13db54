//! Phase-accumulating oscillator over every `Waveform` shape.

use super::{Oscillator, Waveform};
use crate::core::Pitched;
use crate::noise::WhiteNoise;
use crate::{AudioSignal, SampleBuffer, Signal};
use rand::Rng;

/// An oscillator that renders any `Waveform` at a fixed sample rate.
///
/// Each sample is evaluated at the current phase, after which the phase
/// advances by `frequency / SAMPLE_RATE` and wraps back into `[0.0, 1.0)`
/// with a single subtraction. The frequency is expected to stay below the
/// sample rate so one subtraction is always enough.
///
/// `Noise` samples are drawn from the supplied RNG; the other shapes never
/// touch it.
///
/// # Type Parameters
///
/// * `SAMPLE_RATE` - Sample rate in Hz (e.g., 44100 for CD quality)
/// * `R` - Random source for `Waveform::Noise`
pub struct WaveformOscillator<const SAMPLE_RATE: u32, R: Rng = rand::rngs::ThreadRng> {
    waveform: Waveform,
    /// Current phase of the oscillator (0.0 to 1.0)
    phase: f64,
    /// Phase increment per sample (frequency / sample_rate)
    phase_increment: f64,
    amplitude: f64,
    noise: WhiteNoise<R>,
}

impl<const SAMPLE_RATE: u32, R: Rng> WaveformOscillator<SAMPLE_RATE, R> {
    /// Creates a new oscillator starting at phase zero.
    ///
    /// # Arguments
    ///
    /// * `waveform` - Shape to render
    /// * `frequency` - Frequency in Hz; zero holds the phase at 0.0
    /// * `amplitude` - Peak amplitude
    /// * `rng` - Random source for noise; pass `&mut rng` to keep using it afterwards
    ///
    /// # Examples
    ///
    /// ```
    /// use nanosynth::{Signal, Waveform, WaveformOscillator};
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    /// let mut osc = WaveformOscillator::<44100, _>::new(Waveform::Square, 441.0, 0.5, &mut rng);
    /// assert_eq!(osc.next_sample(), -0.5);
    /// ```
    pub fn new(waveform: Waveform, frequency: f64, amplitude: f64, rng: R) -> Self {
        Self {
            waveform,
            phase: 0.0,
            phase_increment: frequency / SAMPLE_RATE as f64,
            amplitude,
            noise: WhiteNoise::with_rng(amplitude, rng),
        }
    }

    /// Returns the waveform shape.
    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Returns the current phase in `[0.0, 1.0)`.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Returns the peak amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Sets the peak amplitude.
    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.amplitude = amplitude;
        self.noise.set_amplitude(amplitude);
    }

    /// Renders `count` samples into a new buffer.
    pub fn take_buffer(&mut self, count: usize) -> SampleBuffer {
        let mut buffer = vec![0.0; count];
        self.process(&mut buffer);
        buffer
    }
}

impl<const SAMPLE_RATE: u32, R: Rng> Signal for WaveformOscillator<SAMPLE_RATE, R> {
    fn next_sample(&mut self) -> f64 {
        let sample = match self.waveform.at_phase(self.phase, self.amplitude) {
            Some(sample) => sample,
            None => self.noise.next_sample(),
        };

        // Increment phase and wrap to [0.0, 1.0)
        self.phase += self.phase_increment;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        sample
    }
}

impl<const SAMPLE_RATE: u32, R: Rng> AudioSignal<SAMPLE_RATE>
    for WaveformOscillator<SAMPLE_RATE, R>
{
}

impl<const SAMPLE_RATE: u32, R: Rng> Pitched for WaveformOscillator<SAMPLE_RATE, R> {
    fn set_frequency(&mut self, frequency: f64) {
        self.phase_increment = frequency / SAMPLE_RATE as f64;
    }

    fn frequency(&self) -> f64 {
        self.phase_increment * SAMPLE_RATE as f64
    }
}

impl<const SAMPLE_RATE: u32, R: Rng> Oscillator for WaveformOscillator<SAMPLE_RATE, R> {
    fn reset(&mut self) {
        self.phase = 0.0;
    }
}
