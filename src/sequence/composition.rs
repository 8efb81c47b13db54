//! Pre-rendered segments of the chorus pattern.

use super::round::Rounds;
use super::{DETUNE_RATIOS, GAP_RATIO, ROUNDS, TAIL_RATIO, VOICE_COUNT};
use crate::oscillators::sample_len;
use crate::{Oscillator, Pitched, SampleBuffer, Waveform, WaveformOscillator};
use rand::Rng;

/// The eight segment renders behind a composite sequence.
///
/// Four voices play the base waveform detuned by `DETUNE_RATIOS`, each
/// `base_sample_count` long. One gap (half that length) follows every voice,
/// and two tails (one and a half times that length) close each round. Gap and
/// tails are rendered with zero frequency and zero amplitude, so they are
/// silent and only their length matters.
///
/// Nothing random happens after construction except the per-round shuffle,
/// which is drawn lazily by `rounds`.
#[derive(Debug, Clone)]
pub struct Composition<const SAMPLE_RATE: u32> {
    waveform: Waveform,
    voices: [SampleBuffer; VOICE_COUNT],
    gap: SampleBuffer,
    tails: [SampleBuffer; 2],
    rounds: usize,
}

impl<const SAMPLE_RATE: u32> Composition<SAMPLE_RATE> {
    /// Renders every segment, drawing from `rng` in a fixed order:
    /// voices lowest to highest, then the gap, then both tails.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanosynth::{Composition, Waveform};
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    /// let composition = Composition::<44100>::new(Waveform::Sine, 4410.0, 440.0, 0.5, &mut rng);
    /// assert_eq!(composition.round_len(), 39_690);
    /// assert_eq!(composition.len(), 39_690_000);
    /// ```
    pub fn new<R: Rng>(
        waveform: Waveform,
        base_sample_count: f64,
        base_frequency: f64,
        amplitude: f64,
        rng: &mut R,
    ) -> Self {
        let frequencies = DETUNE_RATIOS.map(|ratio| ratio * base_frequency);
        tracing::debug!(
            %waveform,
            base_sample_count,
            ?frequencies,
            amplitude,
            "preparing composition"
        );

        // One oscillator, reset before each voice, keeps the rng draws in segment order
        let mut osc = WaveformOscillator::<SAMPLE_RATE, _>::new(waveform, 0.0, amplitude, rng);
        let voices = frequencies.map(|frequency| {
            osc.reset();
            osc.set_frequency(frequency);
            osc.take_buffer(sample_len(base_sample_count))
        });

        osc.reset();
        osc.set_frequency(0.0);
        osc.set_amplitude(0.0);
        let gap = osc.take_buffer(sample_len(base_sample_count * GAP_RATIO));
        let tails = [(); 2].map(|_| osc.take_buffer(sample_len(base_sample_count * TAIL_RATIO)));

        Self {
            waveform,
            voices,
            gap,
            tails,
            rounds: ROUNDS,
        }
    }

    /// Overrides the number of rounds (`ROUNDS` by default).
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Sample rate the segments were rendered at, in Hz.
    pub const fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    /// The four detuned voice buffers, lowest frequency first.
    pub fn voices(&self) -> &[SampleBuffer; VOICE_COUNT] {
        &self.voices
    }

    /// The silent gap played after every voice.
    pub fn gap(&self) -> &[f64] {
        &self.gap
    }

    /// The two silent tails closing every round.
    pub fn tails(&self) -> [&[f64]; 2] {
        [&self.tails[0], &self.tails[1]]
    }

    pub fn round_count(&self) -> usize {
        self.rounds
    }

    /// Number of samples in one round.
    pub fn round_len(&self) -> usize {
        let voices: usize = self.voices.iter().map(Vec::len).sum();
        let tails: usize = self.tails.iter().map(Vec::len).sum();
        voices + VOICE_COUNT * self.gap.len() + tails
    }

    /// Number of samples in the whole composite.
    pub fn len(&self) -> usize {
        self.rounds * self.round_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazily produces each round, drawing one shuffle per round from `rng`.
    pub fn rounds<R: Rng>(&self, rng: R) -> Rounds<'_, SAMPLE_RATE, R> {
        Rounds::new(self, rng)
    }

    /// Lazily produces the whole composite, one sample at a time.
    pub fn samples<'a, R: Rng + 'a>(&'a self, rng: R) -> impl Iterator<Item = f64> + 'a {
        self.rounds(rng).flat_map(|round| round.into_samples())
    }

    /// Materializes the whole composite into one buffer.
    ///
    /// Produces exactly what `samples` yields for the same RNG state.
    pub fn render<R: Rng>(&self, rng: R) -> SampleBuffer {
        let mut out = Vec::with_capacity(self.len());
        for round in self.rounds(rng) {
            round.extend_into(&mut out);
        }
        out
    }
}
