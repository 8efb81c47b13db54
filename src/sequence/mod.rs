//! Chorus-like composite sequences built from detuned voices and silence.
//!
//! A composite is `ROUNDS` repetitions of one pattern: the four voices in a
//! freshly shuffled order, each followed by a short silent gap, then two
//! longer silent tails. The shuffle is the only thing that varies between
//! rounds.

mod composition;
mod round;

pub use composition::Composition;
pub use round::{Round, Rounds, SEGMENTS_PER_ROUND};

use crate::{SampleBuffer, Waveform};
use rand::Rng;

/// Number of detuned voices per round.
pub const VOICE_COUNT: usize = 4;

/// Frequency ratios of the voices relative to the base frequency.
pub const DETUNE_RATIOS: [f64; VOICE_COUNT] = [0.76, 0.9, 1.1, 1.4];

/// Length of the gap after each voice, relative to the base sample count.
pub const GAP_RATIO: f64 = 0.5;

/// Length of each closing tail, relative to the base sample count.
pub const TAIL_RATIO: f64 = 1.5;

/// Number of rounds in a composite.
pub const ROUNDS: usize = 1000;

/// Builds the full composite sequence in memory.
///
/// Equivalent to `Composition::new(..).render(rng)`. The output holds
/// `ROUNDS * (4 * (n + gap) + 2 * tail)` samples, where `n`, `gap`, and `tail`
/// are the truncated lengths of `base_sample_count`, `base_sample_count *
/// GAP_RATIO`, and `base_sample_count * TAIL_RATIO`. Use
/// `Composition::samples` to stream it instead.
///
/// # Examples
///
/// ```
/// use nanosynth::{Waveform, compose};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let samples = compose::<44100, _>(Waveform::Square, 10.0, 440.0, 0.5, &mut rng);
/// assert_eq!(samples.len(), 1000 * (4 * (10 + 5) + 15 + 15));
/// ```
pub fn compose<const SAMPLE_RATE: u32, R: Rng>(
    waveform: Waveform,
    base_sample_count: f64,
    base_frequency: f64,
    amplitude: f64,
    rng: &mut R,
) -> SampleBuffer {
    Composition::<SAMPLE_RATE>::new(waveform, base_sample_count, base_frequency, amplitude, rng)
        .render(rng)
}
