//! One repetition of the composite pattern and the lazy iterator over them.

use super::{Composition, VOICE_COUNT};
use rand::Rng;
use rand::seq::SliceRandom;

/// Number of segments in one round: each voice followed by the gap, then both tails.
pub const SEGMENTS_PER_ROUND: usize = VOICE_COUNT * 2 + 2;

/// One round of a `Composition`.
///
/// A round borrows the composition's pre-rendered buffers and lists them in
/// playing order: `voice, gap, voice, gap, voice, gap, voice, gap, tail, tail`,
/// where the voice order is a uniformly random permutation.
#[derive(Debug, Clone, Copy)]
pub struct Round<'c> {
    order: [usize; VOICE_COUNT],
    segments: [&'c [f64]; SEGMENTS_PER_ROUND],
}

impl<'c> Round<'c> {
    fn new<const SAMPLE_RATE: u32>(
        composition: &'c Composition<SAMPLE_RATE>,
        order: [usize; VOICE_COUNT],
    ) -> Self {
        let voices = composition.voices();
        let gap = composition.gap();
        let [tail1, tail2] = composition.tails();
        let empty: &'c [f64] = &[];
        let mut segments = [empty; SEGMENTS_PER_ROUND];
        for (slot, &voice) in order.iter().enumerate() {
            segments[slot * 2] = voices[voice].as_slice();
            segments[slot * 2 + 1] = gap;
        }
        segments[SEGMENTS_PER_ROUND - 2] = tail1;
        segments[SEGMENTS_PER_ROUND - 1] = tail2;
        Self { order, segments }
    }

    /// Indices into `Composition::voices` in the order they play this round.
    pub fn order(&self) -> [usize; VOICE_COUNT] {
        self.order
    }

    /// The segments of this round in playing order.
    pub fn segments(&self) -> &[&'c [f64]; SEGMENTS_PER_ROUND] {
        &self.segments
    }

    /// The voice buffers of this round in playing order.
    pub fn voices(&self) -> impl Iterator<Item = &'c [f64]> + '_ {
        self.segments.iter().step_by(2).take(VOICE_COUNT).copied()
    }

    /// Total number of samples in this round.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|segment| segment.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends every sample of this round to `out`.
    pub fn extend_into(&self, out: &mut Vec<f64>) {
        for segment in self.segments {
            out.extend_from_slice(segment);
        }
    }

    /// Iterates the samples of this round in order.
    pub fn into_samples(self) -> impl Iterator<Item = f64> + 'c {
        self.segments
            .into_iter()
            .flat_map(|segment| segment.iter().copied())
    }
}

/// Lazily produces the rounds of a `Composition`.
///
/// One shuffle is drawn from the RNG per round, when that round is produced.
/// Starting a new `Rounds` from a generator in the same state yields the same
/// sequence, so the composite can be replayed without keeping it in memory.
pub struct Rounds<'c, const SAMPLE_RATE: u32, R: Rng> {
    composition: &'c Composition<SAMPLE_RATE>,
    rng: R,
    remaining: usize,
}

impl<'c, const SAMPLE_RATE: u32, R: Rng> Rounds<'c, SAMPLE_RATE, R> {
    pub(super) fn new(composition: &'c Composition<SAMPLE_RATE>, rng: R) -> Self {
        Self {
            composition,
            rng,
            remaining: composition.round_count(),
        }
    }
}

impl<'c, const SAMPLE_RATE: u32, R: Rng> Iterator for Rounds<'c, SAMPLE_RATE, R> {
    type Item = Round<'c>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let mut order = [0, 1, 2, 3];
        order.shuffle(&mut self.rng);
        Some(Round::new(self.composition, order))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const SAMPLE_RATE: u32, R: Rng> ExactSizeIterator for Rounds<'_, SAMPLE_RATE, R> {}
