use nanosynth::sequence::{DETUNE_RATIOS, ROUNDS};
use nanosynth::{Composition, SynthSettings, Waveform, compose, render};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_sine_chorus_end_to_end() {
    let mut rng = StdRng::seed_from_u64(440);
    let composition = Composition::<44100>::new(Waveform::Sine, 4410.0, 440.0, 0.5, &mut rng);

    let expected_len = 1000 * (4 * (4410 + 2205) + 6615 + 6615);
    assert_eq!(composition.len(), expected_len);

    let mut count = 0usize;
    let mut in_range = true;
    for sample in composition.samples(&mut rng) {
        count += 1;
        in_range &= (-0.5..=0.5).contains(&sample);
    }
    assert_eq!(count, expected_len);
    assert!(in_range, "every sample should stay within the amplitude");
}

#[test]
fn test_default_settings_match_fixed_constants() {
    let settings = SynthSettings::new(Waveform::Saw, 440.0, 0.5);
    let composition = settings.composition::<44100, _>(&mut StdRng::seed_from_u64(0));
    assert_eq!(composition.voices()[0].len(), 4410);
    assert_eq!(composition.round_count(), ROUNDS);
}

#[test]
fn test_each_round_permutes_the_voices() {
    let mut rng = StdRng::seed_from_u64(1);
    let composition = Composition::<44100>::new(Waveform::Triangle, 100.0, 440.0, 0.8, &mut rng);

    let mut orders = std::collections::HashSet::new();
    for round in composition.rounds(&mut rng) {
        let mut voices: Vec<&[f64]> = round.voices().collect();
        let mut expected: Vec<&[f64]> = composition.voices().iter().map(Vec::as_slice).collect();
        voices.sort_by(|a, b| a.partial_cmp(b).unwrap());
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(voices, expected);
        orders.insert(round.order());
    }
    assert!(orders.len() > 1);
}

#[test]
fn test_compose_voice_segments_are_direct_renders() {
    let base = 32.0;
    let samples = compose::<44100, _>(Waveform::Saw, base, 500.0, 1.0, &mut StdRng::seed_from_u64(2));

    let voices: Vec<Vec<f64>> = DETUNE_RATIOS
        .iter()
        .map(|ratio| render::<44100, _>(Waveform::Saw, base, ratio * 500.0, 1.0, &mut StdRng::seed_from_u64(0)))
        .collect();

    let round_len = 4 * (32 + 16) + 48 + 48;
    for round in samples.chunks(round_len).take(10) {
        for slot in 0..4 {
            let start = slot * 48;
            let segment = &round[start..start + 32];
            assert!(voices.iter().any(|voice| voice.as_slice() == segment));
        }
    }
}

#[test]
fn test_noise_chorus_reproducible() {
    let a = compose::<44100, _>(Waveform::Noise, 20.0, 440.0, 0.3, &mut StdRng::seed_from_u64(9));
    let b = compose::<44100, _>(Waveform::Noise, 20.0, 440.0, 0.3, &mut StdRng::seed_from_u64(9));
    assert_eq!(a, b);
    assert!(a.iter().all(|s| (-0.3..=0.3).contains(s)));
}
