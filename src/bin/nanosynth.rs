//! Renders a chorus of detuned voices to a WAV file.
//!
//! ```text
//! nanosynth sine 440.0 0.5
//! nanosynth noise 220 0.2 --seed 7 --output noise.wav
//! ```

use anyhow::{Context, Result, ensure};
use clap::Parser;
use nanosynth::sequence::DETUNE_RATIOS;
use nanosynth::{DEFAULT_OUTPUT, DEFAULT_SAMPLE_RATE, SEGMENT_SECONDS, SynthSettings, Waveform};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Synthesize a short waveform and layer it into a chorus
#[derive(Parser, Debug)]
#[command(name = "nanosynth")]
#[command(about = "Render detuned waveform voices to a mono WAV file", long_about = None)]
struct Args {
    /// Waveform shape: sine, square, saw, triangle, or noise
    waveform: Waveform,

    /// Base frequency (Hz); 440.0 is the A above middle C
    frequency: f64,

    /// Peak amplitude (0.0-1.0); larger values clip
    amplitude: f64,

    /// Output WAV file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Seed for noise and voice shuffling
    #[arg(short, long)]
    seed: Option<u64>,

    /// Length of one voice segment (seconds)
    #[arg(long, default_value_t = SEGMENT_SECONDS)]
    seconds: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    // The highest voice must advance less than one full cycle per sample
    let highest_ratio = DETUNE_RATIOS.iter().copied().fold(0.0, f64::max);
    let max_frequency = DEFAULT_SAMPLE_RATE as f64 / highest_ratio;
    ensure!(
        args.frequency >= 0.0 && args.frequency < max_frequency,
        "frequency must be at least 0 and below {max_frequency} Hz"
    );
    ensure!(args.amplitude >= 0.0, "amplitude must not be negative");
    ensure!(args.seconds >= 0.0, "seconds must not be negative");

    let settings =
        SynthSettings::new(args.waveform, args.frequency, args.amplitude).with_seconds(args.seconds);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::info!(
        waveform = %settings.waveform,
        frequency = settings.frequency,
        amplitude = settings.amplitude,
        seed = ?args.seed,
        "rendering"
    );

    let composition = settings.composition::<DEFAULT_SAMPLE_RATE, _>(&mut rng);
    let frames = nanosynth::wav::write_file(
        &args.output,
        composition.sample_rate(),
        composition.samples(&mut rng),
    )
    .with_context(|| format!("Failed to write {}", args.output.display()))?;

    tracing::info!(frames, output = %args.output.display(), "done");
    Ok(())
}
