//! Nanosynth - A tiny waveform synthesizer
//!
//! This library renders short monophonic buffers of classic oscillator
//! shapes and layers detuned copies of them, with silent gaps, into a long
//! chorus-like sequence that can be written out as a WAV file.
//!
//! ```
//! use nanosynth::{SynthSettings, Waveform};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let settings = SynthSettings::new(Waveform::Triangle, 440.0, 0.5);
//! let composition = settings.composition::<44100, _>(&mut rng);
//! let first_round: Vec<f64> = composition.rounds(&mut rng).next().unwrap().into_samples().collect();
//! assert_eq!(first_round.len(), composition.round_len());
//! ```

pub mod core;
pub mod error;
pub mod noise;
pub mod oscillators;
pub mod sequence;
pub mod settings;
#[cfg(feature = "wav")]
pub mod wav;

// Re-export commonly used types at the crate root
pub use crate::core::{AudioSignal, Pitched, Signal};
pub use error::SynthError;
pub use noise::WhiteNoise;
pub use oscillators::{Oscillator, Waveform, WaveformOscillator, render};
pub use sequence::{Composition, Round, Rounds, compose};
pub use settings::{DEFAULT_OUTPUT, DEFAULT_SAMPLE_RATE, SEGMENT_SECONDS, SynthSettings};

/// An ordered buffer of samples at uniform time steps.
pub type SampleBuffer = Vec<f64>;
