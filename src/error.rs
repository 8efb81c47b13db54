//! Error type for the crate.
//!
//! Sample generation never fails; errors only come from parsing user input
//! and from writing audio files.

/// Errors produced at the crate's input and output boundaries.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    #[error("unknown waveform `{0}` (expected sine, square, saw, triangle, or noise)")]
    UnknownWaveform(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "wav")]
    #[error("failed to write WAV data: {0}")]
    Wav(#[from] hound::Error),
}
