//! Core signal types and traits.
//!
//! - `Signal` trait for all sample sources
//! - `AudioSignal` trait for sample-rate-aware signals
//! - `Pitched` trait for sources with a frequency

mod audio;
mod signal;

pub use audio::AudioSignal;
pub use signal::{Pitched, Signal};
