//! Core trait definitions for oscillators.

use crate::core::Pitched;

/// Oscillators are pitched signals with resettable phase.
///
/// All oscillators have controllable frequency (via `Pitched`) and can
/// return to the start of their cycle.
pub trait Oscillator: Pitched {
    /// Resets the oscillator to its initial state.
    ///
    /// This puts the phase back at zero; amplitude and frequency are kept.
    fn reset(&mut self);
}
