//! The closed set of waveform shapes and their per-sample formulas.

use crate::error::SynthError;
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

/// Shape of the oscillator output.
///
/// Every shape except `Noise` is a pure function of the phase position
/// `p` in `[0.0, 1.0)` and the peak amplitude `a`:
///
/// | Shape | Formula |
/// |---|---|
/// | `Sine` | `sin(p * 2π) * a` |
/// | `Square` | `a` when `p >= 0.5`, otherwise `-a` |
/// | `Saw` | `(p * 2 - 1) * a` |
/// | `Triangle` | `a - |(p * 2 - 1) * a * 2|` |
///
/// `Noise` ignores the phase and draws uniformly from `[-a, a]`.
///
/// # Examples
///
/// ```
/// use nanosynth::Waveform;
///
/// let kind: Waveform = "triangle".parse().unwrap();
/// assert_eq!(kind, Waveform::Triangle);
/// assert_eq!(kind.at_phase(0.5, 1.0), Some(1.0));
/// assert_eq!(Waveform::Noise.at_phase(0.5, 1.0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    Sine,
    Square,
    Saw,
    Triangle,
    Noise,
}

impl Waveform {
    /// All waveform kinds, in declaration order.
    pub const ALL: [Waveform; 5] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Saw,
        Waveform::Triangle,
        Waveform::Noise,
    ];

    /// Evaluates the shape at `phase` with the given peak amplitude.
    ///
    /// Returns `None` for `Noise`, whose samples come from a random source
    /// rather than the phase.
    pub fn at_phase(self, phase: f64, amplitude: f64) -> Option<f64> {
        let sample = match self {
            Waveform::Sine => (phase * TAU).sin() * amplitude,
            Waveform::Square => {
                if phase >= 0.5 {
                    amplitude
                } else {
                    -amplitude
                }
            }
            Waveform::Saw => (phase * 2.0 - 1.0) * amplitude,
            Waveform::Triangle => amplitude - ((phase * 2.0 - 1.0) * amplitude * 2.0).abs(),
            Waveform::Noise => return None,
        };
        Some(sample)
    }

    /// Returns true if the output depends only on the phase.
    pub fn is_periodic(self) -> bool {
        !matches!(self, Waveform::Noise)
    }

    /// Lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Saw => "saw",
            Waveform::Triangle => "triangle",
            Waveform::Noise => "noise",
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Waveform {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Waveform::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SynthError::UnknownWaveform(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for kind in Waveform::ALL {
            assert_eq!(kind.name().parse::<Waveform>().unwrap(), kind);
        }
        assert_eq!("SINE".parse::<Waveform>().unwrap(), Waveform::Sine);
        assert_eq!(" Saw ".parse::<Waveform>().unwrap(), Waveform::Saw);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "sawtooth".parse::<Waveform>().unwrap_err();
        assert!(matches!(err, SynthError::UnknownWaveform(ref name) if name == "sawtooth"));
        assert!("".parse::<Waveform>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Waveform::Triangle.to_string(), "triangle");
        assert_eq!(format!("{}", Waveform::Noise), "noise");
    }

    #[test]
    fn test_sine_points() {
        assert_eq!(Waveform::Sine.at_phase(0.0, 0.8), Some(0.0));
        let peak = Waveform::Sine.at_phase(0.25, 0.8).unwrap();
        assert!((peak - 0.8).abs() < 1e-12);
        let trough = Waveform::Sine.at_phase(0.75, 0.8).unwrap();
        assert!((trough + 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_square_points() {
        assert_eq!(Waveform::Square.at_phase(0.0, 0.5), Some(-0.5));
        assert_eq!(Waveform::Square.at_phase(0.4999, 0.5), Some(-0.5));
        assert_eq!(Waveform::Square.at_phase(0.5, 0.5), Some(0.5));
        assert_eq!(Waveform::Square.at_phase(0.99, 0.5), Some(0.5));
    }

    #[test]
    fn test_saw_points() {
        assert_eq!(Waveform::Saw.at_phase(0.0, 1.0), Some(-1.0));
        assert_eq!(Waveform::Saw.at_phase(0.5, 1.0), Some(0.0));
        assert_eq!(Waveform::Saw.at_phase(0.75, 1.0), Some(0.5));
    }

    #[test]
    fn test_triangle_points() {
        assert_eq!(Waveform::Triangle.at_phase(0.0, 1.0), Some(-1.0));
        assert_eq!(Waveform::Triangle.at_phase(0.25, 1.0), Some(0.0));
        assert_eq!(Waveform::Triangle.at_phase(0.5, 1.0), Some(1.0));
        assert_eq!(Waveform::Triangle.at_phase(0.75, 1.0), Some(0.0));
    }

    #[test]
    fn test_zero_amplitude_is_silent() {
        for kind in Waveform::ALL.into_iter().filter(|k| k.is_periodic()) {
            for phase in [0.0, 0.25, 0.5, 0.9] {
                assert_eq!(kind.at_phase(phase, 0.0).unwrap().abs(), 0.0);
            }
        }
    }

    #[test]
    fn test_noise_is_not_periodic() {
        assert!(!Waveform::Noise.is_periodic());
        assert_eq!(Waveform::Noise.at_phase(0.3, 1.0), None);
    }
}
