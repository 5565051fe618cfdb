//! Injectable randomness for the completeness ideal band.
//!
//! Answers inside the ideal length band score somewhere in 85–100. Where in
//! that band is decided by a `BandJitter`, so tests and reproducible runs can
//! pin it down while interactive use can still vary.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of the bonus added inside the completeness ideal band.
pub trait BandJitter: Send + Sync {
    /// A value in `[0, span)` for the given answer text.
    fn bonus(&self, text: &str, span: f64) -> f64;
}

/// Always zero: the ideal band collapses to its lower bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl BandJitter for NoJitter {
    fn bonus(&self, _text: &str, _span: f64) -> f64 {
        0.0
    }
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a, continuing from `state`. Stable across toolchains, so
/// saved reports stay comparable.
fn fnv1a(bytes: &[u8], state: u64) -> u64 {
    bytes
        .iter()
        .fold(state, |hash, &b| (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME))
}

/// Pseudo-random bonus seeded from the answer text.
///
/// The same text (and salt) always produces the same bonus, so repeated
/// evaluations of one answer agree while different answers still spread
/// across the band.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeededJitter {
    salt: u64,
}

impl SeededJitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_salt(salt: u64) -> Self {
        Self { salt }
    }

    fn seed_for(&self, text: &str) -> u64 {
        fnv1a(&self.salt.to_le_bytes(), fnv1a(text.as_bytes(), FNV_OFFSET_BASIS))
    }
}

impl BandJitter for SeededJitter {
    fn bonus(&self, text: &str, span: f64) -> f64 {
        if span <= 0.0 {
            return 0.0;
        }
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed_for(text));
        rng.gen_range(0.0..span)
    }
}

/// Fresh randomness on every call. Scores are not reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyJitter;

impl BandJitter for EntropyJitter {
    fn bonus(&self, _text: &str, span: f64) -> f64 {
        if span <= 0.0 {
            return 0.0;
        }
        rand::thread_rng().gen_range(0.0..span)
    }
}

/// Configurable choice of jitter source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JitterMode {
    None,
    #[default]
    Seeded,
    Random,
}

impl JitterMode {
    pub fn build(self) -> Box<dyn BandJitter> {
        match self {
            JitterMode::None => Box::new(NoJitter),
            JitterMode::Seeded => Box::new(SeededJitter::new()),
            JitterMode::Random => Box::new(EntropyJitter),
        }
    }
}

impl fmt::Display for JitterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JitterMode::None => write!(f, "none"),
            JitterMode::Seeded => write!(f, "seeded"),
            JitterMode::Random => write!(f, "random"),
        }
    }
}

impl FromStr for JitterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "off" => Ok(JitterMode::None),
            "seeded" => Ok(JitterMode::Seeded),
            "random" => Ok(JitterMode::Random),
            other => Err(format!("unknown jitter mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_jitter_is_zero() {
        assert_eq!(NoJitter.bonus("anything", 15.0), 0.0);
    }

    #[test]
    fn seeded_jitter_is_stable_per_text() {
        let jitter = SeededJitter::new();
        let a = jitter.bonus("the same answer", 15.0);
        let b = jitter.bonus("the same answer", 15.0);
        assert_eq!(a, b);
        assert!((0.0..15.0).contains(&a));
    }

    #[test]
    fn fnv1a_matches_reference_vectors() {
        assert_eq!(fnv1a(b"", FNV_OFFSET_BASIS), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a(b"a", FNV_OFFSET_BASIS), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(fnv1a(b"foobar", FNV_OFFSET_BASIS), 0x8594_4171_f739_67e8);
    }

    #[test]
    fn seed_is_fixed_for_a_given_text_and_salt() {
        let jitter = SeededJitter::new();
        let expected = fnv1a(&0u64.to_le_bytes(), fnv1a(b"text", FNV_OFFSET_BASIS));
        assert_eq!(jitter.seed_for("text"), expected);
    }

    #[test]
    fn seeded_jitter_varies_across_texts() {
        let jitter = SeededJitter::new();
        let values: Vec<f64> = (0..20)
            .map(|i| jitter.bonus(&format!("answer number {i}"), 15.0))
            .collect();
        assert!(values.iter().any(|v| (v - values[0]).abs() > f64::EPSILON));
    }

    #[test]
    fn salt_changes_the_sequence() {
        let a = SeededJitter::with_salt(1).bonus("text", 1000.0);
        let b = SeededJitter::with_salt(2).bonus("text", 1000.0);
        assert_ne!(a, b);
    }

    #[test]
    fn entropy_jitter_stays_in_range() {
        for _ in 0..100 {
            let v = EntropyJitter.bonus("x", 15.0);
            assert!((0.0..15.0).contains(&v));
        }
        assert_eq!(EntropyJitter.bonus("x", 0.0), 0.0);
    }

    #[test]
    fn mode_parse_and_display() {
        assert_eq!("seeded".parse::<JitterMode>().unwrap(), JitterMode::Seeded);
        assert_eq!("OFF".parse::<JitterMode>().unwrap(), JitterMode::None);
        assert!("chaos".parse::<JitterMode>().is_err());
        assert_eq!(JitterMode::Random.to_string(), "random");
    }
}
