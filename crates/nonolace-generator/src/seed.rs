//! Generation seeds.
//!
//! Every generator run is driven by an explicit [`PuzzleSeed`] rather than
//! a process-wide RNG, so the same (options, seed) pair always reproduces
//! the same puzzle and no state is shared between concurrent calls.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{RngCore as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Errors from parsing a seed's hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 hex characters.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the supplied string.
        len: usize,
    },
    /// A character outside `[0-9a-fA-F]`.
    #[display("invalid seed character {c:?}")]
    InvalidCharacter {
        /// The offending character.
        c: char,
    },
}

/// A 256-bit generation seed.
///
/// Seeds display and parse as 64 lowercase hex characters, which makes
/// them easy to log, share, and replay.
///
/// # Examples
///
/// ```
/// use nonolace_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()?;
/// assert_eq!(
///     seed.to_string(),
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
/// );
/// # Ok::<(), nonolace_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh random seed from the thread RNG.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from arbitrary text via SHA-256.
    ///
    /// Useful for human-memorable seed phrases.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonolace_generator::PuzzleSeed;
    ///
    /// let a = PuzzleSeed::from_text("daily puzzle 2026-08-29");
    /// let b = PuzzleSeed::from_text("daily puzzle 2026-08-29");
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self(Sha256::digest(text.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Unfolds the seed into its deterministic RNG.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 64 {
            return Err(ParseSeedError::InvalidLength {
                len: s.chars().count(),
            });
        }
        let mut bytes = [0; 32];
        let mut chars = s.chars();
        for byte in &mut bytes {
            let mut value = 0;
            for _ in 0..2 {
                let c = chars.next().unwrap_or_default();
                let nibble = c
                    .to_digit(16)
                    .ok_or(ParseSeedError::InvalidCharacter { c })?;
                value = (value << 4) | nibble;
            }
            #[expect(clippy::cast_possible_truncation)]
            {
                *byte = value as u8;
            }
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng as _;

    use super::*;

    const HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_hex_round_trip() {
        let seed: PuzzleSeed = HEX.parse().unwrap();
        assert_eq!(seed.to_string(), HEX);
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert_eq!(
            "abcd".parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidLength { len: 4 })
        );
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let input = format!("g{}", &HEX[1..]);
        assert_eq!(
            input.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidCharacter { c: 'g' })
        );
    }

    #[test]
    fn test_from_text_is_deterministic() {
        let a = PuzzleSeed::from_text("hello");
        let b = PuzzleSeed::from_text("hello");
        let c = PuzzleSeed::from_text("world");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_rng_stream_is_deterministic() {
        let seed: PuzzleSeed = HEX.parse().unwrap();
        let mut first = seed.rng();
        let mut second = seed.rng();
        for _ in 0..16 {
            let a: u64 = first.random();
            let b: u64 = second.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_random_seeds_differ() {
        // Astronomically unlikely to collide.
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }
}
