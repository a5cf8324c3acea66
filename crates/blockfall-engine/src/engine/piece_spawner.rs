use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{color::ColorId, piece::Piece, shape::ShapeKind};

/// Seed for deterministic piece spawning.
///
/// A 128-bit seed, written as 32 hexadecimal characters. The same seed always
/// yields the same sequence of shapes and colors, so a game can be replayed.
///
/// # Example
///
/// ```
/// use blockfall_engine::{PieceSpawner, SpawnSeed};
///
/// let seed: SpawnSeed = "0123456789abcdef0123456789abcdef".parse().unwrap();
/// let mut a = PieceSpawner::with_seed(seed);
/// let mut b = PieceSpawner::with_seed(seed);
/// assert_eq!(a.spawn(), b.spawn());
/// assert_eq!(seed.to_string(), "0123456789abcdef0123456789abcdef");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnSeed([u8; 16]);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid hex seed: expected 32 hexadecimal characters, got {input:?}")]
pub struct ParseSpawnSeedError {
    #[error(not(source))]
    input: String,
}

impl SpawnSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl fmt::Display for SpawnSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for SpawnSeed {
    type Err = ParseSpawnSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseSpawnSeedError {
            input: s.to_owned(),
        };
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(error());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| error())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for SpawnSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SpawnSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random seeds with `rng.random()`.
impl Distribution<SpawnSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SpawnSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        SpawnSeed(seed)
    }
}

/// Source of new pieces.
///
/// Every spawn draws a shape uniformly from the 7 catalog entries and, independently,
/// a color uniformly from `1..=7`.
#[derive(Debug, Clone)]
pub struct PieceSpawner {
    rng: Pcg32,
    seed: SpawnSeed,
}

impl Default for PieceSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceSpawner {
    /// Creates a spawner seeded from the OS random source.
    ///
    /// For a reproducible sequence, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: SpawnSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
            seed,
        }
    }

    /// The seed this spawner was created with.
    #[must_use]
    pub fn seed(&self) -> SpawnSeed {
        self.seed
    }

    /// Draws the shape and color of the next piece.
    pub fn draw(&mut self) -> (ShapeKind, ColorId) {
        let shape = self.rng.random();
        let color = self.rng.random();
        (shape, color)
    }

    /// Builds the next piece at its spawn position.
    pub fn spawn(&mut self) -> Piece {
        let (shape, color) = self.draw();
        Piece::new(shape, color)
    }
}
