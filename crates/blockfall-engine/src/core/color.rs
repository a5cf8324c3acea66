use std::num::NonZeroU8;

use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

/// Color identifier carried by a piece and by the board cells it locks into.
///
/// Valid identifiers are `1..=7`. The value `0` marks an empty board cell and
/// therefore cannot be represented by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ColorId(NonZeroU8);

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("color identifier must be in 1..=7, got {_0}")]
pub struct InvalidColorIdError(#[error(not(source))] pub u8);

impl ColorId {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;
    /// Number of distinct color identifiers (7).
    pub const COUNT: usize = 7;

    /// All color identifiers in ascending order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::from_raw(1),
        Self::from_raw(2),
        Self::from_raw(3),
        Self::from_raw(4),
        Self::from_raw(5),
        Self::from_raw(6),
        Self::from_raw(7),
    ];

    const fn from_raw(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(value) => Self(value),
            None => panic!("color identifier must be non-zero"),
        }
    }

    /// Creates a color identifier, or `None` if `value` is outside `1..=7`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::ColorId;
    ///
    /// assert_eq!(ColorId::new(3).map(ColorId::get), Some(3));
    /// assert_eq!(ColorId::new(0), None);
    /// assert_eq!(ColorId::new(8), None);
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self::ALL[(value - Self::MIN) as usize])
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for ColorId {
    type Error = InvalidColorIdError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidColorIdError(value))
    }
}

impl From<ColorId> for u8 {
    fn from(color: ColorId) -> Self {
        color.get()
    }
}

impl Distribution<ColorId> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ColorId {
        ColorId::ALL[rng.random_range(0..ColorId::COUNT)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        assert_eq!(ColorId::new(0), None);
        for value in 1..=7 {
            assert_eq!(ColorId::new(value).map(ColorId::get), Some(value));
        }
        assert_eq!(ColorId::new(8), None);
        assert_eq!(ColorId::new(u8::MAX), None);
    }

    #[test]
    fn test_try_from_error_message() {
        let err = ColorId::try_from(9).unwrap_err();
        assert_eq!(err.to_string(), "color identifier must be in 1..=7, got 9");
    }

    #[test]
    fn test_serde_as_integer() {
        let color = ColorId::new(5).unwrap();
        assert_eq!(serde_json::to_string(&color).unwrap(), "5");
        assert_eq!(serde_json::from_str::<ColorId>("5").unwrap(), color);
        assert!(serde_json::from_str::<ColorId>("0").is_err());
        assert!(serde_json::from_str::<ColorId>("8").is_err());
    }
}
