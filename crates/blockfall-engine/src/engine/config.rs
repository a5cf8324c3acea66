use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Gravity interval while fast-drop is not held (0.3 s).
pub const NORMAL_FALL_DELAY: Duration = Duration::from_millis(300);
/// Gravity interval while fast-drop is held (0.05 s).
pub const FAST_FALL_DELAY: Duration = Duration::from_millis(50);

/// Tunable rules of a game.
///
/// Serialized with delays in whole milliseconds; missing fields take their
/// default values.
///
/// ```
/// use std::time::Duration;
///
/// use blockfall_engine::GameConfig;
///
/// let config: GameConfig = serde_json::from_str(r#"{ "fast_delay_ms": 20 }"#).unwrap();
/// assert_eq!(config.normal_delay, Duration::from_millis(300));
/// assert_eq!(config.fast_delay, Duration::from_millis(20));
/// assert!(!config.detect_top_out);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Gravity interval while fast-drop is released.
    #[serde(rename = "normal_delay_ms", with = "duration_millis")]
    pub normal_delay: Duration,
    /// Gravity interval while fast-drop is held.
    #[serde(rename = "fast_delay_ms", with = "duration_millis")]
    pub fast_delay: Duration,
    /// End the game when a freshly spawned piece does not fit.
    ///
    /// Off by default: the game never ends and cells locked above the board
    /// are silently discarded.
    pub detect_top_out: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            normal_delay: NORMAL_FALL_DELAY,
            fast_delay: FAST_FALL_DELAY,
            detect_top_out: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("normal fall delay must be non-zero")]
    ZeroNormalDelay,
    #[display("fast fall delay ({fast:?}) must not exceed normal fall delay ({normal:?})")]
    FastDelayTooLong { fast: Duration, normal: Duration },
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.normal_delay.is_zero() {
            return Err(ConfigError::ZeroNormalDelay);
        }
        if self.fast_delay > self.normal_delay {
            return Err(ConfigError::FastDelayTooLong {
                fast: self.fast_delay,
                normal: self.normal_delay,
            });
        }
        Ok(())
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize as _, Deserializer, Serializer};

    pub(super) fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let config = GameConfig::default();
        assert_eq!(config.normal_delay.as_millis(), 300);
        assert_eq!(config.fast_delay.as_millis(), 50);
        assert!(!config.detect_top_out);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_serialize_format() {
        let json = serde_json::to_string(&GameConfig::default()).unwrap();
        assert_eq!(
            json,
            r#"{"normal_delay_ms":300,"fast_delay_ms":50,"detect_top_out":false}"#
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let config: GameConfig = serde_json::from_str(r#"{"detect_top_out":true}"#).unwrap();
        assert_eq!(
            config,
            GameConfig {
                detect_top_out: true,
                ..GameConfig::default()
            }
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        assert!(serde_json::from_str::<GameConfig>(r#"{"level":3}"#).is_err());
    }

    #[test]
    fn test_validate_zero_normal_delay() {
        let config = GameConfig {
            normal_delay: Duration::ZERO,
            fast_delay: Duration::ZERO,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroNormalDelay));
    }

    #[test]
    fn test_validate_fast_delay_too_long() {
        let config = GameConfig {
            normal_delay: Duration::from_millis(100),
            fast_delay: Duration::from_millis(200),
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::FastDelayTooLong {
                fast: Duration::from_millis(200),
                normal: Duration::from_millis(100),
            }
        );
        assert!(err.to_string().contains("must not exceed"));
    }
}
