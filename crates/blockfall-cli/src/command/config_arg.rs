use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use blockfall_engine::GameConfig;

use crate::util;

/// Game configuration sources shared by subcommands.
///
/// Values are resolved in order: built-in defaults, then the JSON file, then
/// the individual command line overrides.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GameConfigArg {
    /// Path to a JSON game configuration file
    #[clap(long)]
    pub config: Option<PathBuf>,
    /// Gravity interval in milliseconds while fast-drop is released
    #[clap(long)]
    pub normal_delay_ms: Option<u64>,
    /// Gravity interval in milliseconds while fast-drop is held
    #[clap(long)]
    pub fast_delay_ms: Option<u64>,
    /// End the game when a new piece spawns into occupied cells
    #[clap(long)]
    pub detect_top_out: bool,
}

impl GameConfigArg {
    pub(crate) fn load(&self) -> anyhow::Result<GameConfig> {
        let base = match &self.config {
            Some(path) => util::read_json_file("game config", path)?,
            None => GameConfig::default(),
        };
        let config = self.apply_overrides(base);
        config
            .validate()
            .context("Invalid game configuration")?;
        Ok(config)
    }

    fn apply_overrides(&self, mut config: GameConfig) -> GameConfig {
        if let Some(ms) = self.normal_delay_ms {
            config.normal_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = self.fast_delay_ms {
            config.fast_delay = Duration::from_millis(ms);
        }
        if self.detect_top_out {
            config.detect_top_out = true;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let config = GameConfigArg::default().load().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let arg = GameConfigArg {
            normal_delay_ms: Some(500),
            fast_delay_ms: Some(25),
            detect_top_out: true,
            ..GameConfigArg::default()
        };
        let config = arg.load().unwrap();
        assert_eq!(config.normal_delay, Duration::from_millis(500));
        assert_eq!(config.fast_delay, Duration::from_millis(25));
        assert!(config.detect_top_out);
    }

    #[test]
    fn test_invalid_combination_is_rejected() {
        let arg = GameConfigArg {
            normal_delay_ms: Some(40),
            ..GameConfigArg::default()
        };
        let err = arg.load().unwrap_err();
        assert!(format!("{err:#}").contains("must not exceed"), "{err:#}");

        let arg = GameConfigArg {
            normal_delay_ms: Some(0),
            fast_delay_ms: Some(0),
            ..GameConfigArg::default()
        };
        assert!(arg.load().is_err());
    }

    #[test]
    fn test_file_then_overrides() {
        let path = env::temp_dir().join(format!("blockfall-config-{}.json", process::id()));
        fs::write(&path, r#"{ "normal_delay_ms": 800, "fast_delay_ms": 80 }"#).unwrap();

        let arg = GameConfigArg {
            config: Some(path.clone()),
            fast_delay_ms: Some(10),
            ..GameConfigArg::default()
        };
        let config = arg.load();
        fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.normal_delay, Duration::from_millis(800));
        assert_eq!(config.fast_delay, Duration::from_millis(10));
        assert!(!config.detect_top_out);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let arg = GameConfigArg {
            config: Some(PathBuf::from("/nonexistent/blockfall.json")),
            ..GameConfigArg::default()
        };
        let err = arg.load().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/blockfall.json"), "{err}");
    }
}
