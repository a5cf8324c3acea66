use clap::{Parser, Subcommand};

use self::{play::PlayArg, print_config::PrintConfigArg};

mod config_arg;
mod play;
mod print_config;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play in the terminal (default)
    Play(#[clap(flatten)] PlayArg),
    /// Print the effective game configuration as JSON
    PrintConfig(#[clap(flatten)] PrintConfigArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::PrintConfig(arg) => print_config::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_play_is_default() {
        let args = CommandArgs::try_parse_from(["blockfall"]).unwrap();
        assert!(args.mode.is_none());
    }

    #[test]
    fn test_parse_play_flags() {
        let args = CommandArgs::try_parse_from([
            "blockfall",
            "play",
            "--seed",
            "0123456789abcdef0123456789abcdef",
            "--fast-delay-ms",
            "20",
            "--detect-top-out",
        ])
        .unwrap();
        let Some(Mode::Play(arg)) = args.mode else {
            panic!("expected play mode");
        };
        assert_eq!(
            arg.seed.map(|seed| seed.to_string()).as_deref(),
            Some("0123456789abcdef0123456789abcdef")
        );
        assert_eq!(arg.config.fast_delay_ms, Some(20));
        assert!(arg.config.detect_top_out);
    }

    #[test]
    fn test_reject_malformed_seed() {
        let result = CommandArgs::try_parse_from(["blockfall", "play", "--seed", "xyz"]);
        assert!(result.is_err());
    }
}
