use std::path::PathBuf;

use crate::{command::config_arg::GameConfigArg, util::Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PrintConfigArg {
    #[clap(flatten)]
    config: GameConfigArg,
    /// Output file path (stdout if omitted)
    #[clap(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &PrintConfigArg) -> anyhow::Result<()> {
    let PrintConfigArg { config, output } = arg;

    let config = config.load()?;
    Output::save_json(&config, output.clone())?;
    Ok(())
}
