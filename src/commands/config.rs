use clap::{Args, Subcommand};
use serde::Serialize;

use leadctl::defaults::{self, Settings};

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show resolved settings (leadctl.json plus CLI overrides)
    Show,
    /// Print the leadctl.json path
    Path,
}

#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    command: &'static str,
    config_path: String,
    config_exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    settings: Option<Settings>,
}

pub fn run(args: ConfigArgs, global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    let config_path = defaults::config_path()?;
    let config_exists = std::path::Path::new(&config_path).exists();

    let output = match args.command {
        ConfigCommand::Show => ConfigOutput {
            command: "config.show",
            config_path,
            config_exists,
            settings: Some(global.settings()?),
        },
        ConfigCommand::Path => ConfigOutput {
            command: "config.path",
            config_path,
            config_exists,
            settings: None,
        },
    };

    Ok((output, 0))
}
