use clap::Args;
use serde::Serialize;

use leadctl::Store;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct InitArgs {}

#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub command: &'static str,
    pub database_path: String,
    pub tables: Vec<&'static str>,
}

pub fn run(_args: InitArgs, global: &GlobalArgs) -> CmdResult<InitOutput> {
    let settings = global.settings()?;
    Store::initialize(&settings.database_path)?;

    Ok((
        InitOutput {
            command: "init",
            database_path: settings.database_path.display().to_string(),
            tables: vec!["leads", "clients", "assets"],
        },
        0,
    ))
}
