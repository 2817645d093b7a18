use leadctl::defaults::{self, Settings};
use leadctl::Store;

pub type CmdResult<T> = leadctl::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    pub db: Option<String>,
    pub output_dir: Option<String>,
}

impl GlobalArgs {
    /// leadctl.json merged with the global CLI overrides.
    pub fn settings(&self) -> leadctl::Result<Settings> {
        defaults::load_config().resolve(self.db.as_deref(), self.output_dir.as_deref())
    }

    /// Open the configured, already-initialized database.
    pub fn open_store(&self) -> leadctl::Result<(Store, Settings)> {
        let settings = self.settings()?;
        let store = Store::open(&settings.database_path)?;
        Ok((store, settings))
    }
}

pub mod client;
pub mod config;
pub mod init;
pub mod lead;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (leadctl::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Init(args) => dispatch!(args, global, init),
        crate::Commands::Lead(args) => dispatch!(args, global, lead),
        crate::Commands::Client(args) => dispatch!(args, global, client),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}
