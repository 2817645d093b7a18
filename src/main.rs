use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;
mod tty;

use commands::{client, config, init, lead};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "leadctl")]
#[command(version = VERSION)]
#[command(about = "Manage website leads and clients and generate preview site configs")]
struct Cli {
    /// SQLite database path (overrides leadctl.json)
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<String>,

    /// Directory for generated <slug>.json files (overrides leadctl.json)
    #[arg(long, global = true, value_name = "PATH")]
    output_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and its tables
    Init(init::InitArgs),
    /// Lead management
    #[command(visible_alias = "leads")]
    Lead(lead::LeadArgs),
    /// Client management and preview generation
    #[command(visible_alias = "clients")]
    Client(client::ClientArgs),
    /// Inspect leadctl configuration
    Config(config::ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let global = GlobalArgs {
        db: cli.db,
        output_dir: cli.output_dir,
    };

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    let _ = output::print_json_result(json_result);

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
