//! liveparam CLI - Live Parameter Inspector
//!
//! Command-line interface for inspecting and replaying live parameters.

use clap::Parser;
use env_logger::Env;
use log::info;

use liveparam::cli::{commands, Cli, Commands};
use liveparam::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("liveparam v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("liveparam v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List => commands::list(),
        Commands::Dump { output } => commands::dump(output.as_deref()),
        Commands::Apply { path } => commands::apply(&path),
        Commands::Set { type_name, floats } => commands::set(&type_name, &floats),
    }
}
