//! Main entry point for the booking CLI.
//!
//! Commands:
//! - `init`: Create the data directory and database
//! - `serve`: Run the HTTP API
//! - `customer` / `restaurant`: Add and list entities
//! - `reserve`, `list`, `cancel`: Manage reservations
//! - `demo`: Exercise every operation once

use booking_cli::cli::{Cli, Command};
use booking_cli::utils::GlobalOptions;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    let _level = booking::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    let result = match cli.command {
        Command::Init(cmd) => cmd.execute(&global),
        Command::Serve(cmd) => cmd.execute(&global),
        Command::Customer(cmd) => cmd.execute(&global),
        Command::Restaurant(cmd) => cmd.execute(&global),
        Command::Reserve(cmd) => cmd.execute(&global),
        Command::List(cmd) => cmd.execute(&global),
        Command::Cancel(cmd) => cmd.execute(&global),
        Command::Demo(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
