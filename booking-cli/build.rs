//! Build script for booking-cli.
//!
//! Generates the `booking.1` man page into `OUT_DIR` with clap_mangen.
//! Build scripts cannot depend on the crate being built, so the command
//! tree is restated here.

use std::fs;
use std::path::PathBuf;

use clap::{Arg, Command};
use clap_mangen::Man;

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("booking")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book parties at restaurants")
        .long_about("Command-line tool and HTTP server for restaurant reservations")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("BOOKING_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the SQLite busy timeout (in milliseconds)")
                .value_name("MILLIS")
                .global(true)
                .env("BOOKING_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Fail instead of creating a missing database")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("BOOKING_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Initialize the data directory and database")
                .long_about("Create the data directory, the database, and optionally config.yaml"),
            Command::new("serve")
                .about("Run the HTTP API")
                .long_about("Serve the JSON API under /api until interrupted"),
            Command::new("customer")
                .about("Add or list customers")
                .long_about("Create a customer and print its id, or list every customer"),
            Command::new("restaurant")
                .about("Add or list restaurants")
                .long_about("Create a restaurant and print its id, or list every restaurant"),
            Command::new("reserve")
                .about("Book a party for a customer at a restaurant")
                .long_about("Create a reservation and print its id"),
            Command::new("list")
                .about("List reservations, latest first")
                .long_about("Display reservations joined with customer and restaurant names"),
            Command::new("cancel")
                .about("Cancel a reservation")
                .long_about("Delete a reservation held by the given customer"),
            Command::new("demo")
                .about("Run every operation once against the store")
                .long_about("Create a customer and a restaurant, book a party of four, then cancel it"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("booking.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
