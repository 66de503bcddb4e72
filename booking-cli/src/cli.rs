//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    CancelCommand, CustomerCommand, DemoCommand, InitCommand, ListCommand, ReserveCommand,
    RestaurantCommand, ServeCommand,
};

/// Command-line tool and HTTP server for restaurant reservations.
#[derive(Parser)]
#[command(name = "booking")]
#[command(version, about = "Book parties at restaurants", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "BOOKING_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the SQLite busy timeout (in milliseconds)
    #[arg(long, value_name = "MILLIS", global = true, env = "BOOKING_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u64>,

    /// Fail instead of creating a missing database
    #[arg(long, global = true, env = "BOOKING_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Run the HTTP API
    Serve(ServeCommand),

    /// Add or list customers
    Customer(CustomerCommand),

    /// Add or list restaurants
    Restaurant(RestaurantCommand),

    /// Book a party for a customer at a restaurant
    Reserve(ReserveCommand),

    /// List reservations, latest first
    List(ListCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// Run every operation once against the store
    Demo(DemoCommand),
}
