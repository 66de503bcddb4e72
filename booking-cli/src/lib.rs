//! Library exports for booking-cli.
//!
//! The binary is a thin shell over these modules; the HTTP router is
//! exported so integration tests can drive it without a socket.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod server;
pub mod utils;

pub use cli::Cli;
pub use error::CliError;
