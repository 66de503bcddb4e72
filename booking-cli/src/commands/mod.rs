//! CLI command implementations.
//!
//! - `init`: Create the data directory, database, and config file
//! - `serve`: Run the HTTP API
//! - `customer`, `restaurant`: Add and list entities
//! - `reserve`: Book a party
//! - `list`: List reservations, latest first
//! - `cancel`: Cancel a reservation
//! - `demo`: Exercise every operation once

pub mod cancel;
pub mod customer;
pub mod demo;
pub mod init;
pub mod list;
pub mod reserve;
pub mod restaurant;
pub mod serve;

pub use cancel::CancelCommand;
pub use customer::CustomerCommand;
pub use demo::DemoCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use reserve::ReserveCommand;
pub use restaurant::RestaurantCommand;
pub use serve::ServeCommand;
