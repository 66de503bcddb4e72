//! Higher-level operations built on the database layer.
//!
//! - [`init`]: create the data directory, database, and config file
//! - [`demo`]: a smoke run touching every data-access operation

pub mod demo;
pub mod init;

pub use demo::{run_demo, DemoReport};
pub use init::{init_database, InitOptions, InitResult};
