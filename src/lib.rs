//! touchwire library
//!
//! Exposes the CLI building blocks for integration testing

pub mod cli;
pub mod config;
pub mod dry_run;
pub mod errors;
pub mod gesture_file;

pub use config::Config;
pub use dry_run::DryRunExecutor;
pub use errors::{TouchwireError, TouchwireResult};
