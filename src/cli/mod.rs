//! Command-line interface
//!
//! Thin driver over the library: load files, dispatch, report.
//! Failures print as `[CODE] message` and exit non-zero.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ExtraFieldsArg};
pub use commands::run;
pub use errors::{CliError, CliResult};
