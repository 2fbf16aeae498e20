//! CLI argument definitions using clap
//!
//! Commands:
//! - conforma check --schema <path>
//! - conforma validate --schema <path> --input <path> [--safe] [--extra-fields <policy>]
//! - conforma codegen --schema <path> [--name <TypeName>]

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::validate::ExtraFields;

/// conforma - a strict, deterministic runtime schema validation engine
#[derive(Parser, Debug)]
#[command(name = "conforma")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a schema document and check its structure
    Check {
        /// Path to the schema JSON file
        #[arg(long)]
        schema: PathBuf,
    },

    /// Validate a JSON document against a schema
    Validate {
        /// Path to the schema JSON file
        #[arg(long)]
        schema: PathBuf,

        /// Path to the JSON document to validate
        #[arg(long)]
        input: PathBuf,

        /// Report the outcome as a JSON object and exit 0 either way
        #[arg(long)]
        safe: bool,

        /// Treatment of undeclared object fields
        #[arg(long, value_enum, default_value_t = ExtraFieldsArg::Strip)]
        extra_fields: ExtraFieldsArg,
    },

    /// Emit the Rust type definitions matching an object schema
    Codegen {
        /// Path to the schema JSON file
        #[arg(long)]
        schema: PathBuf,

        /// Name of the generated root struct
        #[arg(long, default_value = "Record")]
        name: String,
    },
}

/// Undeclared-field policy as a CLI value
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraFieldsArg {
    /// Drop undeclared fields from the output
    Strip,
    /// Copy undeclared fields to the output verbatim
    Passthrough,
    /// Fail on undeclared fields
    Deny,
}

impl From<ExtraFieldsArg> for ExtraFields {
    fn from(arg: ExtraFieldsArg) -> Self {
        match arg {
            ExtraFieldsArg::Strip => ExtraFields::Strip,
            ExtraFieldsArg::Passthrough => ExtraFields::Passthrough,
            ExtraFieldsArg::Deny => ExtraFields::Deny,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
