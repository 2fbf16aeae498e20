//! conforma - a strict, deterministic runtime schema validation engine
//!
//! Immutable declarative schemas, two validation entry points (`parse`
//! propagates, `safe_parse` returns an outcome for inspection), and
//! full issue aggregation with structural paths.

pub mod cli;
pub mod codegen;
pub mod schema;
pub mod validate;
pub mod value;
