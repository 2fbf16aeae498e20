//! Schema subsystem
//!
//! Schemas are immutable, declarative shape descriptions constructed
//! once and reused across many validations.
//!
//! # Design Principles
//!
//! - Combinators never mutate: `array_of`, `optional`, `merge` build
//!   new schemas
//! - Merge is right-biased over object schemas only
//! - Registered schemas are bound exactly once
//! - Structural problems (duplicate fields) are construction-time
//!   errors, not validation issues

mod errors;
mod registry;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use registry::SchemaRegistry;
pub use types::{Field, Schema};
