//! Column mapping module
//!
//! Declares how every output SQL column is populated.
//!
//! # Overview
//!
//! A `ColumnSpec` keeps the declared key order and three rule tables:
//! - Mapped: value read from a raw-row index
//! - Literal: fixed value, overrides a mapped value
//! - Valuer: transform applied last to whatever was resolved
//!
//! Built-in valuers can be looked up by name for YAML job files.

mod spec;
mod valuers;

pub use spec::ColumnSpec;
pub use valuers::{builtin, chain, Valuer, BUILTIN_VALUERS};

#[cfg(test)]
mod tests;
