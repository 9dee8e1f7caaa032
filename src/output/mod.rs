//! Output module
//!
//! Writes rendered statements to files or any `std::io::Write` sink.
//!
//! # Overview
//!
//! Each statement is written on its own line, in order. Writers report how
//! many statements they wrote.

mod writer;

pub use writer::{export_sql, write_statements, SqlWriter};
