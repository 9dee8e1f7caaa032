//! YAML Loader module
//!
//! Parse export job definitions from YAML files.
//!
//! # Overview
//!
//! The loader module provides:
//! - `JobDefinition` - Declarative table, options and column rules
//! - `ColumnDefinition` - One header/mapped/literal declaration
//! - YAML parsing with validation
//!
//! # Example
//!
//! ```yaml
//! table: users
//! sheet: Sheet1
//! mode: batch
//! batch_size: 100
//! columns:
//!   - kind: mapped
//!     key: idx
//!     index: 0
//!   - kind: header
//!     keys: [id, name]
//!   - kind: literal
//!     key: source
//!     value: import
//! valuers:
//!   idx: [trim, decrement]
//! ```

mod parser;
mod types;

pub use parser::{load_job, load_job_from_str};
pub use types::{ColumnDefinition, JobDefinition};
