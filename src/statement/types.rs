//! Statement types
//!
//! Immutable INSERT statements ready to render.

use super::render::{render_batch, render_single};
use crate::types::{ColumnKey, SqlMode};
use std::fmt;
use std::sync::Arc;

/// One single-row INSERT
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleInsert {
    pub(crate) table: Arc<str>,
    pub(crate) keys: Arc<[ColumnKey]>,
    pub(crate) values: Vec<String>,
}

/// One multi-row INSERT
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchInsert {
    pub(crate) table: Arc<str>,
    pub(crate) keys: Arc<[ColumnKey]>,
    pub(crate) rows: Vec<Vec<String>>,
}

/// An INSERT statement in either mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `INSERT INTO t (...) VALUES (...);`
    Single(SingleInsert),
    /// `INSERT INTO t (...) VALUES (...), (...);`
    Batch(BatchInsert),
}

impl Statement {
    /// Mode this statement was built in
    pub fn mode(&self) -> SqlMode {
        match self {
            Statement::Single(_) => SqlMode::Single,
            Statement::Batch(_) => SqlMode::Batch,
        }
    }

    /// Render the statement as SQL text
    pub fn render(&self) -> String {
        match self {
            Statement::Single(s) => render_single(&s.table, &s.keys, &s.values),
            Statement::Batch(b) => render_batch(&b.table, &b.keys, &b.rows),
        }
    }

    /// Target table
    pub fn table(&self) -> &str {
        match self {
            Statement::Single(s) => &s.table,
            Statement::Batch(b) => &b.table,
        }
    }

    /// Column keys in declared order
    pub fn keys(&self) -> &[ColumnKey] {
        match self {
            Statement::Single(s) => &s.keys,
            Statement::Batch(b) => &b.keys,
        }
    }

    /// Number of rows carried
    pub fn row_count(&self) -> usize {
        match self {
            Statement::Single(_) => 1,
            Statement::Batch(b) => b.rows.len(),
        }
    }

    /// Value tuples carried, in row order
    pub fn rows(&self) -> Vec<&[String]> {
        match self {
            Statement::Single(s) => vec![s.values.as_slice()],
            Statement::Batch(b) => b.rows.iter().map(Vec::as_slice).collect(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
