//! Column specification
//!
//! Ordered keys plus the rules that resolve each key against a raw row.

use super::valuers::Valuer;
use crate::types::{ColumnKey, TransformedRow};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Declared output columns and their population rules
///
/// The key list is kept exactly as declared, duplicates included. A key
/// declared twice (e.g. once via `mapped` and again via `header`) appears
/// twice in every rendered statement; its rules are shared, last write wins.
#[derive(Clone, Default)]
pub struct ColumnSpec {
    /// Keys in declaration order
    keys: Vec<ColumnKey>,
    /// Key -> raw-row index
    mapped: HashMap<ColumnKey, usize>,
    /// Key -> fixed value
    literals: HashMap<ColumnKey, String>,
    /// Key -> transform
    valuers: HashMap<ColumnKey, Valuer>,
}

impl ColumnSpec {
    /// Create an empty specification
    pub fn new() -> Self {
        Self::default()
    }

    /// Map keys to raw-row indices 0..n-1, in order
    pub fn header<I, K>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = K>,
        K: Into<ColumnKey>,
    {
        for (index, key) in keys.into_iter().enumerate() {
            let key = key.into();
            self.mapped.insert(key.clone(), index);
            self.keys.push(key);
        }
        self
    }

    /// Map one key to an explicit raw-row index
    pub fn mapped(&mut self, key: impl Into<ColumnKey>, index: usize) -> &mut Self {
        let key = key.into();
        self.mapped.insert(key.clone(), index);
        self.keys.push(key);
        self
    }

    /// Add a column bound to a fixed value
    pub fn column(&mut self, key: impl Into<ColumnKey>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        self.literals.insert(key.clone(), value.into());
        self.keys.push(key);
        self
    }

    /// Attach a valuer to a key. The key is not added to the column list.
    pub fn valuer(&mut self, key: impl Into<ColumnKey>, valuer: Valuer) -> &mut Self {
        self.valuers.insert(key.into(), valuer);
        self
    }

    /// Attach several valuers at once
    pub fn valuers<I, K>(&mut self, valuers: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, Valuer)>,
        K: Into<ColumnKey>,
    {
        for (key, valuer) in valuers {
            self.valuers.insert(key.into(), valuer);
        }
        self
    }

    /// Keys in declaration order, duplicates included
    pub fn keys(&self) -> &[ColumnKey] {
        &self.keys
    }

    /// Number of declared columns
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no column has been declared
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether a valuer is attached to `key`
    pub fn has_valuer(&self, key: &str) -> bool {
        self.valuers.contains_key(key)
    }

    /// Resolve one key against a raw row
    ///
    /// Precedence: empty string, then mapped cell, then literal, then valuer.
    /// A mapped index past the end of the row reads as an empty cell.
    pub fn resolve_value(&self, key: &str, row: &[String]) -> String {
        let mut value = String::new();

        if let Some(&index) = self.mapped.get(key) {
            if let Some(cell) = row.get(index) {
                value.clone_from(cell);
            }
        }

        if let Some(literal) = self.literals.get(key) {
            value.clone_from(literal);
        }

        if let Some(valuer) = self.valuers.get(key) {
            value = valuer(&value);
        }

        value
    }

    /// Resolve every declared key against a raw row
    pub fn resolve(&self, row: &[String]) -> TransformedRow {
        let mut resolved = TransformedRow::with_capacity(self.keys.len());
        for key in &self.keys {
            if !resolved.contains_key(key) {
                resolved.insert(key.clone(), self.resolve_value(key, row));
            }
        }
        resolved
    }

    /// Shared, immutable view of the key list
    pub fn shared_keys(&self) -> Arc<[ColumnKey]> {
        Arc::from(self.keys.as_slice())
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut valuer_keys: Vec<_> = self.valuers.keys().collect();
        valuer_keys.sort();
        f.debug_struct("ColumnSpec")
            .field("keys", &self.keys)
            .field("mapped", &self.mapped)
            .field("literals", &self.literals)
            .field("valuers", &valuer_keys)
            .finish()
    }
}
