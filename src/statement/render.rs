//! SQL text rendering
//!
//! Identifiers (table and column names) are wrapped in backticks; values
//! are wrapped in single quotes. Nothing is escaped: embedded quotes must be
//! handled by a valuer such as `escape_quotes` before rendering.

/// Render `INSERT INTO t (cols) VALUES (vals);`
pub(crate) fn render_single(table: &str, keys: &[String], values: &[String]) -> String {
    let mut sql = insert_head(table, keys);
    sql.push_str(&value_tuple(values));
    sql.push(';');
    sql
}

/// Render `INSERT INTO t (cols) VALUES (row1), (row2), ...;`
pub(crate) fn render_batch(table: &str, keys: &[String], rows: &[Vec<String>]) -> String {
    let mut sql = insert_head(table, keys);
    let tuples: Vec<String> = rows.iter().map(|row| value_tuple(row)).collect();
    sql.push_str(&tuples.join(", "));
    sql.push(';');
    sql
}

fn insert_head(table: &str, keys: &[String]) -> String {
    let columns: Vec<String> = keys.iter().map(|k| quote_identifier(k)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ",
        quote_identifier(table),
        columns.join(", ")
    )
}

fn value_tuple(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| quote_value(v)).collect();
    format!("({})", quoted.join(", "))
}

/// Wrap an identifier in backticks
pub fn quote_identifier(name: &str) -> String {
    format!("`{name}`")
}

/// Wrap a value in single quotes
pub fn quote_value(value: &str) -> String {
    format!("'{value}'")
}
