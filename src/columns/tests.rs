//! Tests for column mapping module

use super::*;
use std::sync::Arc;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| (*c).to_string()).collect()
}

// ============================================================================
// Declaration Order Tests
// ============================================================================

#[test]
fn test_header_maps_sequential_indices() {
    let mut spec = ColumnSpec::new();
    spec.header(["id", "name", "email"]);

    let resolved = spec.resolve(&row(&["1", "Alice", "a@example.com"]));
    assert_eq!(resolved["id"], "1");
    assert_eq!(resolved["name"], "Alice");
    assert_eq!(resolved["email"], "a@example.com");
    assert_eq!(spec.keys(), ["id", "name", "email"]);
}

#[test]
fn test_keys_follow_declaration_order() {
    let mut spec = ColumnSpec::new();
    spec.mapped("idx", 0)
        .header(["id", "name"])
        .column("foo", "bar");

    assert_eq!(spec.keys(), ["idx", "id", "name", "foo"]);
    assert_eq!(spec.len(), 4);
}

#[test]
fn test_redeclared_key_appears_per_declaration() {
    let mut spec = ColumnSpec::new();
    spec.header(["id", "name"]).column("id", "fixed");

    assert_eq!(spec.keys(), ["id", "name", "id"]);

    let resolved = spec.resolve(&row(&["7", "Bob"]));
    let values: Vec<_> = spec.keys().iter().map(|k| resolved[k].clone()).collect();
    assert_eq!(values, ["fixed", "Bob", "fixed"]);
}

#[test]
fn test_valuer_does_not_declare_key() {
    let mut spec = ColumnSpec::new();
    spec.valuer("ghost", Arc::new(|v: &str| format!("{v}!")));

    assert!(spec.is_empty());
    assert!(spec.has_valuer("ghost"));
}

// ============================================================================
// Resolution Precedence Tests
// ============================================================================

#[test]
fn test_column_overrides_mapped() {
    let mut spec = ColumnSpec::new();
    spec.mapped("status", 1).column("status", "active");

    assert_eq!(spec.resolve_value("status", &row(&["1", "inactive"])), "active");
}

#[test]
fn test_valuer_applies_to_column_value() {
    let mut spec = ColumnSpec::new();
    spec.mapped("status", 1)
        .column("status", "active")
        .valuer("status", Arc::new(|v: &str| v.to_uppercase()));

    assert_eq!(spec.resolve_value("status", &row(&["1", "inactive"])), "ACTIVE");
}

#[test]
fn test_valuer_applies_to_mapped() {
    let mut spec = ColumnSpec::new();
    spec.mapped("idx", 0)
        .valuer("idx", builtin("decrement").unwrap());

    assert_eq!(spec.resolve_value("idx", &row(&["10"])), "9");
}

#[test]
fn test_valuer_on_undeclared_rule_sees_empty_string() {
    let mut spec = ColumnSpec::new();
    spec.valuer("missing", Arc::new(|v: &str| format!("[{v}]")));

    assert_eq!(spec.resolve_value("missing", &row(&["x"])), "[]");
}

#[test]
fn test_unknown_key_resolves_empty() {
    let spec = ColumnSpec::new();
    assert_eq!(spec.resolve_value("nothing", &row(&["x"])), "");
}

#[test]
fn test_mapped_index_past_row_end_is_empty() {
    let mut spec = ColumnSpec::new();
    spec.header(["a", "b", "c"]);

    let resolved = spec.resolve(&row(&["1"]));
    assert_eq!(resolved["a"], "1");
    assert_eq!(resolved["b"], "");
    assert_eq!(resolved["c"], "");
}

#[test]
fn test_valuers_bulk() {
    let mut spec = ColumnSpec::new();
    spec.header(["a", "b"]).valuers([
        ("a", builtin("uppercase").unwrap()),
        ("b", builtin("trim").unwrap()),
    ]);

    let resolved = spec.resolve(&row(&["x", "  y  "]));
    assert_eq!(resolved["a"], "X");
    assert_eq!(resolved["b"], "y");
}

#[test]
fn test_debug_lists_valuer_keys() {
    let mut spec = ColumnSpec::new();
    spec.mapped("a", 0).valuer("a", builtin("trim").unwrap());

    let debug = format!("{spec:?}");
    assert!(debug.contains("ColumnSpec"));
    assert!(debug.contains("valuers: [\"a\"]"));
}

// ============================================================================
// Built-in Valuer Tests
// ============================================================================

#[test]
fn test_builtin_valuers() {
    assert_eq!(builtin("trim").unwrap()("  a b "), "a b");
    assert_eq!(builtin("uppercase").unwrap()("abc"), "ABC");
    assert_eq!(builtin("lowercase").unwrap()("AbC"), "abc");
    assert_eq!(builtin("escape_quotes").unwrap()("O'Brien"), "O''Brien");
    assert_eq!(builtin("increment").unwrap()("41"), "42");
    assert_eq!(builtin("decrement").unwrap()("0"), "-1");
}

#[test]
fn test_integer_valuers_pass_non_numbers_through() {
    assert_eq!(builtin("increment").unwrap()("abc"), "abc");
    assert_eq!(builtin("decrement").unwrap()(""), "");
}

#[test]
fn test_unknown_builtin() {
    assert!(builtin("reverse").is_none());
    for name in BUILTIN_VALUERS {
        assert!(builtin(name).is_some(), "missing builtin {name}");
    }
}

#[test]
fn test_chain_runs_left_to_right() {
    let valuer = chain(vec![
        builtin("trim").unwrap(),
        builtin("increment").unwrap(),
        builtin("increment").unwrap(),
    ]);
    assert_eq!(valuer(" 5 "), "7");

    let identity = chain(Vec::new());
    assert_eq!(identity("same"), "same");
}
