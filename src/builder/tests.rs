//! Tests for builder module

use super::*;
use crate::columns::builtin;
use crate::error::Error;
use crate::loader::load_job_from_str;
use crate::source::MemorySource;
use pretty_assertions::assert_eq;

fn scenario_source() -> MemorySource {
    MemorySource::from_rows([["ID", "Name"], ["10", "Alice"], ["11", "Bob"]])
}

fn scenario_builder(source: MemorySource) -> SqlBuilder {
    SqlBuilder::new(source)
        .skip_header(true)
        .table_name("test")
        .mapped("idx", 0)
        .header(["id", "name"])
        .column("foo", "bar")
        .valuer("idx", |v| match v.parse::<i64>() {
            Ok(n) => (n - 1).to_string(),
            Err(_) => v.to_string(),
        })
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_builder_defaults() {
    let builder = SqlBuilder::new(MemorySource::new());
    assert_eq!(builder.options(), &ExportOptions::default());
    assert!(builder.columns().is_empty());
}

#[test]
fn test_builder_option_setters() {
    let builder = SqlBuilder::new(MemorySource::new())
        .sql_mode(SqlMode::Batch)
        .batch_size(25)
        .skip_header(false)
        .table_name("users")
        .sheet_name("Sheet1");

    let opts = builder.options();
    assert_eq!(opts.mode, SqlMode::Batch);
    assert_eq!(opts.batch_size, 25);
    assert!(!opts.skip_header);
    assert_eq!(opts.table, "users");
    assert_eq!(opts.sheet.as_deref(), Some("Sheet1"));
}

#[test]
fn test_builder_with_options() {
    let options = ExportOptions::new().with_table("orders").with_batch_size(3);
    let builder = SqlBuilder::new(MemorySource::new()).with_options(options.clone());
    assert_eq!(builder.options(), &options);
}

#[test]
fn test_builder_column_order() {
    let builder = scenario_builder(MemorySource::new());
    assert_eq!(builder.columns().keys(), ["idx", "id", "name", "foo"]);
    assert!(builder.columns().has_valuer("idx"));
}

// ============================================================================
// Build Tests
// ============================================================================

#[tokio::test]
async fn test_build_single_scenario() {
    let statements = scenario_builder(scenario_source()).build().await.unwrap();

    let rendered: Vec<String> = statements.iter().map(Statement::render).collect();
    assert_eq!(
        rendered,
        vec![
            "INSERT INTO `test` (`idx`, `id`, `name`, `foo`) VALUES ('9', '10', 'Alice', 'bar');",
            "INSERT INTO `test` (`idx`, `id`, `name`, `foo`) VALUES ('10', '11', 'Bob', 'bar');",
        ]
    );
}

#[tokio::test]
async fn test_build_batch_scenario() {
    let statements = scenario_builder(scenario_source())
        .sql_mode(SqlMode::Batch)
        .batch_size(10)
        .build()
        .await
        .unwrap();

    assert_eq!(statements.len(), 1);
    assert_eq!(
        statements[0].render(),
        "INSERT INTO `test` (`idx`, `id`, `name`, `foo`) VALUES \
         ('9', '10', 'Alice', 'bar'), ('10', '11', 'Bob', 'bar');"
    );
}

#[tokio::test]
async fn test_build_batch_groups_of_three() {
    let source = MemorySource::from_rows((0..7).map(|i| vec![i.to_string()]));
    let statements = SqlBuilder::new(source)
        .skip_header(false)
        .sql_mode(SqlMode::Batch)
        .batch_size(3)
        .table_name("t")
        .header(["n"])
        .build()
        .await
        .unwrap();

    let sizes: Vec<usize> = statements.iter().map(Statement::row_count).collect();
    assert_eq!(sizes, vec![3, 3, 1]);

    let order: Vec<String> = statements
        .iter()
        .flat_map(|s| s.rows().into_iter().map(|r| r[0].clone()).collect::<Vec<_>>())
        .collect();
    assert_eq!(order, vec!["0", "1", "2", "3", "4", "5", "6"]);
}

#[tokio::test]
async fn test_build_zero_batch_size_fails_before_reading() {
    // a failing source proves the rows are never opened
    let result = SqlBuilder::new(MemorySource::failing("should not be opened"))
        .sql_mode(SqlMode::Batch)
        .batch_size(0)
        .header(["a"])
        .build()
        .await;

    assert!(matches!(result, Err(Error::InvalidBatchSize { size: 0 })));
}

#[tokio::test]
async fn test_build_header_only_source() {
    let statements = scenario_builder(MemorySource::from_rows([["ID", "Name"]]))
        .build()
        .await
        .unwrap();
    assert!(statements.is_empty());
}

#[tokio::test]
async fn test_build_source_error_propagates() {
    let result = scenario_builder(MemorySource::failing("locked")).build().await;
    assert!(matches!(result, Err(Error::SourceOpen { .. })));
}

#[tokio::test]
async fn test_build_with_stats() {
    let source = scenario_source().with_malformed_row("garbled");
    let (statements, stats) = scenario_builder(source).build_with_stats().await.unwrap();

    assert_eq!(statements.len(), 2);
    assert_eq!(stats.rows_read, 4);
    assert_eq!(stats.rows_skipped, 1);
    assert_eq!(stats.rows_dropped, 1);
    assert_eq!(stats.rows_transformed, 2);
}

#[tokio::test]
async fn test_build_literal_beats_mapped_then_valuer() {
    let statements = SqlBuilder::new(MemorySource::from_rows([["1", "from-sheet"]]))
        .skip_header(false)
        .table_name("t")
        .mapped("status", 1)
        .column("status", "fixed")
        .valuers([("status", builtin("uppercase").unwrap())])
        .build()
        .await
        .unwrap();

    assert_eq!(
        statements[0].render(),
        "INSERT INTO `t` (`status`, `status`) VALUES ('FIXED', 'FIXED');"
    );
}

#[tokio::test]
async fn test_build_from_job() {
    let job = load_job_from_str(
        r"
table: test
columns:
  - kind: mapped
    key: idx
    index: 0
  - kind: header
    keys: [id, name]
  - kind: literal
    key: foo
    value: bar
valuers:
  idx: [decrement]
",
    )
    .unwrap();

    let statements = SqlBuilder::from_job(scenario_source(), &job)
        .unwrap()
        .build()
        .await
        .unwrap();

    assert_eq!(
        statements[0].render(),
        "INSERT INTO `test` (`idx`, `id`, `name`, `foo`) VALUES ('9', '10', 'Alice', 'bar');"
    );
}
