//! CLI runner - executes commands

use crate::builder::SqlBuilder;
use crate::cli::commands::{Cli, Commands, OutputFormat, SourceArgs};
use crate::error::{Error, Result};
use crate::loader::{load_job, JobDefinition};
use crate::output::export_sql;
use crate::source::{open_source, RowSource};
use crate::statement::Statement;
use serde_json::json;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Export { source, output } => self.export(source, output).await,
            Commands::Preview {
                source,
                limit,
                format,
            } => self.preview(source, *limit, *format).await,
            Commands::Validate => self.validate(),
            Commands::Sheets { input } => self.sheets(input),
        }
    }

    /// Load the job definition if one was given
    fn load_job(&self) -> Result<Option<JobDefinition>> {
        self.cli.job.as_ref().map(load_job).transpose()
    }

    /// Build a configured builder from the job file and CLI overrides
    fn builder(&self, args: &SourceArgs) -> Result<SqlBuilder> {
        let source = open_source(&args.input);
        let mut builder = match self.load_job()? {
            Some(job) => SqlBuilder::from_job(source, &job)?,
            None => SqlBuilder::new(source),
        };

        if let Some(table) = &args.table {
            builder = builder.table_name(table.clone());
        }
        if let Some(sheet) = &args.sheet {
            builder = builder.sheet_name(sheet.clone());
        }
        if let Some(mode) = args.mode {
            builder = builder.sql_mode(mode);
        }
        if let Some(size) = args.batch_size {
            builder = builder.batch_size(size);
        }
        if args.no_skip_header {
            builder = builder.skip_header(false);
        }
        if !args.header.is_empty() {
            builder = builder.header(args.header.iter().cloned());
        }
        for column in &args.columns {
            let (key, value) = parse_column(column)?;
            builder = builder.column(key, value);
        }

        if builder.options().table.is_empty() {
            return Err(Error::config(
                "Table name not specified (use --table or a job file)",
            ));
        }
        if builder.columns().is_empty() {
            return Err(Error::config(
                "No columns declared (use --header, --column or a job file)",
            ));
        }

        Ok(builder)
    }

    /// Write statements to a file
    async fn export(&self, args: &SourceArgs, output: &Path) -> Result<()> {
        let (statements, stats) = self.builder(args)?.build_with_stats().await?;
        let written = export_sql(output, &statements)?;

        println!(
            "Wrote {written} statements ({} rows, {} dropped) to {}",
            stats.rows_transformed,
            stats.rows_dropped,
            output.display()
        );
        Ok(())
    }

    /// Print statements to stdout
    async fn preview(
        &self,
        args: &SourceArgs,
        limit: Option<usize>,
        format: OutputFormat,
    ) -> Result<()> {
        let statements = self.builder(args)?.build().await?;
        let shown = limit.unwrap_or(statements.len());

        for statement in statements.iter().take(shown) {
            println!("{}", format_statement(statement, format)?);
        }
        Ok(())
    }

    /// Validate the job definition
    fn validate(&self) -> Result<()> {
        let job = self
            .load_job()?
            .ok_or_else(|| Error::config("Job file not specified (use -j flag)"))?;
        let spec = job.column_spec()?;

        println!("Job is valid");
        println!("  Table: {}", job.table);
        println!("  Mode: {} (batch size {})", job.mode, job.batch_size);
        println!(
            "  Sheet: {}",
            job.sheet.as_deref().unwrap_or("(first sheet)")
        );
        println!("  Skip header: {}", job.skip_header);
        println!("  Columns: {}", spec.keys().join(", "));
        Ok(())
    }

    /// List sheet names
    fn sheets(&self, input: &Path) -> Result<()> {
        let mut source = open_source(input);
        for name in source.sheet_names()? {
            println!("{name}");
        }
        Ok(())
    }
}

/// Split a `KEY=VALUE` literal column argument
fn parse_column(arg: &str) -> Result<(&str, &str)> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => Err(Error::config(format!(
            "Invalid column '{arg}' (expected KEY=VALUE)"
        ))),
    }
}

/// Format one statement for stdout
fn format_statement(statement: &Statement, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(statement.render()),
        OutputFormat::Json => Ok(serde_json::to_string(&json!({
            "mode": statement.mode(),
            "rows": statement.row_count(),
            "sql": statement.render(),
        }))?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;
    use clap::Parser;

    #[test]
    fn test_parse_column() {
        assert_eq!(parse_column("foo=bar").unwrap(), ("foo", "bar"));
        assert_eq!(parse_column("foo=").unwrap(), ("foo", ""));
        assert_eq!(parse_column("a=b=c").unwrap(), ("a", "b=c"));
        assert!(parse_column("=bar").is_err());
        assert!(parse_column("foobar").is_err());
    }

    #[test]
    fn test_cli_parses_export() {
        let cli = Cli::parse_from([
            "sheet2sql",
            "export",
            "--input",
            "data.xlsx",
            "--output",
            "out.sql",
            "--table",
            "users",
            "--mode",
            "batch",
            "--batch-size",
            "5",
            "--header",
            "id,name",
            "--column",
            "foo=bar",
        ]);

        match cli.command {
            Commands::Export { source, output } => {
                assert_eq!(output, Path::new("out.sql"));
                assert_eq!(source.table.as_deref(), Some("users"));
                assert_eq!(source.mode, Some(crate::types::SqlMode::Batch));
                assert_eq!(source.batch_size, Some(5));
                assert_eq!(source.header, vec!["id", "name"]);
                assert_eq!(source.columns, vec!["foo=bar"]);
                assert!(!source.no_skip_header);
            }
            other => panic!("Expected export command, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_requires_table() {
        let cli = Cli::parse_from(["sheet2sql", "preview", "--input", "x.csv", "--header", "a"]);
        let runner = Runner::new(cli);
        let Commands::Preview { source, .. } = &runner.cli.command else {
            panic!("Expected preview command");
        };
        let err = runner.builder(source).err().unwrap();
        assert!(err.to_string().contains("Table name not specified"));
    }

    #[test]
    fn test_format_statement_json() {
        let statements = tokio::runtime::Runtime::new().unwrap().block_on(async {
            SqlBuilder::new(MemorySource::from_rows([["1"]]))
                .skip_header(false)
                .table_name("t")
                .header(["a"])
                .build()
                .await
                .unwrap()
        });

        let line = format_statement(&statements[0], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["mode"], "single");
        assert_eq!(value["rows"], 1);
        assert_eq!(value["sql"], "INSERT INTO `t` (`a`) VALUES ('1');");
    }
}
