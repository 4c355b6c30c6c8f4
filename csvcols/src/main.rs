//! # csvcols
//!
//! A CLI tool that pulls named columns out of CSV files and prints them as an
//! aligned table.
//!
//! ## Overview
//!
//! csvcols is built on top of csvcolslib. It reads every input file, keeps
//! the requested columns (in the order given), and prints them with a
//! bordered header. Rows from all files are concatenated in file order; a
//! file that lacks a column contributes empty cells for it.
//!
//! ## Usage
//!
//! ```bash
//! # List the columns found across files (`-sc` works too)
//! csvcols -f a.csv b.csv --show-columns
//!
//! # Extract two columns from every CSV in a directory
//! csvcols -f 'data/*.csv' -c id name
//!
//! # Also save the table to a file
//! csvcols -f a.csv -c id name -o table.txt
//!
//! # Semicolon-delimited input, JSON output
//! csvcols -f a.csv -d ';' -c id --format json
//! ```
//!
//! Set `CSVCOLS_LOG` (e.g. `CSVCOLS_LOG=debug`) or pass `-v` to see what was
//! read. Logs go to stderr.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use csvcolslib::{
    discover_columns, extract_columns, format_table, read_tables, resolve_inputs, ReadOptions,
    RenderedTable, Table,
};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "CSVCOLS_LOG";

const DISCOVERY_HEADING: &str = "Columns present in the selected files:";

const MISSING_COLUMNS_MESSAGE: &str = "Please specify columns to extract with -c/--columns.";

/// Exit code for invalid invocations, matching clap's own usage errors
const USAGE_EXIT_CODE: u8 = 2;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("csvcols")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Extract named columns from CSV files and print them as an aligned table")
        .arg(
            Arg::new("files")
                .short('f')
                .long("files")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append)
                .help("CSV file paths (glob patterns are expanded)"),
        )
        .arg(
            Arg::new("show-columns")
                .short('s')
                .long("show-columns")
                .action(ArgAction::SetTrue)
                .help("Show the columns present in the files (also accepted as -sc)"),
        )
        .arg(
            Arg::new("columns")
                .short('c')
                .long("columns")
                .num_args(1..)
                .action(ArgAction::Append)
                .help("Columns to extract, in output order"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Also write the table to this file"),
        )
        .arg(
            Arg::new("delimiter")
                .short('d')
                .long("delimiter")
                .default_value(",")
                .help("Field delimiter (single character, or \\t for tab)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug)"),
        )
}

/// Spelling of `--show-columns` kept from earlier releases
const LEGACY_SHOW_COLUMNS: &str = "-sc";

/// Rewrite `-sc` to `--show-columns`; clap would otherwise read it as `-s -c`.
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            if arg == LEGACY_SHOW_COLUMNS {
                OsString::from("--show-columns")
            } else {
                arg
            }
        })
        .collect()
}

/// Install a stderr subscriber. `CSVCOLS_LOG` takes precedence over `-v`.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Resolve and read every input file named on the command line
fn load_tables(matches: &ArgMatches) -> anyhow::Result<Vec<Table>> {
    let args: Vec<&String> = matches
        .get_many::<String>("files")
        .map(|v| v.collect())
        .unwrap_or_default();
    let paths = resolve_inputs(&args)?;

    let delimiter = matches
        .get_one::<String>("delimiter")
        .map(|s| s.as_str())
        .unwrap_or(",");
    let options = ReadOptions::new().delimiter_str(delimiter)?;

    tracing::info!(files = paths.len(), "reading input files");
    Ok(read_tables(&paths, &options)?)
}

/// Handler for discovery mode
fn show_columns_handler(matches: &ArgMatches) -> anyhow::Result<ExitCode> {
    let tables = load_tables(matches)?;
    let names = discover_columns(&tables);

    let mut out = io::stdout().lock();
    writeln!(out, "{}", style(DISCOVERY_HEADING).bold())?;
    for name in &names {
        writeln!(out, "{name}")?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Handler for extraction mode
fn extract_handler(matches: &ArgMatches) -> anyhow::Result<ExitCode> {
    let columns: Vec<String> = matches
        .get_many::<String>("columns")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();
    if columns.is_empty() {
        eprintln!("{MISSING_COLUMNS_MESSAGE}");
        return Ok(ExitCode::from(USAGE_EXIT_CODE));
    }

    let tables = load_tables(matches)?;
    let data = extract_columns(&tables, &columns);
    let output = matches.get_one::<String>("output");

    match matches.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => {
            let json = serde_json::to_string_pretty(&data)?;
            if let Some(path) = output {
                write_file(path, &format!("{json}\n"))?;
            }
            writeln!(io::stdout().lock(), "{json}")?;
        }
        _ => {
            let table = format_table(&data, &columns);
            if let Some(path) = output {
                write_table_file(path, &table)?;
            }
            print_table(&table)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Console path: each line, then the closing divider on its own.
fn print_table(table: &RenderedTable) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for line in table.lines() {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{}", table.divider)?;
    out.flush()
}

/// File path: joined lines, then the closing divider appended.
fn write_table_file(path: &str, table: &RenderedTable) -> anyhow::Result<()> {
    let mut contents = table.lines().join("\n");
    contents.push('\n');
    contents.push_str(&table.divider);
    contents.push('\n');
    write_file(path, &contents)
}

fn write_file(path: &str, contents: &str) -> anyhow::Result<()> {
    fs::write(Path::new(path), contents)
        .map_err(|e| anyhow::anyhow!("failed to write output file '{path}': {e}"))?;
    tracing::info!(path, bytes = contents.len(), "wrote output file");
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches_from(normalize_args(std::env::args_os()));
    init_tracing(matches.get_count("verbose"));

    let result = if matches.get_flag("show-columns") {
        show_columns_handler(&matches)
    } else {
        extract_handler(&matches)
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
