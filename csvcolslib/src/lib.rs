//! # csvcolslib
//!
//! Extract named columns from one or more CSV files and lay them out as an
//! aligned, human-readable text table.
//!
//! ## Overview
//!
//! The library is a three-stage pipeline:
//!
//! - **Source**: Resolve input paths (with glob expansion) and read each CSV
//!   file into a [`Table`] of header-keyed rows
//! - **Data**: Pull the requested columns out of every row of every table
//!   ([`extract_columns`]), or list the column names they contain
//!   ([`discover_columns`])
//! - **Output**: Compute column widths and render divider, header and row
//!   lines ([`format_table`])
//!
//! Rows are never dropped. A row without a requested column contributes an
//! empty cell, so every extracted column has one value per input row and
//! rows stay aligned across files with different headers.
//!
//! The library does no printing; it returns data and strings.
//!
//! ## Example
//!
//! ```rust
//! use csvcolslib::{extract_columns, format_table, read_tables, ReadOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let a = dir.path().join("a.csv");
//! let b = dir.path().join("b.csv");
//! fs::write(&a, "id,name\n1,Alice\n2,Bob\n").unwrap();
//! fs::write(&b, "id,name\n3,Cara\n").unwrap();
//!
//! let tables = read_tables(&[a, b], &ReadOptions::new()).unwrap();
//! let columns = ["id", "name"];
//! let data = extract_columns(&tables, &columns);
//! assert_eq!(data.get("name").unwrap(), ["Alice", "Bob", "Cara"]);
//!
//! let table = format_table(&data, &columns);
//! assert_eq!(table.widths, vec![2, 5]);
//! assert_eq!(table.lines()[1], "| id | name  |");
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod source;

pub use data::{discover_columns, extract_columns, ExtractedColumn, ExtractedData};
pub use error::CsvColsError;
pub use output::{column_width, format_table, RenderedTable};
pub use source::{read_table, read_tables, resolve_inputs, ReadOptions, Row, Table};

/// Result type for csvcolslib operations
pub type Result<T> = std::result::Result<T, CsvColsError>;
