//! Source loading: find input files and read them into tables.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **Input resolution**: Expand glob patterns into concrete file paths
//! - **Table reading**: Decode CSV files into header-keyed rows
//!
//! ## Example
//!
//! ```rust,ignore
//! use csvcolslib::source::{read_tables, resolve_inputs, ReadOptions};
//!
//! let paths = resolve_inputs(&["data/*.csv"])?;
//! let tables = read_tables(&paths, &ReadOptions::new())?;
//! ```

pub mod files;
pub mod reader;

pub use files::resolve_inputs;
pub use reader::{read_table, read_tables, ReadOptions, Row, Table};
