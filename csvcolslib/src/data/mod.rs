//! Data collection: pull requested columns out of parsed tables.
//!
//! This module handles the second stage of the pipeline. It provides:
//!
//! - **Extraction**: Per-column value sequences aligned by row (`extract_columns`)
//! - **Discovery**: The union of column names across tables (`discover_columns`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use csvcolslib::data::extract_columns;
//!
//! let data = extract_columns(&tables, &["id".to_string(), "name".to_string()]);
//! println!("{} rows", data.row_count());
//! ```

pub mod discover;
pub mod extract;

pub use discover::discover_columns;
pub use extract::{extract_columns, ExtractedColumn, ExtractedData};
