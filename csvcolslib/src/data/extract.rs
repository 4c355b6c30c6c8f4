//! Column extraction.
//!
//! Values are collected column by column across every row of every table.
//! A row that lacks a requested column contributes an empty string, so all
//! columns stay the same length and row `i` lines up across columns even
//! when the input files have different headers.

use serde::Serialize;

use crate::source::Table;

/// The values of one requested column, in file-then-row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedColumn {
    /// Column name as requested
    pub name: String,
    /// One value per input row
    pub values: Vec<String>,
}

/// Extracted columns in request order.
///
/// Requesting the same name twice yields two independent entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractedData {
    pub columns: Vec<ExtractedColumn>,
}

impl ExtractedData {
    /// Create empty columns for the given names.
    pub fn with_columns<S: AsRef<str>>(names: &[S]) -> Self {
        let columns = names
            .iter()
            .map(|name| ExtractedColumn {
                name: name.as_ref().to_string(),
                values: Vec::new(),
            })
            .collect();
        ExtractedData { columns }
    }

    /// Values for a column, or `None` if it was not requested.
    ///
    /// With duplicate names the first entry wins.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Number of data rows: the longest column's length.
    pub fn row_count(&self) -> usize {
        self.columns
            .iter()
            .map(|c| c.values.len())
            .max()
            .unwrap_or(0)
    }

    /// Requested column names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Whether no columns were requested.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Extract the requested columns from every row of every table.
///
/// # Example
///
/// ```rust
/// use csvcolslib::{extract_columns, Table};
///
/// let a = Table::from_records("a.csv", ["id", "name"], vec![vec!["1", "Alice"]]);
/// let b = Table::from_records("b.csv", ["id"], vec![vec!["2"]]);
///
/// let data = extract_columns(&[a, b], &["id", "name"]);
/// assert_eq!(data.get("id").unwrap(), ["1", "2"]);
/// assert_eq!(data.get("name").unwrap(), ["Alice", ""]);
/// ```
pub fn extract_columns<S: AsRef<str>>(tables: &[Table], columns: &[S]) -> ExtractedData {
    let mut data = ExtractedData::with_columns(columns);

    for table in tables {
        for row in &table.rows {
            for column in &mut data.columns {
                let value = row.get(&column.name).unwrap_or_default();
                column.values.push(value.to_string());
            }
        }

        let missing: Vec<&str> = data
            .names()
            .filter(|name| !table.headers.iter().any(|h| h == name))
            .collect();
        if !missing.is_empty() {
            tracing::debug!(
                path = %table.path.display(),
                ?missing,
                "columns absent from table, filling with empty values"
            );
        }
    }

    tracing::debug!(
        columns = data.columns.len(),
        rows = data.row_count(),
        "extracted columns"
    );
    data
}
