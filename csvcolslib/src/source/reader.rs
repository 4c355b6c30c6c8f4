//! CSV table reading.
//!
//! Each input file becomes a [`Table`]: the first record names the columns,
//! every following record becomes a [`Row`] keyed by those names.

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::error::CsvColsError;
use crate::Result;

/// Options for decoding input files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Field delimiter byte
    pub delimiter: u8,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl ReadOptions {
    /// Create new default options (comma-delimited).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the field delimiter from user input.
    ///
    /// Accepts a single ASCII character, or the escape `\t` for tab.
    pub fn delimiter_str(self, delimiter: &str) -> Result<Self> {
        let byte = match delimiter {
            "\\t" => b'\t',
            s if s.len() == 1 && s.is_ascii() => s.as_bytes()[0],
            s => return Err(CsvColsError::InvalidDelimiter(s.to_string())),
        };
        Ok(self.delimiter(byte))
    }
}

/// A single record, mapping column name to cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    /// Build a row by pairing header names with record fields.
    ///
    /// Short records leave trailing columns absent; fields past the last
    /// header are dropped. A repeated header name keeps the later field.
    pub fn from_fields<'a>(
        headers: &[String],
        fields: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let fields = headers
            .iter()
            .zip(fields)
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect();
        Row { fields }
    }

    /// Look up the cell for a column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

/// One input file's parsed contents.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Source file path
    pub path: PathBuf,
    /// Column names from the header record, in file order
    pub headers: Vec<String>,
    /// Data records in file order
    pub rows: Vec<Row>,
}

impl Table {
    /// Build a table from in-memory headers and records.
    pub fn from_records<H, R, F>(path: impl Into<PathBuf>, headers: H, records: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = F>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let rows = records
            .into_iter()
            .map(|record| {
                let fields: Vec<F::Item> = record.into_iter().collect();
                Row::from_fields(&headers, fields.iter().map(|f| f.as_ref()))
            })
            .collect();
        Table {
            path: path.into(),
            headers,
            rows,
        }
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Read a single CSV file into a [`Table`].
///
/// # Example
///
/// ```rust
/// use csvcolslib::{read_table, ReadOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("people.csv");
/// fs::write(&path, "id,name\n1,Alice\n2,\"Bob, Jr.\"\n").unwrap();
///
/// let table = read_table(&path, &ReadOptions::new()).unwrap();
/// assert_eq!(table.headers, vec!["id", "name"]);
/// assert_eq!(table.rows[1].get("name"), Some("Bob, Jr."));
/// ```
pub fn read_table(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CsvColsError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(file);

    let csv_error = |e: csv::Error| CsvColsError::Csv {
        path: path.to_path_buf(),
        source: e,
    };

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        rows.push(Row::from_fields(&headers, record.iter()));
    }

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read table"
    );

    Ok(Table {
        path: path.to_path_buf(),
        headers,
        rows,
    })
}

/// Read several CSV files, in order.
///
/// The first file that fails to open or decode aborts the whole read.
pub fn read_tables<P: AsRef<Path>>(paths: &[P], options: &ReadOptions) -> Result<Vec<Table>> {
    paths.iter().map(|p| read_table(p, options)).collect()
}
