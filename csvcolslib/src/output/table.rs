//! Aligned text table layout.
//!
//! Every column gets a fixed width: the longest of its name and its values,
//! counted in characters. Header cells are centered, data cells are
//! left-justified, cells are joined by `" | "` and each line is wrapped in
//! `"| "` / `" |"`. The divider is a run of dashes exactly as long as a
//! bordered line.
//!
//! ```text
//! ---------------
//! | id  | name  |
//! ---------------
//! | 1   | Alice |
//! | 2   | Bob   |
//! ```

use crate::data::ExtractedData;

/// Cell separator within a line.
pub const SEPARATOR: &str = " | ";

const LEFT_BORDER: &str = "| ";
const RIGHT_BORDER: &str = " |";
const DIVIDER_CHAR: char = '-';

/// A formatted table, before borders are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    /// Width of each column, in display order
    pub widths: Vec<usize>,
    /// Dash line as long as a bordered header
    pub divider: String,
    /// Header cells joined by the separator
    pub header: String,
    /// Data rows, cells joined by the separator
    pub rows: Vec<String>,
}

impl RenderedTable {
    /// Header line with borders.
    pub fn bordered_header(&self) -> String {
        bordered(&self.header)
    }

    /// Data lines with borders.
    pub fn bordered_rows(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|row| bordered(row))
    }

    /// All lines in print order: divider, header, divider, rows.
    ///
    /// No closing divider is included; callers append one themselves.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 3);
        lines.push(self.divider.clone());
        lines.push(self.bordered_header());
        lines.push(self.divider.clone());
        lines.extend(self.bordered_rows());
        lines
    }
}

fn bordered(line: &str) -> String {
    format!("{LEFT_BORDER}{line}{RIGHT_BORDER}")
}

/// Width reserved for a column: its name or its longest value, whichever is
/// longer. Lengths are character counts.
pub fn column_width<S: AsRef<str>>(name: &str, values: &[S]) -> usize {
    let longest = values
        .iter()
        .map(|v| v.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    name.chars().count().max(longest)
}

/// Length of the divider for the given column widths.
///
/// Matches a bordered line: the widths, a 3-character separator between each
/// pair of columns, and 4 characters of borders.
fn divider_len(widths: &[usize]) -> usize {
    let separators = SEPARATOR.len() * widths.len().saturating_sub(1);
    widths.iter().sum::<usize>() + separators + LEFT_BORDER.len() + RIGHT_BORDER.len()
}

/// Lay out the requested columns of `data` as a table.
///
/// Columns appear in the order of `columns`. The row count is the longest
/// column's length; a column that runs short, or is missing from `data`
/// entirely, shows empty cells for the remaining rows. With no rows at all
/// the table is just a header.
///
/// # Example
///
/// ```rust
/// use csvcolslib::{extract_columns, format_table, Table};
///
/// let t = Table::from_records("a.csv", ["id", "name"], vec![vec!["1", "Alice"]]);
/// let columns = ["id", "name"];
/// let table = format_table(&extract_columns(&[t], &columns), &columns);
///
/// assert_eq!(table.bordered_header(), "| id | name  |");
/// assert_eq!(table.rows, vec!["1  | Alice"]);
/// assert_eq!(table.divider, "-".repeat(14));
/// ```
pub fn format_table<S: AsRef<str>>(data: &ExtractedData, columns: &[S]) -> RenderedTable {
    let empty: &[String] = &[];
    let column_values: Vec<&[String]> = columns
        .iter()
        .map(|c| data.get(c.as_ref()).unwrap_or(empty))
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .zip(&column_values)
        .map(|(name, values)| column_width(name.as_ref(), *values))
        .collect();

    let header = columns
        .iter()
        .zip(&widths)
        .map(|(name, &width)| format!("{:^width$}", name.as_ref()))
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    let row_count = column_values.iter().map(|v| v.len()).max().unwrap_or(0);

    let rows = (0..row_count)
        .map(|i| {
            column_values
                .iter()
                .zip(&widths)
                .map(|(values, &width)| {
                    let value = values.get(i).map(String::as_str).unwrap_or("");
                    format!("{value:<width$}")
                })
                .collect::<Vec<_>>()
                .join(SEPARATOR)
        })
        .collect();

    let divider = DIVIDER_CHAR.to_string().repeat(divider_len(&widths));

    RenderedTable {
        widths,
        divider,
        header,
        rows,
    }
}
