//! Column discovery across input tables.

use std::collections::HashSet;

use crate::source::Table;

/// Collect the distinct column names found in the tables' header rows.
///
/// Names appear once each, in the order first seen (file order, then
/// header order).
pub fn discover_columns(tables: &[Table]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for table in tables {
        for header in &table.headers {
            if seen.insert(header.as_str()) {
                names.push(header.clone());
            }
        }
    }

    tracing::debug!(tables = tables.len(), columns = names.len(), "discovered columns");
    names
}
