//! Output formatting: present extracted columns as an aligned table.
//!
//! This module handles the third and final stage of the pipeline. It
//! provides:
//!
//! - **RenderedTable**: Divider, header and row lines, ready to print
//! - **column_width**: The width reserved for one column's cells
//!
//! RenderedTable is a pure presentation layer - it only lays out strings.
//! Where the lines end up (console, file) is up to the caller.
//!
//! ## Example
//!
//! ```rust,ignore
//! use csvcolslib::output::format_table;
//!
//! let table = format_table(&data, &columns);
//! for line in table.lines() {
//!     println!("{line}");
//! }
//! ```

pub mod table;

pub use table::{column_width, format_table, RenderedTable, SEPARATOR};
