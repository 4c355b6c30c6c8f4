//! Input path resolution with glob pattern support.
//!
//! Shells usually expand `*.csv` before we ever see it, but not all of them
//! do, and quoted patterns are passed through verbatim. Arguments containing
//! glob metacharacters are expanded here; everything else is taken literally.

use std::path::{Path, PathBuf};

use crate::error::CsvColsError;
use crate::Result;

/// Check whether an argument should be treated as a glob pattern.
fn is_pattern(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}

/// Expand a single glob pattern into sorted, matching file paths.
fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|e| CsvColsError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| CsvColsError::FileRead {
            path: e.path().to_path_buf(),
            source: e.into(),
        })?;
        if path.is_file() {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(CsvColsError::NoMatches(pattern.to_string()));
    }

    paths.sort();
    tracing::trace!(pattern, matches = paths.len(), "expanded glob pattern");
    Ok(paths)
}

/// Resolve command-line input arguments into file paths.
///
/// Plain paths are returned as given, in argument order. Their existence is
/// checked later, when the file is opened. An argument naming an existing
/// file is always taken literally, even if it contains glob metacharacters. Patterns are expanded in place,
/// so `a.csv 'logs/*.csv' b.csv` keeps `a.csv` first and `b.csv` last.
pub fn resolve_inputs<S: AsRef<str>>(args: &[S]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for arg in args {
        let arg = arg.as_ref();
        if is_pattern(arg) && !Path::new(arg).is_file() {
            paths.extend(expand_pattern(arg)?);
        } else {
            paths.push(PathBuf::from(arg));
        }
    }
    Ok(paths)
}
