//! Code list parser.
//!
//! Code lists (`*.shapez` files) hold one shape code per line, optionally
//! named:
//!
//! ```text
//! # starter shapes
//! circle = C(u)
//! R(u):C(w)
//! ```
//!
//! Unnamed entries are called `<prefix>-<n>`, counting entries from 1. The
//! build uses the file stem as the prefix so lists never share bare names.

use crate::error::{Result, ShapezError};

/// A single entry in a code list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub name: String,
    pub code: String,
    /// Line number (1-indexed).
    pub line: usize,
}

/// Parse the contents of a code list file, naming bare codes after `prefix`.
pub fn parse_code_list(source: &str, prefix: &str) -> Result<Vec<CodeEntry>> {
    let mut entries = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (name, code) = match line.split_once('=') {
            Some((name, code)) => (name.trim().to_string(), code.trim()),
            None => (format!("{}-{}", prefix, entries.len() + 1), line),
        };

        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(ShapezError::Parse {
                message: format!("Invalid shape name on line {}: '{}'", line_no, name),
                help: Some("Names must be non-empty and cannot contain path separators".to_string()),
            });
        }

        entries.push(CodeEntry {
            name,
            code: code.to_string(),
            line: line_no,
        });
    }

    Ok(entries)
}
