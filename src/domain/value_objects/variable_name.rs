//! Environment variable name derived from a file path.

use std::fmt;
use std::path::Path;

/// Canonical environment variable name for a referenced file
///
/// Built from the final path segment: uppercased, then every character
/// outside `[A-Z0-9_]` replaced by `_`. A path without a final segment
/// yields an empty name, which callers treat as unusable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableName(String);

impl VariableName {
    /// Derive the name for `path`. Never fails.
    pub fn from_path(path: &str) -> Self {
        let basename = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        Self::from_basename(&basename)
    }

    /// Derive the name from an already-extracted basename
    pub fn from_basename(basename: &str) -> Self {
        let name = basename
            .chars()
            .map(|c| {
                let upper = single_char_uppercase(c);
                if upper.is_ascii_uppercase() || upper.is_ascii_digit() || upper == '_' {
                    upper
                } else {
                    '_'
                }
            })
            .collect();
        Self(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Uppercase of `c` when it is a single character, otherwise `c` itself.
/// Keeps the name one character per input character (`ß` stays `ß`).
fn single_char_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VariableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
