//! Synthesis warning value object.

use std::fmt;

/// Which section of a compose document an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Config,
    Secret,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Config => "config",
            ResourceKind::Secret => "secret",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an entry contributed no assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry is named but has no `file` key
    NoFilePath,
    /// The path has no final segment to derive a name from
    NoVariableName,
    /// Opening or reading the file failed
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoFilePath => f.write_str("no file path given"),
            SkipReason::NoVariableName => f.write_str("path has no file name"),
            SkipReason::Unreadable(cause) => f.write_str(cause),
        }
    }
}

/// Non-fatal problem with a single config or secret entry.
///
/// The entry is left out of the environment and synthesis continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisWarning {
    pub kind: ResourceKind,
    /// The entry's file path as written in the document (may be empty)
    pub file: String,
    pub reason: SkipReason,
}

impl fmt::Display for SynthesisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot generate environment for {} file {}: {}",
            self.kind, self.file, self.reason
        )
    }
}
