//! Environment Synthesizer
//!
//! Turns one parsed compose document into an ordered environment set:
//! for every versioned config, then every versioned secret, derive the
//! variable name from the file's basename and the value from its content
//! fingerprint.
//!
//! A file that cannot be fingerprinted only loses its own variable; the
//! problem is logged and recorded as a warning.

use std::path::Path;

use tracing::{info, warn};

use crate::domain::entities::ComposeDocument;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{
    EnvironmentAssignment, EnvironmentSet, Fingerprint, SkipReason, SynthesisWarning,
    VariableName,
};

/// Outcome of synthesizing one or more documents
///
/// Fatal problems never produce a `Synthesis`; they surface as
/// [`DeployError`](crate::error::DeployError) instead. A `Synthesis` with
/// warnings is a partial success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Synthesis {
    pub environment: EnvironmentSet,
    pub warnings: Vec<SynthesisWarning>,
}

impl Synthesis {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no entry was skipped
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Append another synthesis after this one
    pub fn extend(&mut self, other: Synthesis) {
        self.environment.extend(other.environment);
        self.warnings.extend(other.warnings);
    }
}

/// Build the assignment for one referenced file
///
/// The file is opened, streamed through the hasher and closed before this
/// returns, on success and on error alike.
pub fn assignment_for<FS>(path: &str, fs: &FS) -> Result<EnvironmentAssignment, SkipReason>
where
    FS: FileSystem + ?Sized,
{
    if path.is_empty() {
        return Err(SkipReason::NoFilePath);
    }

    let name = VariableName::from_path(path);
    if name.is_empty() {
        return Err(SkipReason::NoVariableName);
    }

    let fingerprint = fs
        .open(Path::new(path))
        .and_then(Fingerprint::from_reader)
        .map_err(|e| SkipReason::Unreadable(e.to_string()))?;

    Ok(EnvironmentAssignment::new(name, fingerprint))
}

/// Synthesize the environment for one document
pub fn synthesize<FS>(document: &ComposeDocument, fs: &FS) -> Synthesis
where
    FS: FileSystem + ?Sized,
{
    let mut synthesis = Synthesis::new();

    for (kind, _key, entry) in document.entries() {
        if !entry.is_versioned() {
            continue;
        }

        match assignment_for(entry.path(), fs) {
            Ok(assignment) => {
                info!("Using {} {}", kind, assignment);
                synthesis.environment.push(assignment);
            }
            Err(reason) => {
                let warning = SynthesisWarning {
                    kind,
                    file: entry.path().to_string(),
                    reason,
                };
                warn!("{}", warning);
                synthesis.warnings.push(warning);
            }
        }
    }

    synthesis
}
