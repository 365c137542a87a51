//! Domain Value Objects
//!
//! Immutable value types for the environment synthesis pipeline.

mod environment;
mod fingerprint;
mod synthesis_warning;
mod variable_name;

pub use environment::{EnvironmentAssignment, EnvironmentSet};
pub use fingerprint::Fingerprint;
pub use synthesis_warning::{ResourceKind, SkipReason, SynthesisWarning};
pub use variable_name::VariableName;
