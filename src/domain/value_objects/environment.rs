//! Environment assignments handed to the orchestrator process.

use std::fmt;

use super::{Fingerprint, VariableName};

/// One `NAME=VALUE` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentAssignment {
    name: VariableName,
    value: Fingerprint,
}

impl EnvironmentAssignment {
    pub fn new(name: VariableName, value: Fingerprint) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

impl fmt::Display for EnvironmentAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Ordered sequence of assignments
///
/// Order is insertion order. Duplicate names are kept; when applied to a
/// process environment the later assignment wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSet {
    assignments: Vec<EnvironmentAssignment>,
}

impl EnvironmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, assignment: EnvironmentAssignment) {
        self.assignments.push(assignment);
    }

    /// Append every assignment of `other`, preserving its order
    pub fn extend(&mut self, other: EnvironmentSet) {
        self.assignments.extend(other.assignments);
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnvironmentAssignment> {
        self.assignments.iter()
    }

    /// `(name, value)` pairs, suitable for `Command::envs`
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.assignments.iter().map(|a| (a.name(), a.value()))
    }

    /// Value a process would see for `name` (last write wins)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.assignments
            .iter()
            .rev()
            .find(|a| a.name() == name)
            .map(|a| a.value())
    }

    /// Rendered `NAME=VALUE` strings in order
    pub fn to_strings(&self) -> Vec<String> {
        self.assignments.iter().map(|a| a.to_string()).collect()
    }
}

impl<'a> IntoIterator for &'a EnvironmentSet {
    type Item = &'a EnvironmentAssignment;
    type IntoIter = std::slice::Iter<'a, EnvironmentAssignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}

impl FromIterator<EnvironmentAssignment> for EnvironmentSet {
    fn from_iter<I: IntoIterator<Item = EnvironmentAssignment>>(iter: I) -> Self {
        Self {
            assignments: iter.into_iter().collect(),
        }
    }
}
