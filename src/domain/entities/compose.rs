//! Compose document entity
//!
//! Only the `configs` and `secrets` sections of a compose file matter here;
//! every other key (services, networks, ...) is ignored.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::value_objects::ResourceKind;
use crate::error::{DeployError, DeployResult};

/// A config or secret declared in a compose document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReferencedFile {
    /// Display name (`name:`). Empty or absent means the entry is not versioned.
    #[serde(default)]
    pub name: Option<String>,
    /// Source file (`file:`), relative to the working directory or absolute
    #[serde(default)]
    pub file: Option<String>,
}

impl ReferencedFile {
    /// Whether this entry should contribute an environment variable
    pub fn is_versioned(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// The file path, or an empty string when absent
    pub fn path(&self) -> &str {
        self.file.as_deref().unwrap_or_default()
    }
}

/// The parts of a compose document used for environment synthesis
///
/// Entries are kept in key order so that synthesis is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ComposeDocument {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub configs: BTreeMap<String, ReferencedFile>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub secrets: BTreeMap<String, ReferencedFile>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, ReferencedFile>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let section: Option<BTreeMap<String, Option<ReferencedFile>>> =
        Option::deserialize(deserializer)?;
    Ok(section
        .unwrap_or_default()
        .into_iter()
        .map(|(key, entry)| (key, entry.unwrap_or_default()))
        .collect())
}

impl ComposeDocument {
    /// Parse raw document bytes.
    ///
    /// `source_name` identifies the document in error messages
    /// (a path, or `-` for stdin).
    ///
    /// `<<` merge keys are resolved before the sections are read. A document
    /// that is blank or a bare null is an empty document.
    pub fn parse(content: &[u8], source_name: &str) -> DeployResult<Self> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let parse_error = |e: serde_yaml_ng::Error| DeployError::ComposeParse {
            source_name: source_name.to_string(),
            message: single_line(&e.to_string()),
        };

        let mut value: serde_yaml_ng::Value =
            serde_yaml_ng::from_slice(content).map_err(parse_error)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        value.apply_merge().map_err(parse_error)?;

        serde_yaml_ng::from_value(value).map_err(parse_error)
    }

    /// Configs then secrets, each in key order
    pub fn entries(&self) -> impl Iterator<Item = (ResourceKind, &str, &ReferencedFile)> {
        let configs = self
            .configs
            .iter()
            .map(|(key, entry)| (ResourceKind::Config, key.as_str(), entry));
        let secrets = self
            .secrets
            .iter()
            .map(|(key, entry)| (ResourceKind::Secret, key.as_str(), entry));
        configs.chain(secrets)
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty() && self.secrets.is_empty()
    }
}

fn single_line(message: &str) -> String {
    message.split_whitespace().collect::<Vec<_>>().join(" ")
}
