//! Multi-Source Aggregator
//!
//! Applies the synthesizer to every compose document source in order and
//! concatenates the results. Unlike per-entry problems, failing to read or
//! parse a source aborts the whole batch.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::ComposeDocument;
use crate::domain::ports::FileSystem;
use crate::error::{DeployError, DeployResult};

use super::synthesize::{synthesize, Synthesis};

/// Marker that selects standard input as a document source
pub const STDIN_MARKER: &str = "-";

/// Where one compose document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Stdin,
}

impl DocumentSource {
    /// Interpret a `--compose-file` value
    pub fn parse(value: &str) -> Self {
        if value == STDIN_MARKER {
            DocumentSource::Stdin
        } else {
            DocumentSource::File(PathBuf::from(value))
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, DocumentSource::Stdin)
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::File(path) => write!(f, "{}", path.display()),
            DocumentSource::Stdin => f.write_str(STDIN_MARKER),
        }
    }
}

impl From<&str> for DocumentSource {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// Standard input, drained at most once and kept for replay
///
/// The first [`take`](Self::take) reads the stream to the end and keeps a
/// copy of the bytes. Later calls see an already-drained stream and get
/// nothing. The kept copy is what the orchestrator later receives as its
/// own stdin.
pub struct StdinCapture<R> {
    reader: Option<R>,
    captured: Option<Vec<u8>>,
}

impl<R: Read> StdinCapture<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
            captured: None,
        }
    }

    /// Drain the stream (first call only) and return its contents
    pub fn take(&mut self) -> std::io::Result<Vec<u8>> {
        let Some(mut reader) = self.reader.take() else {
            debug!("stdin already consumed, reading empty document");
            return Ok(Vec::new());
        };

        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;
        self.captured = Some(content.clone());
        Ok(content)
    }

    /// Whether any source has read stdin
    pub fn is_consumed(&self) -> bool {
        self.reader.is_none()
    }

    /// Bytes read from stdin, if it was consumed
    pub fn captured(&self) -> Option<&[u8]> {
        self.captured.as_deref()
    }

    /// Hand over the captured bytes for replay
    pub fn into_replay(self) -> Option<Vec<u8>> {
        self.captured
    }
}

/// Aggregates environment synthesis over an ordered list of sources
pub struct EnvironmentAggregator<FS>
where
    FS: FileSystem,
{
    file_system: FS,
}

impl<FS> EnvironmentAggregator<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    /// Synthesize every source in order.
    ///
    /// Returns on the first source that cannot be read or parsed, without
    /// touching the remaining sources.
    pub fn execute<R: Read>(
        &self,
        sources: &[DocumentSource],
        stdin: &mut StdinCapture<R>,
    ) -> DeployResult<Synthesis> {
        let mut combined = Synthesis::new();

        for source in sources {
            let content = self.read_source(source, stdin)?;
            let document = ComposeDocument::parse(&content, &source.to_string())?;
            debug!(
                "{}: {} configs, {} secrets",
                source,
                document.configs.len(),
                document.secrets.len()
            );
            combined.extend(synthesize(&document, &self.file_system));
        }

        Ok(combined)
    }

    fn read_source<R: Read>(
        &self,
        source: &DocumentSource,
        stdin: &mut StdinCapture<R>,
    ) -> DeployResult<Vec<u8>> {
        match source {
            DocumentSource::Stdin => stdin.take().map_err(DeployError::StdinRead),
            DocumentSource::File(path) => self.read_file(path),
        }
    }

    fn read_file(&self, path: &Path) -> DeployResult<Vec<u8>> {
        debug!("Reading compose file {}", path.display());
        self.file_system
            .read(path)
            .map_err(|source| DeployError::DocumentRead {
                path: path.to_path_buf(),
                source,
            })
    }
}
