//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk reads.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::domain::ports::FileSystem;

/// Local file system implementation
///
/// Paths are resolved against the process working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}
