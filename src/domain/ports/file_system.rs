//! FileSystem port - abstraction over reading compose documents and the
//! files they reference
//!
//! This trait lets the application layer fingerprint files without
//! depending on a concrete implementation (local disk, in-memory mock).

use std::io::{self, Read};
use std::path::Path;

/// Abstract read-only file system
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MockFs` (tests) - in-memory
pub trait FileSystem {
    /// Open `path` for reading.
    ///
    /// The handle is released when the returned reader is dropped.
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>>;

    /// Read the whole file
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let mut content = Vec::new();
        self.open(path)?.read_to_end(&mut content)?;
        Ok(content)
    }
}
