//! Content Fingerprint Value Object
//!
//! A short, immutable digest identifying one version of a file's content.
//! Injected into the orchestrator environment so that a changed config or
//! secret file produces a new resource name.

use std::fmt;
use std::fmt::Write as _;
use std::io::{self, Read};

use sha2::{Digest, Sha256};

/// Content fingerprint value object
///
/// The first 8 bytes of the SHA-256 digest, rendered as 16 lowercase hex
/// characters. Good for change detection, not a security boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Number of digest bytes kept
    pub const BYTES: usize = 8;

    /// Length of the rendered fingerprint
    pub const LEN: usize = Self::BYTES * 2;

    /// Fingerprint an in-memory buffer
    pub fn from_bytes(content: &[u8]) -> Self {
        Self::from_digest(&Sha256::digest(content))
    }

    /// Fingerprint everything `reader` yields, streaming it through the hasher
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut hasher = Sha256::new();
        io::copy(&mut reader, &mut hasher)?;
        Ok(Self::from_digest(&hasher.finalize()))
    }

    fn from_digest(digest: &[u8]) -> Self {
        let mut hex = String::with_capacity(Self::LEN);
        for byte in &digest[..Self::BYTES] {
            // Writing to a String cannot fail
            let _ = write!(hex, "{:02x}", byte);
        }
        Self(hex)
    }

    /// Get the hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
