//! Checksums of schema sources, recorded in generated headers

use sha2::{Digest, Sha256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Header line prefix carrying the schema digest
pub const HEADER_PREFIX: &str = "// Schema sha256: ";

/// SHA256 checksum of a schema source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checksum(String);

impl Checksum {
    /// Compute checksum from raw bytes
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = Sha256::digest(data);
        Self(format!("{:x}", hash))
    }

    /// Compute checksum of a schema source text
    pub fn of_source(content: &str) -> Self {
        Self::from_bytes(content.as_bytes())
    }

    /// Checksum recorded in the header of previously generated code
    pub fn from_generated(code: &str) -> Option<Self> {
        code.lines()
            .take_while(|line| line.starts_with("//"))
            .find_map(|line| line.strip_prefix(HEADER_PREFIX))
            .map(|digest| Self(digest.trim().to_string()))
    }

    /// Get the hex string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 hex digits, for log lines
    pub fn short(&self) -> &str {
        self.0.get(..12).unwrap_or(&self.0)
    }

    /// Verify that content matches this checksum
    pub fn verify(&self, content: &str) -> bool {
        Self::of_source(content) == *self
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Checksum {
    fn from(s: String) -> Self {
        Self(s)
    }
}
