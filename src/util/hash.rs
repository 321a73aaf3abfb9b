//! Hashing utilities for stable action fingerprints.
//!
//! Synthesized commands are cached upstream keyed on their text, so every
//! hash that ends up inside a command must be stable across processes and
//! hosts. SHA-256 is pinned here for that reason; nothing uses the standard
//! library's process-seeded hashers.

use std::path::Path;

use sha2::{Digest, Sha256};

/// Compute SHA256 hash of a byte slice.
pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Compute SHA256 hash of a string.
pub fn sha256_str(s: &str) -> String {
    sha256_bytes(s.as_bytes())
}

/// A hasher for building fingerprints from multiple components.
#[derive(Default)]
pub struct Fingerprint {
    hasher: Sha256,
}

impl Fingerprint {
    /// Create a new fingerprint builder.
    pub fn new() -> Self {
        Fingerprint {
            hasher: Sha256::new(),
        }
    }

    /// Add a string component to the fingerprint.
    pub fn update_str(&mut self, s: &str) -> &mut Self {
        self.hasher.update(s.as_bytes());
        self.hasher.update(b"\0"); // Separator
        self
    }

    /// Add multiple strings to the fingerprint.
    pub fn update_strs<'a>(&mut self, items: impl IntoIterator<Item = &'a str>) -> &mut Self {
        for s in items {
            self.update_str(s);
        }
        self
    }

    /// Finalize and return the fingerprint as a hex string.
    pub fn finish(self) -> String {
        hex::encode(self.hasher.finalize())
    }

    /// Finalize and return a short fingerprint (first 16 chars).
    pub fn finish_short(self) -> String {
        self.finish()[..16].to_string()
    }
}

/// Derive the `-C metadata=` discriminator for a source file.
///
/// This is an identity discriminator, not a content hash: the contract is
/// "same source path, same token". It keeps output names of distinct build
/// configurations of one source file from colliding.
pub fn metadata_token(src: &Path) -> String {
    let mut fp = Fingerprint::new();
    fp.update_str(&src.to_string_lossy());
    fp.finish_short()
}
