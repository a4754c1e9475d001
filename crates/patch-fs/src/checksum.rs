//! SHA-256 digests of document content
//!
//! Patch reports carry a digest of the document before and after an edit so
//! callers can tell at a glance whether a file actually changed. The format is
//! always `sha256:<hex>`.

use sha2::{Digest, Sha256};
use std::path::Path;

use crate::{Error, Result};

const PREFIX: &str = "sha256:";

fn finish(hasher: Sha256) -> String {
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Digest of in-memory text.
pub fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    finish(hasher)
}

/// Digest of the raw bytes of a file on disk.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read.
pub fn file_digest(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(finish(hasher))
}
