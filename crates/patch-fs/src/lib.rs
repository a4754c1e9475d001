//! Filesystem layer for blockpatch
//!
//! Every patch is a one-shot read-modify-write of a single text file. This
//! crate owns both ends of that cycle: reading a document fully into memory
//! and replacing it on disk without ever exposing a partially written file.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;

pub use checksum::{content_digest, file_digest};
pub use error::{Error, Result};
pub use io::RobustnessConfig;
