//! Whole-file reads and atomic writes

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use backoff::ExponentialBackoffBuilder;
use fs2::FileExt;

use crate::{Error, Result};

/// Tuning for [`write_atomic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobustnessConfig {
    /// How long to keep retrying when another process holds the target's lock.
    pub lock_timeout: Duration,
    /// Flush the replacement to stable storage before renaming it into place.
    pub enable_fsync: bool,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self {
            lock_timeout: Duration::from_secs(5),
            enable_fsync: true,
        }
    }
}

/// Read a UTF-8 text file fully into memory.
///
/// Invalid UTF-8 surfaces as an [`Error::Io`] with kind `InvalidData`.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Replace a text file's content atomically with default robustness settings.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes(), RobustnessConfig::default())
}

/// Write `content` to `path` via a sibling temp file and a rename.
///
/// Readers see either the old file or the new one, never a truncated mix.
/// If anything fails before the rename the temp file is removed and the
/// original is left untouched. When the target already exists an exclusive
/// advisory lock is held on it for the duration of the swap, and its
/// permissions carry over to the replacement. A symlinked target is written
/// through: the link stays and the file it points to is replaced.
pub fn write_atomic(path: &Path, content: &[u8], config: RobustnessConfig) -> Result<()> {
    let target = resolve_target(path)?;
    let path = target.as_path();

    let permissions = match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(Error::io(path, e)),
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;

    let lock = if permissions.is_some() {
        Some(acquire_lock(path, config.lock_timeout)?)
    } else {
        None
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut temp = tempfile::Builder::new()
        .prefix(&format!(".{file_name}."))
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|e| Error::io(parent, e))?;

    if let Some(permissions) = permissions {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| Error::io(temp.path(), e))?;
    }
    temp.write_all(content)
        .map_err(|e| Error::io(temp.path(), e))?;
    if config.enable_fsync {
        temp.as_file()
            .sync_all()
            .map_err(|e| Error::io(temp.path(), e))?;
    }

    // Windows refuses to rename over a file that is still open.
    #[cfg(windows)]
    drop(lock);

    temp.persist(path).map_err(|e| Error::io(path, e.error))?;

    #[cfg(not(windows))]
    drop(lock);

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file atomically");
    Ok(())
}

/// Follow a symlinked target to the file it names.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            let real = fs::canonicalize(path).map_err(|e| Error::io(path, e))?;
            tracing::debug!(link = %path.display(), target = %real.display(), "writing through symlink");
            Ok(real)
        }
        _ => Ok(path.to_path_buf()),
    }
}

fn acquire_lock(path: &Path, timeout: Duration) -> Result<File> {
    let file = OpenOptions::new()
        .read(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    let policy = ExponentialBackoffBuilder::new()
        .with_initial_interval(Duration::from_millis(10))
        .with_max_interval(Duration::from_millis(250))
        .with_max_elapsed_time(Some(timeout))
        .build();

    let mut attempts = 0u32;
    backoff::retry(policy, || {
        attempts += 1;
        file.try_lock_exclusive().map_err(backoff::Error::transient)
    })
    .map_err(|_| {
        tracing::warn!(path = %path.display(), attempts, "gave up waiting for file lock");
        Error::LockFailed {
            path: path.to_path_buf(),
        }
    })?;

    Ok(file)
}
