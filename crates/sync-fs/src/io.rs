//! Atomic I/O operations with file locking

use std::fs;
use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use tempfile::{Builder, NamedTempFile};

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file with locking.
///
/// Creates any missing parent directories, writes to a temp file in the same
/// directory, then renames it over the destination. An existing file is
/// replaced unconditionally. The temp file is removed on every failure.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    let dir = match native_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            parent.to_path_buf()
        }
        _ => Path::new(".").to_path_buf(),
    };

    // Same directory as the target so the rename stays on one filesystem
    let mut temp = temp_file_for(&native_path, &dir)?;
    let temp_path = temp.path().to_path_buf();

    temp.as_file().lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;
    temp.write_all(content).map_err(|e| Error::io(&temp_path, e))?;
    temp.as_file().sync_all().map_err(|e| Error::io(&temp_path, e))?;
    temp.as_file().unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    // A failed persist hands the temp file back; dropping it deletes it
    temp.persist(&native_path).map_err(|e| Error::io(&native_path, e.error))?;

    tracing::trace!(path = %path, bytes = content.len(), "atomic write complete");
    Ok(())
}

fn temp_file_for(target: &Path, dir: &Path) -> Result<NamedTempFile> {
    let prefix = format!(
        ".{}.",
        target
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default()
    );
    Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| Error::io(dir, e))
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content, returning `None` when the file does not exist.
///
/// Any other failure (permissions, invalid UTF-8) is still an error.
pub fn read_text_if_exists(path: &NormalizedPath) -> Result<Option<String>> {
    match read_text(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
