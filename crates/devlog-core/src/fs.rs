//! Filesystem utilities for atomic operations.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Atomically rename a file, with fallback for platforms where rename fails if target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination already exists.
/// This function handles that case by removing the destination first and retrying.
///
/// If the rename ultimately fails, the temp file is cleaned up.
///
/// # Errors
///
/// Returns an error if the rename fails even after the fallback attempt.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        // Best-effort replace on platforms where rename fails if target exists.
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            // Clean up the temp file on failure
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

/// Sibling temp path for `destination`, e.g. `.DEVLOG.md.<uuid>.tmp`.
fn temp_path_for(destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "devlog".to_string());
    destination.with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4()))
}

/// Replace `destination` with `contents` via a synced temp file and rename.
///
/// Readers observe either the old or the new contents, never a partial write.
/// A symlinked destination is resolved first, so the link survives and its
/// target is replaced.
pub fn write_atomic(destination: &Path, contents: &str) -> io::Result<()> {
    let target = fs::canonicalize(destination).unwrap_or_else(|_| destination.to_path_buf());
    let temp = temp_path_for(&target);
    let written = File::create(&temp).and_then(|mut file| {
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    });
    if let Err(err) = written {
        let _ = fs::remove_file(&temp);
        return Err(err);
    }
    if let Ok(metadata) = fs::metadata(&target) {
        if let Err(err) = fs::set_permissions(&temp, metadata.permissions()) {
            tracing::warn!(
                path = %target.display(),
                error = %err,
                "could not carry permissions over to the rewritten document"
            );
        }
    }
    rename_with_fallback(&temp, &target)
}
