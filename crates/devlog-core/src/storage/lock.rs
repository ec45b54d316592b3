//! Exclusive writer lock for a devlog document.
//!
//! The lock lives on a sidecar file (`DEVLOG.md.lock`) rather than on the
//! document itself: the document is replaced by rename on every append, so a
//! lock held on its old inode would not exclude a writer that opened the new
//! one.
//!
//! Uses `flock(2)` directly and owns only the `File`; `Drop` releases the
//! lock with `LOCK_UN`.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::{DevlogError, Result};

/// Guard holding the exclusive advisory lock for one document.
pub struct DocumentLock {
    #[cfg_attr(not(unix), allow(dead_code))]
    file: File,
    lock_path: PathBuf,
}

impl std::fmt::Debug for DocumentLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentLock")
            .field("lock_path", &self.lock_path)
            .finish()
    }
}

/// Sidecar lock path for `document`.
pub fn lock_path_for(document: &Path) -> PathBuf {
    let mut name = document
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".lock");
    document.with_file_name(name)
}

impl DocumentLock {
    /// Block until the exclusive lock for `document` is held.
    ///
    /// # Errors
    ///
    /// Returns [`DevlogError::Storage`] if the lock file cannot be opened or
    /// the lock cannot be taken.
    pub fn acquire(document: &Path) -> Result<Self> {
        let lock_path = lock_path_for(document);
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| {
                DevlogError::Storage(format!(
                    "Failed to open lock file {}: {}",
                    lock_path.display(),
                    e
                ))
            })?;

        lock_exclusive(&file, &lock_path)?;
        tracing::debug!(path = %lock_path.display(), "acquired document lock");
        Ok(Self { file, lock_path })
    }

    /// Path of the sidecar lock file.
    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }
}

#[cfg(unix)]
fn lock_exclusive(file: &File, lock_path: &Path) -> Result<()> {
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();
    loop {
        // SAFETY: `fd` is a valid descriptor owned by `file` for the duration
        // of this call.
        let ret = unsafe { libc::flock(fd, libc::LOCK_EX) };
        if ret == 0 {
            return Ok(());
        }
        let err = std::io::Error::last_os_error();
        if err.kind() != std::io::ErrorKind::Interrupted {
            return Err(DevlogError::Storage(format!(
                "Failed to lock {}: {}",
                lock_path.display(),
                err
            )));
        }
    }
}

#[cfg(not(unix))]
fn lock_exclusive(_file: &File, lock_path: &Path) -> Result<()> {
    tracing::warn!(
        path = %lock_path.display(),
        "advisory locking unavailable on this platform; concurrent writers are not serialized"
    );
    Ok(())
}

impl Drop for DocumentLock {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            use std::os::unix::io::AsRawFd;
            // SAFETY: the descriptor is owned by `self.file`. If unlocking
            // fails the lock is still released when the file is closed.
            unsafe {
                libc::flock(self.file.as_raw_fd(), libc::LOCK_UN);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_lock_path_is_sidecar() {
        assert_eq!(
            lock_path_for(Path::new("/repo/DEVLOG.md")),
            PathBuf::from("/repo/DEVLOG.md.lock")
        );
    }

    #[test]
    fn test_acquire_and_reacquire_after_drop() {
        let dir = tempdir().unwrap();
        let document = dir.path().join("DEVLOG.md");

        let lock = DocumentLock::acquire(&document).unwrap();
        assert!(lock.lock_path().exists());
        drop(lock);

        let again = DocumentLock::acquire(&document).unwrap();
        assert_eq!(again.lock_path(), lock_path_for(&document));
    }

    #[cfg(unix)]
    #[test]
    fn test_lock_excludes_second_descriptor() {
        use std::os::unix::io::AsRawFd;

        let dir = tempdir().unwrap();
        let document = dir.path().join("DEVLOG.md");
        let _held = DocumentLock::acquire(&document).unwrap();

        let other = File::open(lock_path_for(&document)).unwrap();
        let ret = unsafe { libc::flock(other.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) };
        assert_eq!(ret, -1);
    }
}
