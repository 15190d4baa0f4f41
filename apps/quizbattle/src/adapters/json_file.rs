//! Atomic, lock-guarded JSON file writes.
//!
//! Every save goes through `<file>.lock` (an OS-level exclusive lock taken
//! with `fs4`) and lands via `<file>.tmp` + rename, so readers never see a
//! half-written document.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs4::fs_std::FileExt;
use tracing::debug;

use crate::error::AppError;

/// Held exclusive lock on `<file>.lock`; released on drop.
#[derive(Debug)]
pub struct FileLockGuard {
    file: File,
    lock_path: PathBuf,
}

impl Drop for FileLockGuard {
    fn drop(&mut self) {
        match FileExt::unlock(&self.file) {
            Ok(()) => debug!(lock_path = %self.lock_path.display(), "file lock released"),
            // The handle is closed right after, which releases the lock anyway.
            Err(e) => debug!(
                error = %e,
                lock_path = %self.lock_path.display(),
                "file unlock returned error"
            ),
        }
    }
}

fn with_suffix(target: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = target.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

pub fn lock_path_for(target: &Path) -> PathBuf {
    with_suffix(target, ".lock")
}

pub fn tmp_path_for(target: &Path) -> PathBuf {
    with_suffix(target, ".tmp")
}

fn ensure_parent(target: &Path) -> Result<(), AppError> {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent).map_err(|e| {
            AppError::storage(format!(
                "failed to create directory {}: {e}",
                parent.display()
            ))
        }),
        _ => Ok(()),
    }
}

/// Take the writer lock for `target` without blocking.
///
/// Fails with `StoreBusy` when another handle holds it.
pub fn acquire_lock(target: &Path) -> Result<FileLockGuard, AppError> {
    ensure_parent(target)?;
    let lock_path = lock_path_for(target);

    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .read(true)
        .write(true)
        .open(&lock_path)
        .map_err(|e| {
            AppError::storage(format!(
                "failed to open lock file {}: {e}",
                lock_path.display()
            ))
        })?;

    // Ok(false) and WouldBlock both mean someone else holds the lock.
    match file.try_lock_exclusive() {
        Ok(true) => {
            debug!(lock_path = %lock_path.display(), "file lock acquired");
            Ok(FileLockGuard { file, lock_path })
        }
        Ok(false) => Err(AppError::store_busy(format!(
            "{} is locked by another writer",
            target.display()
        ))),
        Err(e) if e.kind() == ErrorKind::WouldBlock => Err(AppError::store_busy(format!(
            "{} is locked by another writer",
            target.display()
        ))),
        Err(e) => Err(AppError::storage(format!(
            "failed to lock {}: {e}",
            lock_path.display()
        ))),
    }
}

/// Read the whole file, or `None` if it does not exist.
pub fn read_optional(path: &Path) -> Result<Option<String>, AppError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AppError::storage(format!(
            "failed to read {}: {e}",
            path.display()
        ))),
    }
}

/// Replace `path` with `contents` atomically under the writer lock.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), AppError> {
    let _guard = acquire_lock(path)?;
    let tmp = tmp_path_for(path);

    let write_tmp = || -> std::io::Result<()> {
        let mut file = File::create(&tmp)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    };
    if let Err(e) = write_tmp() {
        let _ = fs::remove_file(&tmp);
        return Err(AppError::storage(format!(
            "failed to write {}: {e}",
            tmp.display()
        )));
    }

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        AppError::storage(format!(
            "failed to move {} into place: {e}",
            path.display()
        ))
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "file saved");
    Ok(())
}
