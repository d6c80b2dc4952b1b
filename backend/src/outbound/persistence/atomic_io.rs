//! Atomic replacement of the user document.
//!
//! Contents go to a hidden temporary file beside the target, are flushed to
//! disk and then renamed over the target, so readers never observe a partial
//! document.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::domain::ports::UserStoreError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The single file name `path` refers to, if it is a bare file name.
pub(super) fn file_name(path: &Utf8Path) -> Option<&str> {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(name)), None) => Some(name),
        _ => None,
    }
}

/// Replace `path` inside `dir` with `contents`.
///
/// # Errors
/// [`UserStoreError::Io`] when the temporary file cannot be written, flushed
/// or renamed. The temporary file is removed on failure.
pub(super) fn write_atomic(dir: &Dir, path: &Utf8Path, contents: &str) -> Result<(), UserStoreError> {
    let Some(target) = file_name(path) else {
        return Err(UserStoreError::io(path.as_str(), "document path must be a file name"));
    };
    let tmp_name = temp_name(target);

    let written = write_synced(dir, &tmp_name, contents)
        .and_then(|()| replace(dir, &tmp_name, target));
    if let Err(err) = written {
        drop(dir.remove_file(&tmp_name));
        return Err(UserStoreError::io(path.as_str(), err.to_string()));
    }

    // Best effort: not every platform can sync a directory handle.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
    Ok(())
}

fn temp_name(target: &str) -> String {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(".{target}.tmp.{}.{nanos}.{counter}", std::process::id())
}

fn write_synced(dir: &Dir, name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn replace(dir: &Dir, tmp_name: &str, target: &str) -> io::Result<()> {
    match dir.remove_file(target) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target)
}

#[cfg(not(windows))]
fn replace(dir: &Dir, tmp_name: &str, target: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target)
}
