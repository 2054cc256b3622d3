//! Atomic write primitives
//!
//! Content goes to a sibling temp file which is then renamed over the
//! target, so a reader sees either the old file or the new one.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::io_error;
use crate::Result;

/// Temp file path beside the target: `students.csv` -> `students.csv.tmp`
fn temp_path_for(target_path: &Path) -> PathBuf {
    let mut name = target_path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    target_path.with_file_name(name)
}

/// Atomically replace a file's contents
///
/// Creates missing parent directories first.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error("create_data_dir", parent, e))?;
        }
    }

    let temp_path = temp_path_for(target_path);

    fs::write(&temp_path, content).map_err(|e| io_error("write_temp", &temp_path, e))?;

    fs::rename(&temp_path, target_path).map_err(|e| {
        fs::remove_file(&temp_path).ok();
        io_error("rename_temp", target_path, e)
    })?;

    Ok(())
}
