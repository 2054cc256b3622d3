//! The file half of a flat-file store: load on open, rewrite on flush

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::atomic::atomic_write;
use crate::codec::{encode_all, LineCodec};
use crate::errors::io_error;
use crate::Result;

/// A record file plus the dirty flag that decides whether flush writes
#[derive(Debug, Clone)]
pub(crate) struct RecordFile {
    path: PathBuf,
    dirty: bool,
}

impl RecordFile {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dirty: false,
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read every decodable record in file order
    ///
    /// A missing file is an empty collection. Blank lines are ignored and
    /// lines that fail to decode are skipped with a warning.
    pub(crate) fn load<T: LineCodec>(&self) -> Result<Vec<T>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "Data file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(io_error("load_records", &self.path, e)),
        };

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match T::decode(line, idx + 1) {
                Ok(record) => records.push(record),
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(
                        path = %self.path.display(),
                        line = idx + 1,
                        error = %e,
                        "Skipping invalid record"
                    );
                }
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            loaded = records.len(),
            skipped,
            "Loaded records"
        );
        Ok(records)
    }

    /// Rewrite the whole file from `records` if anything changed
    ///
    /// On failure the file stays dirty so the next flush retries.
    pub(crate) fn flush<T: LineCodec>(&mut self, records: &[T]) -> Result<()> {
        if !self.is_dirty() {
            return Ok(());
        }

        atomic_write(&self.path, encode_all(records).as_bytes())?;
        self.dirty = false;

        tracing::debug!(path = %self.path.display(), records = records.len(), "Flushed records");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursereg_core::{ExErrorKind, Student};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let file = RecordFile::new(temp_dir.path().join("absent.csv"));

        let students: Vec<Student> = file.load().unwrap();
        assert!(students.is_empty());
    }

    #[test]
    fn test_invalid_lines_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("students.csv");
        fs::write(
            &path,
            "B001,Alice,alice@uca.edu\nbroken line\n\nB002,Brian,not-an-email\nB003,Cara,cara@uca.edu\n",
        )
        .unwrap();

        let students: Vec<Student> = RecordFile::new(&path).load().unwrap();
        let ids: Vec<&str> = students.iter().map(Student::id).collect();
        assert_eq!(ids, vec!["B001", "B003"]);
    }

    #[test]
    fn test_unreadable_path_is_storage_failure() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be read as a file
        let file = RecordFile::new(temp_dir.path());

        let err = file.load::<Student>().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::StorageFailure);
    }

    #[test]
    fn test_clean_file_is_not_rewritten() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("students.csv");
        let mut file = RecordFile::new(&path);

        file.flush::<Student>(&[]).unwrap();
        assert!(!path.exists());

        file.mark_dirty();
        file.flush::<Student>(&[]).unwrap();
        assert!(path.exists());
        assert!(!file.is_dirty());
    }

    #[test]
    fn test_failed_flush_stays_dirty() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let mut file = RecordFile::new(blocker.join("students.csv"));
        file.mark_dirty();

        let err = file.flush::<Student>(&[]).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::StorageFailure);
        assert!(file.is_dirty());
    }
}
