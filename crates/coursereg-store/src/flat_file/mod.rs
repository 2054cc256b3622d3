//! Flat-file stores
//!
//! One text file per collection. Opening loads the file into memory;
//! every flush rewrites it atomically from the in-memory view.

mod file;
mod stores;

use std::path::PathBuf;

use coursereg_core::RegistrationService;

use crate::Result;

pub use stores::{FileCourseStore, FileEnrollmentStore, FileStudentStore};

/// Engine wired to the flat-file stores
pub type FlatFileService =
    RegistrationService<FileStudentStore, FileCourseStore, FileEnrollmentStore>;

/// Locations of the three data files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStoreConfig {
    pub students_file: PathBuf,
    pub courses_file: PathBuf,
    pub enrollments_file: PathBuf,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            students_file: PathBuf::from("students.csv"),
            courses_file: PathBuf::from("courses.csv"),
            enrollments_file: PathBuf::from("enrollments.csv"),
        }
    }
}

/// The three flat-file stores, opened together
#[derive(Debug, Clone)]
pub struct FlatFileStores {
    pub students: FileStudentStore,
    pub courses: FileCourseStore,
    pub enrollments: FileEnrollmentStore,
}

impl FlatFileStores {
    /// Open (and load) all three files
    ///
    /// # Errors
    /// `StorageFailure` if an existing file cannot be read.
    pub fn open(config: &FileStoreConfig) -> Result<Self> {
        let stores = Self {
            students: FileStudentStore::open(&config.students_file)?,
            courses: FileCourseStore::open(&config.courses_file)?,
            enrollments: FileEnrollmentStore::open(&config.enrollments_file)?,
        };

        tracing::info!(
            students = %config.students_file.display(),
            courses = %config.courses_file.display(),
            enrollments = %config.enrollments_file.display(),
            "Opened flat-file stores"
        );
        Ok(stores)
    }

    /// Hand the stores to a registration engine
    pub fn into_service(self) -> FlatFileService {
        RegistrationService::new(self.students, self.courses, self.enrollments)
    }
}
