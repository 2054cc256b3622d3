//! coursereg store - flat-file persistence for the registration engine
//!
//! Provides:
//! - Line codecs for the three record formats
//! - Atomic temp-file + rename writes
//! - File-backed implementations of the core store traits
//! - `FlatFileStores` for opening all three files at once

pub mod atomic;
pub mod codec;
pub mod errors;
pub mod flat_file;

// Re-export key types
pub use coursereg_core::Result;
pub use flat_file::{
    FileCourseStore, FileEnrollmentStore, FileStoreConfig, FileStudentStore, FlatFileService,
    FlatFileStores,
};
