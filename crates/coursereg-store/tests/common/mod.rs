use std::path::Path;

use coursereg_store::{FileStoreConfig, FlatFileService, FlatFileStores};

/// Data file locations inside a test directory
#[allow(dead_code)]
pub fn config_in(dir: &Path) -> FileStoreConfig {
    FileStoreConfig {
        students_file: dir.join("students.csv"),
        courses_file: dir.join("courses.csv"),
        enrollments_file: dir.join("enrollments.csv"),
    }
}

/// Open a flat-file backed engine over a test directory
#[allow(dead_code)]
pub fn open_service(dir: &Path) -> FlatFileService {
    FlatFileStores::open(&config_in(dir)).unwrap().into_service()
}

/// Register students with generated names and emails
#[allow(dead_code)]
pub fn add_students(svc: &mut FlatFileService, ids: &[&str]) {
    for id in ids {
        svc.add_student(id, &format!("Student {}", id), &format!("{}@uca.edu", id.to_lowercase()))
            .unwrap();
    }
}
