//! File-backed implementations of the core store traits
//!
//! Each store keeps an in-memory collection as the authoritative view and
//! a `RecordFile` it rewrites on flush.

use std::path::{Path, PathBuf};

use coursereg_core::{
    Course, CourseStore, Enrollment, EnrollmentStatus, EnrollmentStore, MemoryCourseStore,
    MemoryEnrollmentStore, MemoryStudentStore, Student, StudentStore,
};

use super::file::RecordFile;
use crate::Result;

/// Students persisted as `id,name,email` lines
#[derive(Debug, Clone)]
pub struct FileStudentStore {
    file: RecordFile,
    inner: MemoryStudentStore,
}

impl FileStudentStore {
    /// Open the store, loading whatever valid records the file holds
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let file = RecordFile::new(path);
        let mut inner = MemoryStudentStore::new();
        for student in file.load::<Student>()? {
            inner.save(student);
        }
        Ok(Self { file, inner })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl StudentStore for FileStudentStore {
    fn save(&mut self, student: Student) {
        self.inner.save(student);
        self.file.mark_dirty();
    }

    fn find(&self, id: &str) -> Option<Student> {
        self.inner.find(id)
    }

    fn exists(&self, id: &str) -> bool {
        self.inner.exists(id)
    }

    fn find_all(&self) -> Vec<Student> {
        self.inner.find_all()
    }

    fn delete(&mut self, id: &str) -> bool {
        let removed = self.inner.delete(id);
        if removed {
            self.file.mark_dirty();
        }
        removed
    }

    fn count(&self) -> usize {
        self.inner.count()
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush(&self.inner.find_all())
    }
}

/// Courses persisted as `code,title,capacity` lines
#[derive(Debug, Clone)]
pub struct FileCourseStore {
    file: RecordFile,
    inner: MemoryCourseStore,
}

impl FileCourseStore {
    /// Open the store, loading whatever valid records the file holds
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let file = RecordFile::new(path);
        let mut inner = MemoryCourseStore::new();
        for course in file.load::<Course>()? {
            inner.save(course);
        }
        Ok(Self { file, inner })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl CourseStore for FileCourseStore {
    fn save(&mut self, course: Course) {
        self.inner.save(course);
        self.file.mark_dirty();
    }

    fn find(&self, code: &str) -> Option<Course> {
        self.inner.find(code)
    }

    fn exists(&self, code: &str) -> bool {
        self.inner.exists(code)
    }

    fn find_all(&self) -> Vec<Course> {
        self.inner.find_all()
    }

    fn delete(&mut self, code: &str) -> bool {
        let removed = self.inner.delete(code);
        if removed {
            self.file.mark_dirty();
        }
        removed
    }

    fn count(&self) -> usize {
        self.inner.count()
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush(&self.inner.find_all())
    }
}

/// Enrollments persisted as `courseCode|studentId|STATUS` lines
///
/// File order is insertion order, which carries the waitlist FIFO across
/// restarts.
#[derive(Debug, Clone)]
pub struct FileEnrollmentStore {
    file: RecordFile,
    inner: MemoryEnrollmentStore,
}

impl FileEnrollmentStore {
    /// Open the store, loading whatever valid records the file holds
    ///
    /// A pair appearing twice keeps only its later line.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let file = RecordFile::new(path);
        let mut inner = MemoryEnrollmentStore::new();
        for enrollment in file.load::<Enrollment>()? {
            inner.save(enrollment);
        }
        Ok(Self { file, inner })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl EnrollmentStore for FileEnrollmentStore {
    fn save(&mut self, enrollment: Enrollment) {
        self.inner.save(enrollment);
        self.file.mark_dirty();
    }

    fn find(&self, student_id: &str, course_code: &str) -> Option<Enrollment> {
        self.inner.find(student_id, course_code)
    }

    fn exists(&self, student_id: &str, course_code: &str) -> bool {
        self.inner.exists(student_id, course_code)
    }

    fn find_all(&self) -> Vec<Enrollment> {
        self.inner.find_all()
    }

    fn find_by_course(&self, course_code: &str) -> Vec<Enrollment> {
        self.inner.find_by_course(course_code)
    }

    fn find_by_student(&self, student_id: &str) -> Vec<Enrollment> {
        self.inner.find_by_student(student_id)
    }

    fn count_by_course_and_status(&self, course_code: &str, status: EnrollmentStatus) -> usize {
        self.inner.count_by_course_and_status(course_code, status)
    }

    fn delete(&mut self, student_id: &str, course_code: &str) -> bool {
        let removed = self.inner.delete(student_id, course_code);
        if removed {
            self.file.mark_dirty();
        }
        removed
    }

    fn replace_status(
        &mut self,
        student_id: &str,
        course_code: &str,
        expected: EnrollmentStatus,
        new_status: EnrollmentStatus,
    ) -> bool {
        let replaced = self
            .inner
            .replace_status(student_id, course_code, expected, new_status);
        if replaced {
            self.file.mark_dirty();
        }
        replaced
    }

    fn count(&self) -> usize {
        self.inner.count()
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush(&self.inner.find_all())
    }
}
