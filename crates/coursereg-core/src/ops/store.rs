//! Store contracts for the three keyed collections
//!
//! The engine only ever talks to these traits, so a flat-file store and an
//! in-memory store are interchangeable. Mutations (`save`, `delete`,
//! `replace_status`) update the store's in-memory view; `flush` commits that
//! whole view to the durable medium.

use crate::errors::Result;
use crate::model::{Course, Enrollment, EnrollmentStatus, Student};

/// Students keyed by ID
pub trait StudentStore {
    /// Insert or replace the student with the same ID
    fn save(&mut self, student: Student);

    fn find(&self, id: &str) -> Option<Student>;

    fn exists(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    fn find_all(&self) -> Vec<Student>;

    /// Remove a student, returning true if one was removed
    fn delete(&mut self, id: &str) -> bool;

    fn count(&self) -> usize;

    /// Commit pending changes to durable storage
    ///
    /// # Errors
    /// `StorageFailure` if the medium is unwritable.
    fn flush(&mut self) -> Result<()>;
}

/// Courses keyed by code
pub trait CourseStore {
    /// Insert or replace the course with the same code
    fn save(&mut self, course: Course);

    fn find(&self, code: &str) -> Option<Course>;

    fn exists(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    fn find_all(&self) -> Vec<Course>;

    /// Remove a course, returning true if one was removed
    fn delete(&mut self, code: &str) -> bool;

    fn count(&self) -> usize;

    /// Commit pending changes to durable storage
    ///
    /// # Errors
    /// `StorageFailure` if the medium is unwritable.
    fn flush(&mut self) -> Result<()>;
}

/// Enrollment records keyed by (student ID, course code)
///
/// Insertion order is significant: per course it is the FIFO order of the
/// waitlist. Every `find_*` method returns records in insertion order.
pub trait EnrollmentStore {
    /// Append a record, first removing any record for the same pair
    fn save(&mut self, enrollment: Enrollment);

    fn find(&self, student_id: &str, course_code: &str) -> Option<Enrollment>;

    fn exists(&self, student_id: &str, course_code: &str) -> bool {
        self.find(student_id, course_code).is_some()
    }

    fn find_all(&self) -> Vec<Enrollment>;

    fn find_by_course(&self, course_code: &str) -> Vec<Enrollment>;

    fn find_by_student(&self, student_id: &str) -> Vec<Enrollment>;

    fn find_by_course_and_status(
        &self,
        course_code: &str,
        status: EnrollmentStatus,
    ) -> Vec<Enrollment> {
        self.find_by_course(course_code)
            .into_iter()
            .filter(|e| e.status() == status)
            .collect()
    }

    fn count_by_course_and_status(&self, course_code: &str, status: EnrollmentStatus) -> usize {
        self.find_by_course_and_status(course_code, status).len()
    }

    /// Remove the pair's record, returning true if one was removed
    fn delete(&mut self, student_id: &str, course_code: &str) -> bool;

    /// Transition a pair's status in a single step
    ///
    /// Succeeds only if the pair currently holds `expected`. The transitioned
    /// record moves to the tail of the insertion order, exactly as a
    /// delete followed by a save would place it. Returns true on success.
    fn replace_status(
        &mut self,
        student_id: &str,
        course_code: &str,
        expected: EnrollmentStatus,
        new_status: EnrollmentStatus,
    ) -> bool;

    fn count(&self) -> usize;

    /// Commit pending changes to durable storage
    ///
    /// # Errors
    /// `StorageFailure` if the medium is unwritable.
    fn flush(&mut self) -> Result<()>;
}
