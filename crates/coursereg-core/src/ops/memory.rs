use std::collections::BTreeMap;

use super::store::{CourseStore, EnrollmentStore, StudentStore};
use crate::errors::Result;
use crate::model::{Course, Enrollment, EnrollmentStatus, Student};

/// In-memory student store
///
/// Sorted by ID so listings are deterministic. Not thread-safe (no
/// Arc/RwLock) - designed for the single-caller engine.
#[derive(Debug, Clone, Default)]
pub struct MemoryStudentStore {
    students: BTreeMap<String, Student>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StudentStore for MemoryStudentStore {
    fn save(&mut self, student: Student) {
        self.students.insert(student.id().to_string(), student);
    }

    fn find(&self, id: &str) -> Option<Student> {
        self.students.get(id).cloned()
    }

    fn exists(&self, id: &str) -> bool {
        self.students.contains_key(id)
    }

    fn find_all(&self) -> Vec<Student> {
        self.students.values().cloned().collect()
    }

    fn delete(&mut self, id: &str) -> bool {
        self.students.remove(id).is_some()
    }

    fn count(&self) -> usize {
        self.students.len()
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// In-memory course store, sorted by code
#[derive(Debug, Clone, Default)]
pub struct MemoryCourseStore {
    courses: BTreeMap<String, Course>,
}

impl MemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CourseStore for MemoryCourseStore {
    fn save(&mut self, course: Course) {
        self.courses.insert(course.code().to_string(), course);
    }

    fn find(&self, code: &str) -> Option<Course> {
        self.courses.get(code).cloned()
    }

    fn exists(&self, code: &str) -> bool {
        self.courses.contains_key(code)
    }

    fn find_all(&self) -> Vec<Course> {
        self.courses.values().cloned().collect()
    }

    fn delete(&mut self, code: &str) -> bool {
        self.courses.remove(code).is_some()
    }

    fn count(&self) -> usize {
        self.courses.len()
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// In-memory enrollment store
///
/// A plain vector: its order is the insertion order the waitlist relies on.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnrollmentStore {
    enrollments: Vec<Enrollment>,
}

impl MemoryEnrollmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, student_id: &str, course_code: &str) -> Option<usize> {
        self.enrollments
            .iter()
            .position(|e| e.matches(student_id, course_code))
    }
}

impl EnrollmentStore for MemoryEnrollmentStore {
    fn save(&mut self, enrollment: Enrollment) {
        self.delete(enrollment.student_id(), enrollment.course_code());
        self.enrollments.push(enrollment);
    }

    fn find(&self, student_id: &str, course_code: &str) -> Option<Enrollment> {
        self.position(student_id, course_code)
            .map(|i| self.enrollments[i].clone())
    }

    fn find_all(&self) -> Vec<Enrollment> {
        self.enrollments.clone()
    }

    fn find_by_course(&self, course_code: &str) -> Vec<Enrollment> {
        self.enrollments
            .iter()
            .filter(|e| e.course_code() == course_code)
            .cloned()
            .collect()
    }

    fn find_by_student(&self, student_id: &str) -> Vec<Enrollment> {
        self.enrollments
            .iter()
            .filter(|e| e.student_id() == student_id)
            .cloned()
            .collect()
    }

    fn count_by_course_and_status(&self, course_code: &str, status: EnrollmentStatus) -> usize {
        self.enrollments
            .iter()
            .filter(|e| e.course_code() == course_code && e.status() == status)
            .count()
    }

    fn delete(&mut self, student_id: &str, course_code: &str) -> bool {
        let before = self.enrollments.len();
        self.enrollments
            .retain(|e| !e.matches(student_id, course_code));
        self.enrollments.len() != before
    }

    fn replace_status(
        &mut self,
        student_id: &str,
        course_code: &str,
        expected: EnrollmentStatus,
        new_status: EnrollmentStatus,
    ) -> bool {
        match self.position(student_id, course_code) {
            Some(i) if self.enrollments[i].status() == expected => {
                let current = self.enrollments.remove(i);
                self.enrollments.push(current.with_status(new_status));
                true
            }
            _ => false,
        }
    }

    fn count(&self) -> usize {
        self.enrollments.len()
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
