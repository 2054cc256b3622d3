//! Registration engine
//!
//! Owns the three stores and enforces the two rules the rest of the system
//! relies on:
//! - a course never has more ENROLLED records than its capacity
//! - a freed seat goes to the earliest WAITLISTED record for that course
//!
//! Every public operation runs to completion, including the flush of each
//! store it mutated, before returning. The check-then-act sequences here
//! assume a single caller; concurrent use needs a mutual-exclusion region
//! around each operation.
//!
//! ## Logging
//!
//! Mutating operations and `course_enrollment_info` are bracketed with
//! `log_op_start!` / `log_op_end!` / `log_op_error!`. Domain actions are
//! logged with a stable `action` field (`ENROLL`, `PROMOTE`, ...).
//!
//! ## Storage failures
//!
//! In-memory state is authoritative. If a flush fails the caller gets
//! `StorageFailure`, the mutation stays applied in memory, and the next
//! successful flush rewrites the durable copy in full.

use std::time::Instant;

use coursereg_core_types::schema::{
    DOMAIN_ADD_COURSE, DOMAIN_ADD_STUDENT, DOMAIN_DROP, DOMAIN_ENROLL, DOMAIN_PROMOTE,
    DOMAIN_WAITLIST, DOMAIN_WAITLIST_REMOVE,
};

use super::store::{CourseStore, EnrollmentStore, StudentStore};
use crate::errors::{RegistrationError, Result};
use crate::model::{Course, Enrollment, EnrollmentStatus, Student};
use crate::outcome::{CourseEnrollmentInfo, CourseRoster, DropOutcome, EnrollmentOutcome};
use crate::{log_op_end, log_op_error, log_op_start};

/// The enrollment engine
///
/// Generic over its stores so the flat-file and in-memory implementations
/// can be swapped without touching the rules.
#[derive(Debug)]
pub struct RegistrationService<S, C, E> {
    students: S,
    courses: C,
    enrollments: E,
}

impl<S, C, E> RegistrationService<S, C, E>
where
    S: StudentStore,
    C: CourseStore,
    E: EnrollmentStore,
{
    pub fn new(students: S, courses: C, enrollments: E) -> Self {
        Self {
            students,
            courses,
            enrollments,
        }
    }

    /// Read-only view of the student store
    pub fn students(&self) -> &S {
        &self.students
    }

    /// Read-only view of the course store
    pub fn courses(&self) -> &C {
        &self.courses
    }

    /// Read-only view of the enrollment store
    pub fn enrollments(&self) -> &E {
        &self.enrollments
    }

    /// Give the stores back, e.g. to reopen them in a test
    pub fn into_stores(self) -> (S, C, E) {
        (self.students, self.courses, self.enrollments)
    }

    // ===== Student operations =====

    /// Register a new student
    ///
    /// # Errors
    /// * `DuplicateStudent` - a student with this ID already exists
    /// * `InvalidData` - a field failed validation
    /// * `StorageFailure` - the student store could not be flushed
    pub fn add_student(&mut self, id: &str, name: &str, email: &str) -> Result<()> {
        log_op_start!("add_student", student_id = id);
        let start = Instant::now();

        self.add_student_impl(id, name, email).map_err(|e| {
            log_op_error!(
                "add_student",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "add_student",
            duration_ms = start.elapsed().as_millis() as u64,
            student_id = id
        );
        Ok(())
    }

    fn add_student_impl(&mut self, id: &str, name: &str, email: &str) -> Result<()> {
        if self.students.exists(id.trim()) {
            return Err(RegistrationError::DuplicateStudent {
                student_id: id.trim().to_string(),
            });
        }

        let student = Student::new(id, name, email)?;
        let student_id = student.id().to_string();
        self.students.save(student);
        self.students.flush()?;

        tracing::info!(action = DOMAIN_ADD_STUDENT, student_id = %student_id);
        Ok(())
    }

    pub fn find_student(&self, id: &str) -> Option<Student> {
        self.students.find(id.trim())
    }

    pub fn list_students(&self) -> Vec<Student> {
        self.students.find_all()
    }

    // ===== Course operations =====

    /// Register a new course
    ///
    /// # Errors
    /// * `DuplicateCourse` - a course with this code already exists
    /// * `InvalidData` - a field failed validation or capacity is outside `[1, 500]`
    /// * `StorageFailure` - the course store could not be flushed
    pub fn add_course(&mut self, code: &str, title: &str, capacity: i64) -> Result<()> {
        log_op_start!("add_course", course_code = code, capacity = capacity);
        let start = Instant::now();

        self.add_course_impl(code, title, capacity).map_err(|e| {
            log_op_error!(
                "add_course",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "add_course",
            duration_ms = start.elapsed().as_millis() as u64,
            course_code = code
        );
        Ok(())
    }

    fn add_course_impl(&mut self, code: &str, title: &str, capacity: i64) -> Result<()> {
        if self.courses.exists(code.trim()) {
            return Err(RegistrationError::DuplicateCourse {
                course_code: code.trim().to_string(),
            });
        }

        let course = Course::new(code, title, capacity)?;
        let course_code = course.code().to_string();
        self.courses.save(course);
        self.courses.flush()?;

        tracing::info!(action = DOMAIN_ADD_COURSE, course_code = %course_code);
        Ok(())
    }

    pub fn find_course(&self, code: &str) -> Option<Course> {
        self.courses.find(code.trim())
    }

    pub fn list_courses(&self) -> Vec<Course> {
        self.courses.find_all()
    }

    // ===== Enrollment operations =====

    /// Enroll a student, or queue them if the course is full
    ///
    /// The new record is appended after every existing record for the
    /// course, so a waitlisted student is served after everyone already
    /// waiting.
    ///
    /// # Errors
    /// * `StudentNotFound` / `CourseNotFound` - unknown reference
    /// * `AlreadyEnrolled` / `AlreadyWaitlisted` - the pair already has a record
    /// * `StorageFailure` - the enrollment store could not be flushed
    pub fn enroll_student(
        &mut self,
        student_id: &str,
        course_code: &str,
    ) -> Result<EnrollmentOutcome> {
        let student_id = student_id.trim();
        let course_code = course_code.trim();

        log_op_start!(
            "enroll_student",
            student_id = student_id,
            course_code = course_code
        );
        let start = Instant::now();

        let outcome = self
            .enroll_student_impl(student_id, course_code)
            .map_err(|e| {
                log_op_error!(
                    "enroll_student",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    student_id = student_id,
                    course_code = course_code
                );
                e
            })?;

        log_op_end!(
            "enroll_student",
            duration_ms = start.elapsed().as_millis() as u64,
            student_id = student_id,
            course_code = course_code,
            outcome = ?outcome
        );
        Ok(outcome)
    }

    fn enroll_student_impl(
        &mut self,
        student_id: &str,
        course_code: &str,
    ) -> Result<EnrollmentOutcome> {
        if !self.students.exists(student_id) {
            return Err(RegistrationError::StudentNotFound {
                student_id: student_id.to_string(),
            });
        }

        let course = self.require_course(course_code)?;

        if let Some(existing) = self.enrollments.find(student_id, course_code) {
            let (student_id, course_code) = (student_id.to_string(), course_code.to_string());
            return Err(match existing.status() {
                EnrollmentStatus::Enrolled => RegistrationError::AlreadyEnrolled {
                    student_id,
                    course_code,
                },
                EnrollmentStatus::Waitlisted => RegistrationError::AlreadyWaitlisted {
                    student_id,
                    course_code,
                },
            });
        }

        let enrolled = self
            .enrollments
            .count_by_course_and_status(course_code, EnrollmentStatus::Enrolled);

        let outcome = if enrolled < course.capacity() as usize {
            EnrollmentOutcome::Enrolled
        } else {
            EnrollmentOutcome::Waitlisted
        };

        self.enrollments
            .save(Enrollment::new(student_id, course_code, outcome.status())?);
        self.enrollments.flush()?;

        let action = match outcome {
            EnrollmentOutcome::Enrolled => DOMAIN_ENROLL,
            EnrollmentOutcome::Waitlisted => DOMAIN_WAITLIST,
        };
        tracing::info!(action, student_id, course_code);

        Ok(outcome)
    }

    /// Remove a student from a course or its waitlist
    ///
    /// Dropping an ENROLLED student frees a seat; the earliest WAITLISTED
    /// record for the course, if any, is promoted into it through a single
    /// `replace_status` call on the store.
    ///
    /// # Errors
    /// * `CourseNotFound` - unknown course
    /// * `NotEnrolled` - the pair has no record
    /// * `StorageFailure` - the enrollment store could not be flushed
    pub fn drop_student(&mut self, student_id: &str, course_code: &str) -> Result<DropOutcome> {
        let student_id = student_id.trim();
        let course_code = course_code.trim();

        log_op_start!(
            "drop_student",
            student_id = student_id,
            course_code = course_code
        );
        let start = Instant::now();

        let outcome = self.drop_student_impl(student_id, course_code).map_err(|e| {
            log_op_error!(
                "drop_student",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                student_id = student_id,
                course_code = course_code
            );
            e
        })?;

        log_op_end!(
            "drop_student",
            duration_ms = start.elapsed().as_millis() as u64,
            student_id = student_id,
            course_code = course_code,
            outcome = %outcome,
            promoted_id = outcome.promoted_student_id()
        );
        Ok(outcome)
    }

    fn drop_student_impl(&mut self, student_id: &str, course_code: &str) -> Result<DropOutcome> {
        let course = self.require_course(course_code)?;

        let status = self
            .enrollments
            .find(student_id, course_code)
            .map(|e| e.status());

        match status {
            Some(EnrollmentStatus::Enrolled) => {
                self.enrollments.delete(student_id, course_code);
                tracing::info!(action = DOMAIN_DROP, student_id, course_code);

                let promoted = self.promote_next(&course);
                self.enrollments.flush()?;

                Ok(match promoted {
                    Some(promoted_student_id) => DropOutcome::DroppedWithPromotion {
                        promoted_student_id,
                    },
                    None => DropOutcome::Dropped,
                })
            }
            Some(EnrollmentStatus::Waitlisted) => {
                self.enrollments.delete(student_id, course_code);
                self.enrollments.flush()?;
                tracing::info!(action = DOMAIN_WAITLIST_REMOVE, student_id, course_code);
                Ok(DropOutcome::RemovedFromWaitlist)
            }
            None => Err(RegistrationError::NotEnrolled {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            }),
        }
    }

    /// Move the head of the course's waitlist into a free seat
    ///
    /// Returns the promoted student's ID. Does nothing while the course is
    /// at or above capacity, which can only happen with hand-edited data.
    fn promote_next(&mut self, course: &Course) -> Option<String> {
        let code = course.code();
        let enrolled = self
            .enrollments
            .count_by_course_and_status(code, EnrollmentStatus::Enrolled);
        if enrolled >= course.capacity() as usize {
            return None;
        }

        let head = self
            .enrollments
            .find_by_course_and_status(code, EnrollmentStatus::Waitlisted)
            .into_iter()
            .next()?;

        let promoted = self.enrollments.replace_status(
            head.student_id(),
            code,
            EnrollmentStatus::Waitlisted,
            EnrollmentStatus::Enrolled,
        );
        if !promoted {
            return None;
        }

        tracing::info!(
            action = DOMAIN_PROMOTE,
            student_id = head.student_id(),
            course_code = code
        );
        Some(head.student_id().to_string())
    }

    // ===== Query operations =====

    /// Seat accounting for a course
    ///
    /// Pure read: two calls without an intervening mutation return equal values.
    ///
    /// # Errors
    /// `CourseNotFound` if the course does not exist.
    pub fn course_enrollment_info(&self, course_code: &str) -> Result<CourseEnrollmentInfo> {
        let course_code = course_code.trim();
        log_op_start!("course_enrollment_info", course_code = course_code);
        let start = Instant::now();

        let info = self.require_course(course_code).map(|course| {
            let enrolled_count = self
                .enrollments
                .count_by_course_and_status(course_code, EnrollmentStatus::Enrolled);
            let waitlist_count = self
                .enrollments
                .count_by_course_and_status(course_code, EnrollmentStatus::Waitlisted);
            CourseEnrollmentInfo {
                course,
                enrolled_count,
                waitlist_count,
            }
        });

        match &info {
            Ok(_) => {
                log_op_end!(
                    "course_enrollment_info",
                    duration_ms = start.elapsed().as_millis() as u64,
                    course_code = course_code
                );
            }
            Err(e) => {
                log_op_error!(
                    "course_enrollment_info",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
            }
        }
        info
    }

    /// Enrolled students and the waitlist for a course, each in FIFO order
    ///
    /// # Errors
    /// `CourseNotFound` if the course does not exist.
    pub fn course_roster(&self, course_code: &str) -> Result<CourseRoster> {
        let course = self.require_course(course_code.trim())?;

        let ids = |status| {
            self.enrollments
                .find_by_course_and_status(course.code(), status)
                .iter()
                .map(|e| e.student_id().to_string())
                .collect::<Vec<_>>()
        };
        let enrolled = ids(EnrollmentStatus::Enrolled);
        let waitlist = ids(EnrollmentStatus::Waitlisted);

        Ok(CourseRoster {
            course,
            enrolled,
            waitlist,
        })
    }

    /// Every enrollment record held by a student, empty if none
    pub fn student_enrollments(&self, student_id: &str) -> Vec<Enrollment> {
        self.enrollments.find_by_student(student_id.trim())
    }

    fn require_course(&self, course_code: &str) -> Result<Course> {
        self.courses
            .find(course_code)
            .ok_or_else(|| RegistrationError::CourseNotFound {
                course_code: course_code.to_string(),
            })
    }
}
