//! Behavior when the durable medium rejects a flush
//!
//! In-memory state stays authoritative: the caller sees `StorageFailure`,
//! the mutation is kept, and the next good flush carries it along.

use coursereg_core::{
    Enrollment, EnrollmentStatus, EnrollmentStore, ExErrorKind, MemoryCourseStore,
    MemoryEnrollmentStore, MemoryStudentStore, RegistrationError, RegistrationService, Result,
};

/// Enrollment store whose flush can be switched to fail
#[derive(Default)]
struct FlakyEnrollmentStore {
    inner: MemoryEnrollmentStore,
    fail_flush: bool,
    flushed: Vec<Enrollment>,
}

impl EnrollmentStore for FlakyEnrollmentStore {
    fn save(&mut self, enrollment: Enrollment) {
        self.inner.save(enrollment);
    }

    fn find(&self, student_id: &str, course_code: &str) -> Option<Enrollment> {
        self.inner.find(student_id, course_code)
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

    fn delete(&mut self, student_id: &str, course_code: &str) -> bool {
        self.inner.delete(student_id, course_code)
    }

    fn replace_status(
        &mut self,
        student_id: &str,
        course_code: &str,
        expected: EnrollmentStatus,
        new_status: EnrollmentStatus,
    ) -> bool {
        self.inner
            .replace_status(student_id, course_code, expected, new_status)
    }

    fn count(&self) -> usize {
        self.inner.count()
    }

    fn flush(&mut self) -> Result<()> {
        if self.fail_flush {
            return Err(RegistrationError::StorageFailure {
                op: "flush enrollments".to_string(),
                message: "disk full".to_string(),
            });
        }
        self.flushed = self.inner.find_all();
        Ok(())
    }
}

type FlakyService = RegistrationService<MemoryStudentStore, MemoryCourseStore, FlakyEnrollmentStore>;

fn flaky_service() -> FlakyService {
    let mut svc = RegistrationService::new(
        MemoryStudentStore::new(),
        MemoryCourseStore::new(),
        FlakyEnrollmentStore::default(),
    );
    svc.add_course("CSCI4490", "Software Engineering", 1).unwrap();
    for id in ["B001", "B002"] {
        svc.add_student(id, "Student", &format!("{}@uca.edu", id.to_lowercase()))
            .unwrap();
    }
    svc
}

fn set_failing(svc: FlakyService, fail: bool) -> FlakyService {
    let (students, courses, mut enrollments) = svc.into_stores();
    enrollments.fail_flush = fail;
    RegistrationService::new(students, courses, enrollments)
}

#[test]
fn test_failed_flush_surfaces_storage_failure_and_keeps_memory() {
    let mut svc = set_failing(flaky_service(), true);

    let err = svc.enroll_student("B001", "CSCI4490").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::StorageFailure);

    // The record is live in memory even though the durable copy missed it
    assert!(svc.enrollments().exists("B001", "CSCI4490"));
    assert!(svc.enrollments().flushed.is_empty());
    assert_eq!(
        svc.course_enrollment_info("CSCI4490").unwrap().enrolled_count,
        1
    );
}

#[test]
fn test_next_successful_flush_resyncs_durable_copy() {
    let mut svc = set_failing(flaky_service(), true);
    svc.enroll_student("B001", "CSCI4490").unwrap_err();

    let mut svc = set_failing(svc, false);
    assert!(svc.enroll_student("B002", "CSCI4490").unwrap().is_waitlisted());

    let flushed: Vec<(String, EnrollmentStatus)> = svc
        .enrollments()
        .flushed
        .iter()
        .map(|e| (e.student_id().to_string(), e.status()))
        .collect();
    assert_eq!(
        flushed,
        vec![
            ("B001".to_string(), EnrollmentStatus::Enrolled),
            ("B002".to_string(), EnrollmentStatus::Waitlisted),
        ]
    );
}

#[test]
fn test_failed_flush_during_drop_keeps_promotion() {
    let mut svc = flaky_service();
    svc.enroll_student("B001", "CSCI4490").unwrap();
    svc.enroll_student("B002", "CSCI4490").unwrap();

    let mut svc = set_failing(svc, true);
    let err = svc.drop_student("B001", "CSCI4490").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::StorageFailure);

    let roster = svc.course_roster("CSCI4490").unwrap();
    assert_eq!(roster.enrolled, vec!["B002"]);
    assert!(roster.waitlist.is_empty());
}
