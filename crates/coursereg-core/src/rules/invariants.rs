use std::collections::HashSet;

use crate::model::EnrollmentStatus;
use crate::ops::{CourseStore, EnrollmentStore};

/// A broken registry invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// More ENROLLED records than the course has seats
    OverCapacity {
        course_code: String,
        enrolled: usize,
        capacity: u32,
    },
    /// More than one record for the same (student, course) pair
    DuplicatePair {
        student_id: String,
        course_code: String,
    },
    /// A waitlist exists while the course still has free seats
    IdleWaitlist {
        course_code: String,
        free_seats: usize,
    },
}

/// Courses holding more ENROLLED records than their capacity
pub fn find_over_capacity<C, E>(courses: &C, enrollments: &E) -> Vec<InvariantViolation>
where
    C: CourseStore,
    E: EnrollmentStore,
{
    courses
        .find_all()
        .into_iter()
        .filter_map(|course| {
            let enrolled =
                enrollments.count_by_course_and_status(course.code(), EnrollmentStatus::Enrolled);
            (enrolled > course.capacity() as usize).then(|| InvariantViolation::OverCapacity {
                course_code: course.code().to_string(),
                enrolled,
                capacity: course.capacity(),
            })
        })
        .collect()
}

/// Pairs that appear in more than one record
pub fn find_duplicate_pairs<E: EnrollmentStore>(enrollments: &E) -> Vec<InvariantViolation> {
    let mut seen = HashSet::new();
    enrollments
        .find_all()
        .into_iter()
        .filter(|e| !seen.insert((e.student_id().to_string(), e.course_code().to_string())))
        .map(|e| InvariantViolation::DuplicatePair {
            student_id: e.student_id().to_string(),
            course_code: e.course_code().to_string(),
        })
        .collect()
}

/// Courses with both free seats and waiting students
///
/// Enroll only waitlists a full course and every freed seat is backfilled,
/// so this stays empty under normal operation.
pub fn find_idle_waitlists<C, E>(courses: &C, enrollments: &E) -> Vec<InvariantViolation>
where
    C: CourseStore,
    E: EnrollmentStore,
{
    courses
        .find_all()
        .into_iter()
        .filter_map(|course| {
            let code = course.code();
            let enrolled = enrollments.count_by_course_and_status(code, EnrollmentStatus::Enrolled);
            let waiting = enrollments.count_by_course_and_status(code, EnrollmentStatus::Waitlisted);
            let free_seats = (course.capacity() as usize).saturating_sub(enrolled);
            (waiting > 0 && free_seats > 0).then(|| InvariantViolation::IdleWaitlist {
                course_code: code.to_string(),
                free_seats,
            })
        })
        .collect()
}

/// Run every invariant check, returning all violations found
pub fn check_registry<C, E>(courses: &C, enrollments: &E) -> Vec<InvariantViolation>
where
    C: CourseStore,
    E: EnrollmentStore,
{
    let mut violations = find_over_capacity(courses, enrollments);
    violations.extend(find_duplicate_pairs(enrollments));
    violations.extend(find_idle_waitlists(courses, enrollments));
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, Enrollment};
    use crate::ops::{MemoryCourseStore, MemoryEnrollmentStore};

    #[test]
    fn test_clean_registry_has_no_violations() {
        let mut courses = MemoryCourseStore::new();
        courses.save(Course::new("C1", "One", 1).unwrap());
        let mut enrollments = MemoryEnrollmentStore::new();
        enrollments.save(Enrollment::new("B001", "C1", EnrollmentStatus::Enrolled).unwrap());
        enrollments.save(Enrollment::new("B002", "C1", EnrollmentStatus::Waitlisted).unwrap());

        assert!(check_registry(&courses, &enrollments).is_empty());
    }

    #[test]
    fn test_detects_over_capacity_and_idle_waitlist() {
        let mut courses = MemoryCourseStore::new();
        courses.save(Course::new("C1", "One", 1).unwrap());
        courses.save(Course::new("C2", "Two", 2).unwrap());

        let mut enrollments = MemoryEnrollmentStore::new();
        enrollments.save(Enrollment::new("B001", "C1", EnrollmentStatus::Enrolled).unwrap());
        enrollments.save(Enrollment::new("B002", "C1", EnrollmentStatus::Enrolled).unwrap());
        enrollments.save(Enrollment::new("B003", "C2", EnrollmentStatus::Waitlisted).unwrap());

        let violations = check_registry(&courses, &enrollments);
        assert!(violations.contains(&InvariantViolation::OverCapacity {
            course_code: "C1".to_string(),
            enrolled: 2,
            capacity: 1,
        }));
        assert!(violations.contains(&InvariantViolation::IdleWaitlist {
            course_code: "C2".to_string(),
            free_seats: 2,
        }));
    }
}
