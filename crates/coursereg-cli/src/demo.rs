//! Demo data for `--demo`

use coursereg_core::{
    CourseStore, EnrollmentStore, ExErrorKind, RegistrationService, Result, StudentStore,
};

const DEMO_STUDENTS: [(&str, &str, &str); 2] = [
    ("B001", "Alice", "alice@uca.edu"),
    ("B002", "Brian", "brian@uca.edu"),
];

const DEMO_COURSES: [(&str, &str, i64); 2] = [
    ("CSCI4490", "Software Engineering", 2),
    ("MATH1496", "Calculus I", 50),
];

/// Seed the demo students and courses, returning how many were new
///
/// Records already present are left alone, so seeding twice is harmless.
///
/// # Errors
/// Any failure other than a duplicate, e.g. `StorageFailure`.
pub fn seed_demo<S, C, E>(svc: &mut RegistrationService<S, C, E>) -> Result<usize>
where
    S: StudentStore,
    C: CourseStore,
    E: EnrollmentStore,
{
    tracing::info!("Seeding demo data");
    let mut added = 0;

    for (id, name, email) in DEMO_STUDENTS {
        added += count_new(svc.add_student(id, name, email))?;
    }
    for (code, title, capacity) in DEMO_COURSES {
        added += count_new(svc.add_course(code, title, capacity))?;
    }

    tracing::info!(added, "Demo data seeded");
    Ok(added)
}

fn count_new(result: Result<()>) -> Result<usize> {
    match result {
        Ok(()) => Ok(1),
        Err(e) if e.kind() == ExErrorKind::DuplicateEntity => {
            tracing::debug!(error = %e, "Demo record already present");
            Ok(0)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursereg_core::{MemoryCourseStore, MemoryEnrollmentStore, MemoryStudentStore};

    #[test]
    fn test_seed_demo_is_repeatable() {
        let mut svc = RegistrationService::new(
            MemoryStudentStore::new(),
            MemoryCourseStore::new(),
            MemoryEnrollmentStore::new(),
        );

        assert_eq!(seed_demo(&mut svc).unwrap(), 4);
        assert_eq!(seed_demo(&mut svc).unwrap(), 0);

        assert_eq!(svc.find_course("CSCI4490").unwrap().capacity(), 2);
        assert_eq!(svc.find_student("B002").unwrap().name(), "Brian");
        assert_eq!(svc.list_courses().len(), 2);
    }
}
