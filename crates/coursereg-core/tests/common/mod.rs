use coursereg_core::{
    MemoryCourseStore, MemoryEnrollmentStore, MemoryStudentStore, RegistrationService,
};

#[allow(dead_code)]
pub type MemoryService =
    RegistrationService<MemoryStudentStore, MemoryCourseStore, MemoryEnrollmentStore>;

/// Create an empty in-memory service for testing
#[allow(dead_code)]
pub fn new_service() -> MemoryService {
    RegistrationService::new(
        MemoryStudentStore::new(),
        MemoryCourseStore::new(),
        MemoryEnrollmentStore::new(),
    )
}

/// Register students with generated names and emails
#[allow(dead_code)]
pub fn add_students(svc: &mut MemoryService, ids: &[&str]) {
    for id in ids {
        svc.add_student(id, &format!("Student {}", id), &format!("{}@uca.edu", id.to_lowercase()))
            .unwrap();
    }
}

/// A service holding one course of the given capacity and the listed students
#[allow(dead_code)]
pub fn service_with_course(code: &str, capacity: i64, student_ids: &[&str]) -> MemoryService {
    let mut svc = new_service();
    svc.add_course(code, "Test Course", capacity).unwrap();
    add_students(&mut svc, student_ids);
    svc
}
