pub mod memory;
pub mod registration;
pub mod store;

pub use memory::{MemoryCourseStore, MemoryEnrollmentStore, MemoryStudentStore};
pub use registration::RegistrationService;
pub use store::{CourseStore, EnrollmentStore, StudentStore};
