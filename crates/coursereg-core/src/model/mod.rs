pub mod course;
pub mod enrollment;
pub mod student;

pub use course::Course;
pub use enrollment::{Enrollment, EnrollmentStatus};
pub use student::Student;
