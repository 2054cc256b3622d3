//! coursereg core - enrollment and waitlist engine
//!
//! This crate holds everything with business rules in it:
//! - Student, Course and Enrollment models with fallible construction
//! - Store traits for the three keyed collections, plus in-memory stores
//! - The registration engine enforcing course capacity and FIFO waitlists
//! - Outcome values returned to the interaction shell
//! - The error facility and the structured logging facility
//!
//! The engine never talks to a terminal and the stores never hold rules.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod outcome;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, RegistrationError, Result};
pub use model::{Course, Enrollment, EnrollmentStatus, Student};
pub use ops::{
    CourseStore, EnrollmentStore, MemoryCourseStore, MemoryEnrollmentStore, MemoryStudentStore,
    RegistrationService, StudentStore,
};
pub use outcome::{CourseEnrollmentInfo, CourseRoster, DropOutcome, EnrollmentOutcome};
