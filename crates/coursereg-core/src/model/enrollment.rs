use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{RegistrationError, Result};
use crate::rules::validation::require_key;

/// Status of an enrollment record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    /// Holds a seat in the course
    Enrolled,
    /// Queued for a seat, in FIFO order
    Waitlisted,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::Enrolled => "ENROLLED",
            EnrollmentStatus::Waitlisted => "WAITLISTED",
        }
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnrollmentStatus {
    type Err = RegistrationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ENROLLED" => Ok(EnrollmentStatus::Enrolled),
            "WAITLISTED" => Ok(EnrollmentStatus::Waitlisted),
            other => Err(RegistrationError::invalid(format!(
                "Unknown enrollment status: {}",
                other
            ))),
        }
    }
}

/// An enrollment or waitlist entry for one (student, course) pair
///
/// Identity is the pair. Records are immutable; a status transition
/// produces a new record via [`Enrollment::with_status`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "EnrollmentFields")]
pub struct Enrollment {
    student_id: String,
    course_code: String,
    status: EnrollmentStatus,
}

#[derive(Deserialize)]
struct EnrollmentFields {
    student_id: String,
    course_code: String,
    status: EnrollmentStatus,
}

impl TryFrom<EnrollmentFields> for Enrollment {
    type Error = RegistrationError;

    fn try_from(fields: EnrollmentFields) -> Result<Self> {
        Enrollment::new(&fields.student_id, &fields.course_code, fields.status)
    }
}

impl Enrollment {
    /// Create a validated Enrollment
    ///
    /// # Errors
    /// `InvalidData` if either key is blank or contains a record delimiter.
    pub fn new(student_id: &str, course_code: &str, status: EnrollmentStatus) -> Result<Self> {
        Ok(Self {
            student_id: require_key("Student ID", student_id)?,
            course_code: require_key("Course code", course_code)?,
            status,
        })
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    pub fn status(&self) -> EnrollmentStatus {
        self.status
    }

    pub fn is_enrolled(&self) -> bool {
        self.status == EnrollmentStatus::Enrolled
    }

    pub fn is_waitlisted(&self) -> bool {
        self.status == EnrollmentStatus::Waitlisted
    }

    /// Check whether this record belongs to the given pair
    pub fn matches(&self, student_id: &str, course_code: &str) -> bool {
        self.student_id == student_id && self.course_code == course_code
    }

    /// Same pair, new status
    pub fn with_status(&self, status: EnrollmentStatus) -> Self {
        Self {
            student_id: self.student_id.clone(),
            course_code: self.course_code.clone(),
            status,
        }
    }
}

impl PartialEq for Enrollment {
    fn eq(&self, other: &Self) -> bool {
        self.student_id == other.student_id && self.course_code == other.course_code
    }
}

impl Eq for Enrollment {}

impl std::fmt::Display for Enrollment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} [{}]",
            self.student_id, self.course_code, self.status
        )
    }
}
