//! Result values handed back to the interaction shell

use serde::Serialize;

use crate::model::{Course, EnrollmentStatus};

/// What happened to an enroll request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentOutcome {
    /// A seat was free; the student holds it now
    Enrolled,
    /// The course was full; the student joined the tail of the waitlist
    Waitlisted,
}

impl EnrollmentOutcome {
    pub fn is_waitlisted(&self) -> bool {
        matches!(self, EnrollmentOutcome::Waitlisted)
    }

    /// The status of the record the request created
    pub fn status(&self) -> EnrollmentStatus {
        match self {
            EnrollmentOutcome::Enrolled => EnrollmentStatus::Enrolled,
            EnrollmentOutcome::Waitlisted => EnrollmentStatus::Waitlisted,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            EnrollmentOutcome::Enrolled => "Enrolled.",
            EnrollmentOutcome::Waitlisted => "Course full. Added to WAITLIST.",
        }
    }
}

impl std::fmt::Display for EnrollmentOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// What happened to a drop request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "outcome")]
pub enum DropOutcome {
    /// An enrolled student left and nobody was waiting
    Dropped,
    /// An enrolled student left and the head of the waitlist took the seat
    DroppedWithPromotion { promoted_student_id: String },
    /// A waitlisted student left the queue
    RemovedFromWaitlist,
}

impl DropOutcome {
    pub fn promoted_student_id(&self) -> Option<&str> {
        match self {
            DropOutcome::DroppedWithPromotion {
                promoted_student_id,
            } => Some(promoted_student_id),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            DropOutcome::Dropped => "Dropped.".to_string(),
            DropOutcome::DroppedWithPromotion {
                promoted_student_id,
            } => format!("Dropped. Promoted {} from waitlist.", promoted_student_id),
            DropOutcome::RemovedFromWaitlist => "Removed from waitlist.".to_string(),
        }
    }
}

impl std::fmt::Display for DropOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Seat accounting for one course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseEnrollmentInfo {
    pub course: Course,
    pub enrolled_count: usize,
    pub waitlist_count: usize,
}

impl CourseEnrollmentInfo {
    /// Seats still free; zero once the course is full
    pub fn available_seats(&self) -> usize {
        (self.course.capacity() as usize).saturating_sub(self.enrolled_count)
    }
}

impl std::fmt::Display for CourseEnrollmentInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} cap={} enrolled={} wait={}",
            self.course.code(),
            self.course.title(),
            self.course.capacity(),
            self.enrolled_count,
            self.waitlist_count
        )
    }
}

/// Who holds a seat and who is waiting, both in FIFO order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRoster {
    pub course: Course,
    pub enrolled: Vec<String>,
    pub waitlist: Vec<String>,
}
