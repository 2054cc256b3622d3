use serde::{Deserialize, Serialize};

use crate::errors::{RegistrationError, Result};
use crate::rules::validation::{require_key, require_text, validate_capacity};

/// A capacity-limited course
///
/// Identity is the course code. At most `capacity` students may hold an
/// ENROLLED record for the course at any time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CourseFields")]
pub struct Course {
    code: String,
    title: String,
    capacity: u32,
}

#[derive(Deserialize)]
struct CourseFields {
    code: String,
    title: String,
    capacity: i64,
}

impl Course {
    /// Create a validated Course
    ///
    /// # Errors
    /// `InvalidData` if the code or title is blank, the code contains a
    /// record delimiter, or capacity is outside `[1, 500]`.
    pub fn new(code: &str, title: &str, capacity: i64) -> Result<Self> {
        let code = require_key("Course code", code)?;
        let title = require_text("Course title", title)?;
        let capacity = validate_capacity(capacity)?;

        Ok(Self {
            code,
            title,
            capacity,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

impl TryFrom<CourseFields> for Course {
    type Error = RegistrationError;

    fn try_from(fields: CourseFields) -> Result<Self> {
        Course::new(&fields.code, &fields.title, fields.capacity)
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Course {}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.code, self.title)
    }
}
