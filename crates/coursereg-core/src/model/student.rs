use serde::{Deserialize, Serialize};

use crate::errors::{RegistrationError, Result};
use crate::rules::validation::{require_key, require_text, validate_email};

/// A student who can enroll in courses
///
/// Identity is the student ID. Instances are immutable and only exist in a
/// validated state: construction goes through [`Student::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StudentFields")]
pub struct Student {
    id: String,
    name: String,
    email: String,
}

/// Unvalidated wire shape used when deserializing
#[derive(Deserialize)]
struct StudentFields {
    id: String,
    name: String,
    email: String,
}

impl Student {
    /// Create a validated Student
    ///
    /// `id` and `name` are trimmed; `email` must match `local@domain`.
    ///
    /// # Errors
    /// `InvalidData` if the ID or name is blank, the ID contains a record
    /// delimiter, or the email is malformed.
    pub fn new(id: &str, name: &str, email: &str) -> Result<Self> {
        let id = require_key("Student ID", id)?;
        let name = require_text("Student name", name)?;
        validate_email(email)?;

        Ok(Self {
            id,
            name,
            email: email.to_string(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl TryFrom<StudentFields> for Student {
    type Error = RegistrationError;

    fn try_from(fields: StudentFields) -> Result<Self> {
        Student::new(&fields.id, &fields.name, &fields.email)
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} <{}>", self.id, self.name, self.email)
    }
}
