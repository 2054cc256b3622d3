use thiserror::Error;

/// Result type alias using RegistrationError
pub type Result<T> = std::result::Result<T, RegistrationError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// A stable classification of every failure the engine can surface. Each
/// kind maps to a stable code usable by the shell, by tests and by log
/// consumers without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Malformed field on construction
    InvalidData,
    /// Add-operation for a key that already exists
    DuplicateEntity,
    /// Reference to a student or course that does not exist
    NotFound,
    AlreadyEnrolled,
    AlreadyWaitlisted,
    /// Drop attempted on a pair with no record
    NotEnrolled,
    /// The durable medium could not be read or written
    StorageFailure,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidData => "ERR_INVALID_DATA",
            ExErrorKind::DuplicateEntity => "ERR_DUPLICATE_ENTITY",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyEnrolled => "ERR_ALREADY_ENROLLED",
            ExErrorKind::AlreadyWaitlisted => "ERR_ALREADY_WAITLISTED",
            ExErrorKind::NotEnrolled => "ERR_NOT_ENROLLED",
            ExErrorKind::StorageFailure => "ERR_STORAGE_FAILURE",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus context for
/// logs. Built from a `RegistrationError` via `From`.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    student_id: Option<String>,
    course_code: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            student_id: None,
            course_code: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add student ID context
    pub fn with_student_id(mut self, id: impl Into<String>) -> Self {
        self.student_id = Some(id.into());
        self
    }

    /// Add course code context
    pub fn with_course_code(mut self, code: impl Into<String>) -> Self {
        self.course_code = Some(code.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn student_id(&self) -> Option<&str> {
        self.student_id.as_deref()
    }

    pub fn course_code(&self) -> Option<&str> {
        self.course_code.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(student_id) = &self.student_id {
            write!(f, " (student_id: {})", student_id)?;
        }
        if let Some(course_code) = &self.course_code {
            write!(f, " (course_code: {})", course_code)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for registration operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    // ===== Validation =====
    /// A field failed construction validation
    #[error("Invalid data: {reason}")]
    InvalidData { reason: String },

    // ===== Duplicates =====
    #[error("Student with ID {student_id} already exists")]
    DuplicateStudent { student_id: String },

    #[error("Course with code {course_code} already exists")]
    DuplicateCourse { course_code: String },

    // ===== Missing references =====
    #[error("Student {student_id} not found")]
    StudentNotFound { student_id: String },

    #[error("Course {course_code} not found")]
    CourseNotFound { course_code: String },

    // ===== Enrollment state =====
    #[error("Student {student_id} already enrolled in {course_code}")]
    AlreadyEnrolled {
        student_id: String,
        course_code: String,
    },

    #[error("Student {student_id} already on waitlist for {course_code}")]
    AlreadyWaitlisted {
        student_id: String,
        course_code: String,
    },

    #[error("Student {student_id} not enrolled or waitlisted in {course_code}")]
    NotEnrolled {
        student_id: String,
        course_code: String,
    },

    // ===== Persistence =====
    /// The durable medium rejected a read or write. In-memory state is kept.
    #[error("Storage failure during {op}: {message}")]
    StorageFailure { op: String, message: String },
}

impl RegistrationError {
    /// Shorthand for an `InvalidData` error
    pub fn invalid(reason: impl Into<String>) -> Self {
        RegistrationError::InvalidData {
            reason: reason.into(),
        }
    }

    /// Classify this error into the stable taxonomy
    pub fn kind(&self) -> ExErrorKind {
        match self {
            RegistrationError::InvalidData { .. } => ExErrorKind::InvalidData,
            RegistrationError::DuplicateStudent { .. }
            | RegistrationError::DuplicateCourse { .. } => ExErrorKind::DuplicateEntity,
            RegistrationError::StudentNotFound { .. }
            | RegistrationError::CourseNotFound { .. } => ExErrorKind::NotFound,
            RegistrationError::AlreadyEnrolled { .. } => ExErrorKind::AlreadyEnrolled,
            RegistrationError::AlreadyWaitlisted { .. } => ExErrorKind::AlreadyWaitlisted,
            RegistrationError::NotEnrolled { .. } => ExErrorKind::NotEnrolled,
            RegistrationError::StorageFailure { .. } => ExErrorKind::StorageFailure,
        }
    }
}

/// Conversion from RegistrationError to ExError
impl From<RegistrationError> for ExError {
    fn from(err: RegistrationError) -> Self {
        let message = err.to_string();
        let kind = err.kind();
        match err {
            RegistrationError::InvalidData { .. } => ExError::new(kind).with_message(message),

            RegistrationError::DuplicateStudent { student_id }
            | RegistrationError::StudentNotFound { student_id } => ExError::new(kind)
                .with_student_id(student_id)
                .with_message(message),

            RegistrationError::DuplicateCourse { course_code }
            | RegistrationError::CourseNotFound { course_code } => ExError::new(kind)
                .with_course_code(course_code)
                .with_message(message),

            RegistrationError::AlreadyEnrolled {
                student_id,
                course_code,
            }
            | RegistrationError::AlreadyWaitlisted {
                student_id,
                course_code,
            }
            | RegistrationError::NotEnrolled {
                student_id,
                course_code,
            } => ExError::new(kind)
                .with_student_id(student_id)
                .with_course_code(course_code)
                .with_message(message),

            RegistrationError::StorageFailure { op, .. } => {
                ExError::new(kind).with_op(op).with_message(message)
            }
        }
    }
}
