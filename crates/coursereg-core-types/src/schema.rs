//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent across the engine, the
//! stores and the shell.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_ACTION: &str = "action";

// Entity identifiers
pub const FIELD_STUDENT_ID: &str = "student_id";
pub const FIELD_COURSE_CODE: &str = "course_code";
pub const FIELD_PROMOTED_ID: &str = "promoted_id";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Domain events recorded by the registration engine
pub const DOMAIN_ADD_STUDENT: &str = "ADD_STUDENT";
pub const DOMAIN_ADD_COURSE: &str = "ADD_COURSE";
pub const DOMAIN_ENROLL: &str = "ENROLL";
pub const DOMAIN_WAITLIST: &str = "WAITLIST";
pub const DOMAIN_DROP: &str = "DROP";
pub const DOMAIN_PROMOTE: &str = "PROMOTE";
pub const DOMAIN_WAITLIST_REMOVE: &str = "WAITLIST_REMOVE";
