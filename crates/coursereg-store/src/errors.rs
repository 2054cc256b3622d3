//! Error helpers for coursereg-store
//!
//! Filesystem trouble becomes `StorageFailure`; a record that cannot be
//! decoded becomes `InvalidData` naming the line it came from.

use std::path::Path;

use coursereg_core::RegistrationError;

/// Create a storage failure from an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> RegistrationError {
    RegistrationError::StorageFailure {
        op: operation.to_string(),
        message: format!("{}: {}", path.display(), err),
    }
}

/// Create a decode error for a malformed record line
pub fn decode_error(line_no: usize, reason: impl std::fmt::Display) -> RegistrationError {
    RegistrationError::invalid(format!("line {}: {}", line_no, reason))
}
