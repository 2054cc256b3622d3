//! Field validation shared by the model constructors
//!
//! Every check returns `InvalidData` with a reason naming the offending
//! field, so the shell can print the message as-is.

use crate::errors::{RegistrationError, Result};

/// Smallest accepted course capacity
pub const MIN_CAPACITY: i64 = 1;

/// Largest accepted course capacity
pub const MAX_CAPACITY: i64 = 500;

/// Characters reserved by the flat-file line formats
pub const RESERVED_KEY_CHARS: [char; 2] = [',', '|'];

/// Trim a required text field, rejecting empty or whitespace-only input
///
/// Records are stored one per line, so control characters (line breaks
/// included) are rejected anywhere in the value.
///
/// # Errors
/// `InvalidData` if nothing is left after trimming, or the value contains
/// a control character.
pub fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RegistrationError::invalid(format!(
            "{} cannot be empty",
            field
        )));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(RegistrationError::invalid(format!(
            "{} cannot contain control characters",
            field
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim a required key field (student ID, course code)
///
/// Keys additionally may not contain the record delimiters.
///
/// # Errors
/// `InvalidData` if the key is empty or contains `,` or `|`.
pub fn require_key(field: &str, value: &str) -> Result<String> {
    let key = require_text(field, value)?;
    if key.contains(RESERVED_KEY_CHARS) {
        return Err(RegistrationError::invalid(format!(
            "{} cannot contain ',' or '|'",
            field
        )));
    }
    Ok(key)
}

/// Check an email address against the `local@domain` pattern
///
/// The local part accepts `[A-Za-z0-9+_.-]`, the domain `[A-Za-z0-9.-]`.
/// The value is checked as supplied, so surrounding whitespace fails.
///
/// # Errors
/// `InvalidData` on any mismatch.
pub fn validate_email(email: &str) -> Result<()> {
    let invalid = || RegistrationError::invalid("Invalid email format");

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-'));
    let domain_ok = !domain.is_empty()
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));

    if local_ok && domain_ok {
        Ok(())
    } else {
        Err(invalid())
    }
}

/// Check that a capacity lies within `[MIN_CAPACITY, MAX_CAPACITY]`
///
/// # Errors
/// `InvalidData` if out of range.
pub fn validate_capacity(capacity: i64) -> Result<u32> {
    if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) {
        return Err(RegistrationError::invalid(format!(
            "Capacity must be between {} and {}",
            MIN_CAPACITY, MAX_CAPACITY
        )));
    }
    u32::try_from(capacity).map_err(|_| RegistrationError::invalid("Capacity out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("Name", "  Alice  ").unwrap(), "Alice");
    }

    #[test]
    fn test_require_text_rejects_blank() {
        let err = require_text("Name", " \t ").unwrap_err();
        assert_eq!(
            err,
            RegistrationError::InvalidData {
                reason: "Name cannot be empty".to_string()
            }
        );
    }

    #[test]
    fn test_require_text_rejects_line_breaks_and_controls() {
        for value in ["Al\nice", "Intro\rTo Things", "Tab\tbed", "Bell\u{7}"] {
            let err = require_text("Name", value).unwrap_err();
            assert_eq!(
                err,
                RegistrationError::InvalidData {
                    reason: "Name cannot contain control characters".to_string()
                },
                "{:?} should be rejected",
                value
            );
        }
    }

    #[test]
    fn test_require_text_trims_trailing_newline() {
        assert_eq!(require_text("Title", "Calculus I\n").unwrap(), "Calculus I");
    }

    #[test]
    fn test_require_key_rejects_delimiters() {
        assert!(require_key("Student ID", "B0,01").is_err());
        assert!(require_key("Course code", "CS|1").is_err());
        assert_eq!(require_key("Student ID", " B001 ").unwrap(), "B001");
    }

    #[test]
    fn test_validate_email_accepts_common_forms() {
        for email in ["alice@uca.edu", "a.b+tag@mail.uca.edu", "x_y-z@host"] {
            assert!(validate_email(email).is_ok(), "{} should be valid", email);
        }
    }

    #[test]
    fn test_validate_email_rejects_malformed() {
        for email in [
            "not-an-email",
            "@uca.edu",
            "alice@",
            "alice@@uca.edu",
            "al ice@uca.edu",
            " alice@uca.edu",
            "alice@uca_edu",
            "",
        ] {
            assert!(validate_email(email).is_err(), "{:?} should be invalid", email);
        }
    }

    #[test]
    fn test_validate_capacity_bounds() {
        assert_eq!(validate_capacity(1).unwrap(), 1);
        assert_eq!(validate_capacity(500).unwrap(), 500);
        assert!(validate_capacity(0).is_err());
        assert!(validate_capacity(501).is_err());
        assert!(validate_capacity(-3).is_err());
    }
}
