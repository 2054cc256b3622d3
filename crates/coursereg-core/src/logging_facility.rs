//! Structured logging facility
//!
//! - Single initialization point via `init(profile, level)`; the verbosity
//!   comes from configuration rather than ambient process state
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use coursereg_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development, "info");
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use coursereg_core_types::schema;
pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
