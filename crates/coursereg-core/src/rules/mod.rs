pub mod invariants;
pub mod validation;

pub use invariants::{check_registry, InvariantViolation};
