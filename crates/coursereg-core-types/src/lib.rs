//! Core types shared across coursereg facilities
//!
//! Holds the canonical field keys and event names used by the structured
//! logging facility so that every crate emits the same schema.

pub mod schema;
