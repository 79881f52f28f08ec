//! Core types and logic for the asistencia ecosystem.
//!
//! This crate provides the pieces shared by the store and server crates:
//! - `Member` and attendance record types
//! - request validation, the per-event fan-out, and history aggregation
//! - the error type every crate reports with
//!
//! Everything here is pure: no I/O, no async.

pub mod attendance;
pub mod error;
pub mod history;
pub mod member;

// Re-export the domain types at crate root for convenience
pub use attendance::*;
pub use error::{Error, Result};
pub use history::*;
pub use member::*;
