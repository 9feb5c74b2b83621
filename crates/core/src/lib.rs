//! Domain types shared across the GradeHub backend.
//!
//! Holds the error taxonomy, ID/timestamp aliases, role constants, and the
//! grading domain model (grading-system types, periods, component plans).

pub mod error;
pub mod grading;
pub mod roles;
pub mod types;
