//! Multi-table operations that do not belong to a single repository.

pub mod class_upsert;

pub use class_upsert::{ClassUpsertInput, ClassUpsertService, UpsertError};
