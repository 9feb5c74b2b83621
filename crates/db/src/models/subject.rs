//! Subject entity model.
//!
//! Subjects are shared across classes and keyed by `subject_code`. They are
//! created lazily by the class-upsert service, so there is no standalone
//! create DTO.

use serde::Serialize;
use sqlx::FromRow;

use gradehub_core::types::{DbId, Timestamp};

/// A row from the `subjects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subject {
    pub id: DbId,
    pub subject_code: String,
    pub subject_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
