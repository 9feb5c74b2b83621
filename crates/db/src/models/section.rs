//! Section entity model.
//!
//! The natural key is (section_name, academic_year, semester); the same
//! section name recurs every term. Rows are created lazily by the
//! class-upsert service.

use serde::Serialize;
use sqlx::FromRow;

use gradehub_core::types::{DbId, Timestamp};

/// A row from the `sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Section {
    pub id: DbId,
    pub section_name: String,
    pub academic_year: String,
    pub semester: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
