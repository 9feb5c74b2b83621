//! Class entity model and detail view.

use serde::Serialize;
use sqlx::FromRow;

use gradehub_core::types::{DbId, Timestamp};

/// A row from the `classes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Class {
    pub id: DbId,
    pub teacher_id: DbId,
    pub subject_id: DbId,
    pub section_id: DbId,
    /// TEXT form of `gradehub_core::grading::GradingSystemType`.
    pub grading_system_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A class joined with its subject and section display fields, as listed
/// on the teacher's class overview.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClassDetail {
    pub id: DbId,
    pub teacher_id: DbId,
    pub subject_id: DbId,
    pub section_id: DbId,
    pub grading_system_type: String,
    pub subject_code: String,
    pub subject_name: String,
    pub section_name: String,
    pub academic_year: String,
    pub semester: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
