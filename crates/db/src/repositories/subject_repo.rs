//! Repository for the `subjects` table.
//!
//! Inserts and name updates happen inside the class-upsert transaction
//! (`services::class_upsert`); this repository only serves reads.

use sqlx::PgPool;

use gradehub_core::types::DbId;

use crate::models::subject::Subject;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, subject_code, subject_name, created_at, updated_at";

/// Provides read operations for subjects.
pub struct SubjectRepo;

impl SubjectRepo {
    /// Find a subject by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects WHERE id = $1");
        sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a subject by its unique code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects WHERE subject_code = $1");
        sqlx::query_as::<_, Subject>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// List all subjects ordered by code.
    pub async fn list(pool: &PgPool) -> Result<Vec<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects ORDER BY subject_code ASC");
        sqlx::query_as::<_, Subject>(&query).fetch_all(pool).await
    }
}
