//! Repository for the `sections` table.
//!
//! Inserts happen inside the class-upsert transaction
//! (`services::class_upsert`); this repository only serves reads.

use sqlx::PgPool;

use gradehub_core::types::DbId;

use crate::models::section::Section;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, section_name, academic_year, semester, created_at, updated_at";

/// Provides read operations for sections.
pub struct SectionRepo;

impl SectionRepo {
    /// Find a section by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Section>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sections WHERE id = $1");
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a section by its natural key (name, academic year, semester).
    pub async fn find_by_natural_key(
        pool: &PgPool,
        section_name: &str,
        academic_year: &str,
        semester: &str,
    ) -> Result<Option<Section>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sections
             WHERE section_name = $1 AND academic_year = $2 AND semester = $3"
        );
        sqlx::query_as::<_, Section>(&query)
            .bind(section_name)
            .bind(academic_year)
            .bind(semester)
            .fetch_optional(pool)
            .await
    }

    /// List all sections, newest academic year first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Section>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sections
             ORDER BY academic_year DESC, semester ASC, section_name ASC"
        );
        sqlx::query_as::<_, Section>(&query).fetch_all(pool).await
    }
}
