//! Repository for the `classes` table.
//!
//! Creation and edits go through `services::class_upsert`, which owns the
//! subject/section resolution and the grade-component cascade. This
//! repository provides the reads and the delete.

use sqlx::PgPool;

use gradehub_core::types::DbId;

use crate::models::class::{Class, ClassDetail};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, teacher_id, subject_id, section_id, grading_system_type, created_at, updated_at";

/// Joined column list for [`ClassDetail`] queries.
const DETAIL_COLUMNS: &str = "c.id, c.teacher_id, c.subject_id, c.section_id, \
     c.grading_system_type, sub.subject_code, sub.subject_name, \
     sec.section_name, sec.academic_year, sec.semester, c.created_at, c.updated_at";

/// Provides read and delete operations for classes.
pub struct ClassRepo;

impl ClassRepo {
    /// Find a class by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes WHERE id = $1");
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a class by ID, scoped to its owning teacher.
    ///
    /// Returns `None` both for missing classes and classes owned by another
    /// teacher, so callers cannot distinguish the two.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        teacher_id: DbId,
    ) -> Result<Option<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes WHERE id = $1 AND teacher_id = $2");
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .bind(teacher_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a class with subject/section display fields, scoped to its owner.
    pub async fn find_detail_owned(
        pool: &PgPool,
        id: DbId,
        teacher_id: DbId,
    ) -> Result<Option<ClassDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM classes c
             JOIN subjects sub ON sub.id = c.subject_id
             JOIN sections sec ON sec.id = c.section_id
             WHERE c.id = $1 AND c.teacher_id = $2"
        );
        sqlx::query_as::<_, ClassDetail>(&query)
            .bind(id)
            .bind(teacher_id)
            .fetch_optional(pool)
            .await
    }

    /// List a teacher's classes with subject/section display fields,
    /// ordered by subject code then section name.
    pub async fn list_by_teacher(
        pool: &PgPool,
        teacher_id: DbId,
    ) -> Result<Vec<ClassDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM classes c
             JOIN subjects sub ON sub.id = c.subject_id
             JOIN sections sec ON sec.id = c.section_id
             WHERE c.teacher_id = $1
             ORDER BY sub.subject_code ASC, sec.section_name ASC"
        );
        sqlx::query_as::<_, ClassDetail>(&query)
            .bind(teacher_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a class owned by the teacher. Grade components cascade at the
    /// database level. Returns `true` if a row was removed.
    pub async fn delete_owned(
        pool: &PgPool,
        id: DbId,
        teacher_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1 AND teacher_id = $2")
            .bind(id)
            .bind(teacher_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
