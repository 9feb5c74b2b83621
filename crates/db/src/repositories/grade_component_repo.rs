//! Repository for the `grade_components` table.

use sqlx::PgPool;

use gradehub_core::types::DbId;

use crate::models::grade_component::{
    CreateGradeComponent, GradeComponent, UpdateGradeComponent,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, class_id, component_name, period, component_type, \
    max_score, is_attendance_based, is_locked, weight, created_at, updated_at";

/// Provides CRUD operations for grade components.
pub struct GradeComponentRepo;

impl GradeComponentRepo {
    /// Insert a new unlocked component for a class, returning the created row.
    ///
    /// If `max_score` is `None`, defaults to 100. If `is_attendance_based`
    /// is `None`, defaults to `false`. If `weight` is `None`, defaults to 0.
    pub async fn create(
        pool: &PgPool,
        class_id: DbId,
        input: &CreateGradeComponent,
    ) -> Result<GradeComponent, sqlx::Error> {
        let query = format!(
            "INSERT INTO grade_components
                (class_id, component_name, period, component_type,
                 max_score, is_attendance_based, weight)
             VALUES ($1, $2, $3, $4, COALESCE($5, 100), COALESCE($6, false), COALESCE($7, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GradeComponent>(&query)
            .bind(class_id)
            .bind(&input.component_name)
            .bind(&input.period)
            .bind(&input.component_type)
            .bind(input.max_score)
            .bind(input.is_attendance_based)
            .bind(input.weight)
            .fetch_one(pool)
            .await
    }

    /// Find a component by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GradeComponent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM grade_components WHERE id = $1");
        sqlx::query_as::<_, GradeComponent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all components for a class in grading-period order
    /// (prelim, midterm, final), then by creation order within a period.
    pub async fn list_by_class(
        pool: &PgPool,
        class_id: DbId,
    ) -> Result<Vec<GradeComponent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM grade_components
             WHERE class_id = $1
             ORDER BY CASE period
                 WHEN 'prelim' THEN 1
                 WHEN 'midterm' THEN 2
                 WHEN 'final' THEN 3
             END, id ASC"
        );
        sqlx::query_as::<_, GradeComponent>(&query)
            .bind(class_id)
            .fetch_all(pool)
            .await
    }

    /// Update an unlocked component. Only non-`None` fields are applied.
    ///
    /// Returns `None` if the row does not exist or is locked.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGradeComponent,
    ) -> Result<Option<GradeComponent>, sqlx::Error> {
        let query = format!(
            "UPDATE grade_components SET
                component_name = COALESCE($2, component_name),
                period = COALESCE($3, period),
                component_type = COALESCE($4, component_type),
                max_score = COALESCE($5, max_score),
                is_attendance_based = COALESCE($6, is_attendance_based),
                weight = COALESCE($7, weight)
             WHERE id = $1 AND is_locked = false
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GradeComponent>(&query)
            .bind(id)
            .bind(&input.component_name)
            .bind(&input.period)
            .bind(&input.component_type)
            .bind(input.max_score)
            .bind(input.is_attendance_based)
            .bind(input.weight)
            .fetch_optional(pool)
            .await
    }

    /// Delete an unlocked component. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM grade_components WHERE id = $1 AND is_locked = false")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count components for a class.
    pub async fn count_by_class(pool: &PgPool, class_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM grade_components WHERE class_id = $1")
                .bind(class_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
