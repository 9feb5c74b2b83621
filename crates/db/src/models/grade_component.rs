//! Grade component entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gradehub_core::types::{DbId, Timestamp};

/// A row from the `grade_components` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GradeComponent {
    pub id: DbId,
    pub class_id: DbId,
    pub component_name: String,
    /// TEXT form of `gradehub_core::grading::GradingPeriod`.
    pub period: String,
    /// TEXT form of `gradehub_core::grading::ComponentType`.
    pub component_type: String,
    pub max_score: f64,
    pub is_attendance_based: bool,
    /// Locked rows belong to a fixed grading scheme and may not be edited
    /// or deleted individually.
    pub is_locked: bool,
    pub weight: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a grade component on a `numerical` class.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGradeComponent {
    pub component_name: String,
    pub period: String,
    pub component_type: String,
    /// Defaults to 100 if omitted.
    pub max_score: Option<f64>,
    /// Defaults to `false` if omitted.
    pub is_attendance_based: Option<bool>,
    /// Defaults to 0 if omitted.
    pub weight: Option<f64>,
}

/// DTO for updating a grade component. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGradeComponent {
    pub component_name: Option<String>,
    pub period: Option<String>,
    pub component_type: Option<String>,
    pub max_score: Option<f64>,
    pub is_attendance_based: Option<bool>,
    pub weight: Option<f64>,
}
