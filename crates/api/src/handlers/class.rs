//! Handlers for the `/classes` resource.
//!
//! Create and edit both go through the transactional upsert in
//! `gradehub_db::services::class_upsert`: the submission names subject and
//! section by natural key, and the service resolves or creates them inside
//! one transaction. Every route is scoped to the authenticated teacher.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use gradehub_core::error::CoreError;
use gradehub_core::types::DbId;
use gradehub_db::models::class::ClassDetail;
use gradehub_db::repositories::ClassRepo;
use gradehub_db::services::{ClassUpsertInput, ClassUpsertService};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireTeacher;
use crate::state::AppState;

/// Request body for `POST /classes` and `PUT /classes/{id}`.
///
/// Subject and section are given by natural key; the rows are resolved or
/// created server-side.
#[derive(Debug, Deserialize)]
pub struct ClassSubmission {
    pub subject_code: String,
    pub subject_name: String,
    pub section_name: String,
    pub academic_year: String,
    pub semester: String,
    /// `"numerical"` or `"final_only_numerical"`.
    pub grading_system_type: String,
}

impl ClassSubmission {
    fn into_input(self, teacher_id: DbId, class_id: Option<DbId>) -> ClassUpsertInput {
        ClassUpsertInput {
            teacher_id,
            subject_code: self.subject_code,
            subject_name: self.subject_name,
            section_name: self.section_name,
            academic_year: self.academic_year,
            semester: self.semester,
            grading_system_type: self.grading_system_type,
            class_id,
        }
    }
}

/// POST /api/v1/classes
pub async fn create(
    State(state): State<AppState>,
    RequireTeacher(user): RequireTeacher,
    Json(input): Json<ClassSubmission>,
) -> AppResult<(StatusCode, Json<ClassDetail>)> {
    let class =
        ClassUpsertService::upsert(&state.pool, &input.into_input(user.user_id, None)).await?;
    let detail = fetch_detail(&state, class.id, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// GET /api/v1/classes
pub async fn list(
    State(state): State<AppState>,
    RequireTeacher(user): RequireTeacher,
) -> AppResult<Json<Vec<ClassDetail>>> {
    let classes = ClassRepo::list_by_teacher(&state.pool, user.user_id).await?;
    Ok(Json(classes))
}

/// GET /api/v1/classes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireTeacher(user): RequireTeacher,
    Path(id): Path<DbId>,
) -> AppResult<Json<ClassDetail>> {
    let detail = fetch_detail(&state, id, user.user_id).await?;
    Ok(Json(detail))
}

/// PUT /api/v1/classes/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireTeacher(user): RequireTeacher,
    Path(id): Path<DbId>,
    Json(input): Json<ClassSubmission>,
) -> AppResult<Json<ClassDetail>> {
    let class =
        ClassUpsertService::upsert(&state.pool, &input.into_input(user.user_id, Some(id))).await?;
    let detail = fetch_detail(&state, class.id, user.user_id).await?;
    Ok(Json(detail))
}

/// DELETE /api/v1/classes/{id}
///
/// Grade components cascade at the database level.
pub async fn delete(
    State(state): State<AppState>,
    RequireTeacher(user): RequireTeacher,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ClassRepo::delete_owned(&state.pool, id, user.user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Class", id }))
    }
}

/// Fetch the joined detail row for a class the teacher owns, or 404.
async fn fetch_detail(state: &AppState, id: DbId, teacher_id: DbId) -> AppResult<ClassDetail> {
    ClassRepo::find_detail_owned(&state.pool, id, teacher_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Class", id }))
}
