//! Read-only lookup handlers feeding the class form (subject and section
//! pickers).

use axum::extract::State;
use axum::Json;

use gradehub_db::models::section::Section;
use gradehub_db::models::subject::Subject;
use gradehub_db::repositories::{SectionRepo, SubjectRepo};

use crate::error::AppResult;
use crate::middleware::rbac::RequireTeacher;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/subjects
pub async fn list_subjects(
    State(state): State<AppState>,
    RequireTeacher(_user): RequireTeacher,
) -> AppResult<Json<DataResponse<Vec<Subject>>>> {
    let subjects = SubjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: subjects }))
}

/// GET /api/v1/sections
pub async fn list_sections(
    State(state): State<AppState>,
    RequireTeacher(_user): RequireTeacher,
) -> AppResult<Json<DataResponse<Vec<Section>>>> {
    let sections = SectionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: sections }))
}
