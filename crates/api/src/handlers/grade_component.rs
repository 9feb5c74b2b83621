//! Handlers for grade components.
//!
//! Components are nested under their class for list/create
//! (`/classes/{id}/components`) and addressed directly for update/delete
//! (`/components/{id}`). Ownership always resolves through the class's
//! teacher. Classes on a fixed grading scheme (`final_only_numerical`)
//! reject all component mutation: their rows are installed by the upsert
//! cascade and locked.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use gradehub_core::error::CoreError;
use gradehub_core::grading::{ComponentType, GradingPeriod, GradingSystemType};
use gradehub_core::types::DbId;
use gradehub_db::models::class::Class;
use gradehub_db::models::grade_component::{
    CreateGradeComponent, GradeComponent, UpdateGradeComponent,
};
use gradehub_db::repositories::{ClassRepo, GradeComponentRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireTeacher;
use crate::state::AppState;

/// GET /api/v1/classes/{class_id}/components
pub async fn list_by_class(
    State(state): State<AppState>,
    RequireTeacher(user): RequireTeacher,
    Path(class_id): Path<DbId>,
) -> AppResult<Json<Vec<GradeComponent>>> {
    require_owned_class(&state, class_id, user.user_id).await?;
    let components = GradeComponentRepo::list_by_class(&state.pool, class_id).await?;
    Ok(Json(components))
}

/// POST /api/v1/classes/{class_id}/components
pub async fn create(
    State(state): State<AppState>,
    RequireTeacher(user): RequireTeacher,
    Path(class_id): Path<DbId>,
    Json(input): Json<CreateGradeComponent>,
) -> AppResult<(StatusCode, Json<GradeComponent>)> {
    let class = require_owned_class(&state, class_id, user.user_id).await?;
    require_editable_scheme(&class)?;

    if input.component_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "component_name is required".into(),
        )));
    }
    validate_enums(Some(input.period.as_str()), Some(input.component_type.as_str()))?;

    let component = GradeComponentRepo::create(&state.pool, class_id, &input).await?;
    Ok((StatusCode::CREATED, Json(component)))
}

/// PUT /api/v1/components/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireTeacher(user): RequireTeacher,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGradeComponent>,
) -> AppResult<Json<GradeComponent>> {
    let existing = require_owned_component(&state, id, user.user_id).await?;
    require_unlocked(&existing)?;
    validate_enums(input.period.as_deref(), input.component_type.as_deref())?;

    let component = GradeComponentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GradeComponent",
            id,
        }))?;
    Ok(Json(component))
}

/// DELETE /api/v1/components/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireTeacher(user): RequireTeacher,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = require_owned_component(&state, id, user.user_id).await?;
    require_unlocked(&existing)?;

    let deleted = GradeComponentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "GradeComponent",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a class the teacher owns, or 404.
async fn require_owned_class(
    state: &AppState,
    class_id: DbId,
    teacher_id: DbId,
) -> AppResult<Class> {
    ClassRepo::find_owned(&state.pool, class_id, teacher_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Class",
            id: class_id,
        }))
}

/// Fetch a component whose class the teacher owns, or 404.
async fn require_owned_component(
    state: &AppState,
    id: DbId,
    teacher_id: DbId,
) -> AppResult<GradeComponent> {
    let component = GradeComponentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GradeComponent",
            id,
        }))?;
    require_owned_class(state, component.class_id, teacher_id).await?;
    Ok(component)
}

/// Reject component creation on classes whose scheme owns its components.
fn require_editable_scheme(class: &Class) -> AppResult<()> {
    let locked = GradingSystemType::parse(&class.grading_system_type)
        .map(GradingSystemType::has_locked_components)
        .unwrap_or(false);
    if locked {
        return Err(AppError::Core(CoreError::Conflict(
            "This class uses a fixed grading scheme; its components cannot be changed".into(),
        )));
    }
    Ok(())
}

/// Reject mutation of a locked component row.
fn require_unlocked(component: &GradeComponent) -> AppResult<()> {
    if component.is_locked {
        return Err(AppError::Core(CoreError::Conflict(
            "This component is locked and cannot be changed".into(),
        )));
    }
    Ok(())
}

/// Validate period and component-type values where provided.
fn validate_enums(period: Option<&str>, component_type: Option<&str>) -> AppResult<()> {
    if let Some(p) = period {
        if GradingPeriod::parse(p).is_none() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "unknown period '{p}'"
            ))));
        }
    }
    if let Some(t) = component_type {
        if ComponentType::parse(t).is_none() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "unknown component_type '{t}'"
            ))));
        }
    }
    Ok(())
}
