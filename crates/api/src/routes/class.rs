//! Route definitions for the `/classes` resource, including class-scoped
//! grade components.

use axum::routing::get;
use axum::Router;

use crate::handlers::{class, grade_component};
use crate::state::AppState;

/// Routes mounted at `/classes`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// GET    /{id}/components   -> list_by_class
/// POST   /{id}/components   -> create component
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(class::list).post(class::create))
        .route(
            "/{id}",
            get(class::get_by_id)
                .put(class::update)
                .delete(class::delete),
        )
        .route(
            "/{id}/components",
            get(grade_component::list_by_class).post(grade_component::create),
        )
}
