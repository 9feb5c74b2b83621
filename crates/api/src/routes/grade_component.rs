//! Route definitions for directly-addressed grade components.
//!
//! Class-scoped list/create routes are mounted via [`super::class::router`].

use axum::routing::put;
use axum::Router;

use crate::handlers::grade_component;
use crate::state::AppState;

/// Routes mounted at `/components`.
///
/// ```text
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(grade_component::update).delete(grade_component::delete),
    )
}
