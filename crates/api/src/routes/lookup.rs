//! Route definitions for the subject / section lookups.

use axum::routing::get;
use axum::Router;

use crate::handlers::lookup;
use crate::state::AppState;

/// Routes merged at the `/api/v1` root.
///
/// ```text
/// GET /subjects  -> list_subjects
/// GET /sections  -> list_sections
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/subjects", get(lookup::list_subjects))
        .route("/sections", get(lookup::list_sections))
}
