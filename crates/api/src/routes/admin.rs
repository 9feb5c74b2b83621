//! Route definitions for the `/admin` resource.
//!
//! Authorization is enforced inside each handler via `RequireAdmin`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET  /users                  -> list_users
/// POST /users                  -> create_user
/// POST /users/{id}/deactivate  -> deactivate_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users).post(admin::create_user))
        .route("/users/{id}/deactivate", post(admin::deactivate_user))
}
