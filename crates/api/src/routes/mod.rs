pub mod admin;
pub mod auth;
pub mod class;
pub mod grade_component;
pub mod health;
pub mod lookup;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                       login (public)
/// /auth/refresh                     refresh (public)
/// /auth/logout                      logout (requires auth)
///
/// /admin/users                      list, create (admin only)
/// /admin/users/{id}/deactivate      deactivate (admin only)
///
/// /classes                          list, create (teacher)
/// /classes/{id}                     get, update, delete
/// /classes/{id}/components          list, create
///
/// /components/{id}                  update, delete
///
/// /subjects                         list (teacher)
/// /sections                         list (teacher)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout).
        .nest("/auth", auth::router())
        // Admin account management.
        .nest("/admin", admin::router())
        // Classes (also nests class-scoped component routes).
        .nest("/classes", class::router())
        // Directly-addressed grade components.
        .nest("/components", grade_component::router())
        // Subject / section pickers for the class form.
        .merge(lookup::router())
}
