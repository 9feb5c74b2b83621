//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the repositories and services in `gradehub_db` and
//! map errors via [`crate::error::AppError`].

pub mod admin;
pub mod auth;
pub mod class;
pub mod grade_component;
pub mod lookup;
