//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts where the table needs one

pub mod class;
pub mod grade_component;
pub mod role;
pub mod section;
pub mod session;
pub mod subject;
pub mod user;
