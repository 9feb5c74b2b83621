//! HTTP-level integration tests for the class and grade-component endpoints.
//!
//! Covers the create/edit upsert flow, duplicate rejection, ownership
//! scoping, the final-only component cascade, and component locking.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, issue_token, post_json_auth, put_json_auth};
use sqlx::PgPool;

use gradehub_core::roles::ROLE_TEACHER;
use gradehub_db::models::user::CreateUser;
use gradehub_db::repositories::{RoleRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a teacher account and return `(user_id, bearer_token)`.
async fn teacher_with_token(pool: &PgPool, username: &str) -> (i64, String) {
    let role = RoleRepo::find_by_name(pool, ROLE_TEACHER)
        .await
        .unwrap()
        .expect("teacher role must be seeded");
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@school.test"),
        password_hash: "not-a-real-hash".to_string(),
        role_id: role.id,
    };
    let user = UserRepo::create(pool, &input).await.unwrap();
    let token = issue_token(user.id, ROLE_TEACHER);
    (user.id, token)
}

fn class_body(subject_code: &str, section_name: &str, grading: &str) -> serde_json::Value {
    serde_json::json!({
        "subject_code": subject_code,
        "subject_name": format!("{subject_code} Lecture"),
        "section_name": section_name,
        "academic_year": "2026-2027",
        "semester": "1st",
        "grading_system_type": grading,
    })
}

/// POST /classes and return the created class's id.
async fn create_class(pool: &PgPool, token: &str, body: serde_json::Value) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/classes", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Create / list / get
// ---------------------------------------------------------------------------

/// Creating a class returns 201 with the joined subject/section fields.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_class(pool: PgPool) {
    let (teacher_id, token) = teacher_with_token(&pool, "rivera").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/classes",
        &token,
        class_body("CS101", "A", "numerical"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["teacher_id"], teacher_id);
    assert_eq!(json["subject_code"], "CS101");
    assert_eq!(json["subject_name"], "CS101 Lecture");
    assert_eq!(json["section_name"], "A");
    assert_eq!(json["academic_year"], "2026-2027");
    assert_eq!(json["grading_system_type"], "numerical");
}

/// Listing returns only the authenticated teacher's classes.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_is_scoped_to_teacher(pool: PgPool) {
    let (_id_a, token_a) = teacher_with_token(&pool, "teacher_a").await;
    let (_id_b, token_b) = teacher_with_token(&pool, "teacher_b").await;

    create_class(&pool, &token_a, class_body("CS101", "A", "numerical")).await;
    create_class(&pool, &token_a, class_body("CS102", "A", "numerical")).await;
    create_class(&pool, &token_b, class_body("MATH21", "B", "numerical")).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/classes", &token_b).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let classes = json.as_array().unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["subject_code"], "MATH21");
}

/// Fetching another teacher's class reports 404, not 403, so ownership is
/// not discoverable.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_foreign_class_is_404(pool: PgPool) {
    let (_owner_id, owner_token) = teacher_with_token(&pool, "owner").await;
    let (_other_id, other_token) = teacher_with_token(&pool, "other").await;

    let class_id = create_class(&pool, &owner_token, class_body("CS101", "A", "numerical")).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/classes/{class_id}"), &other_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Requests without a token are rejected with 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_classes_require_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/classes").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Upsert semantics over HTTP
// ---------------------------------------------------------------------------

/// The same (subject, section) pair twice for one teacher is a 409.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_class_is_conflict(pool: PgPool) {
    let (_id, token) = teacher_with_token(&pool, "garcia").await;

    create_class(&pool, &token, class_body("CS101", "A", "numerical")).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/classes",
        &token,
        class_body("CS101", "A", "numerical"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

/// A blank required field is a 400 validation error.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_field_is_validation_error(pool: PgPool) {
    let (_id, token) = teacher_with_token(&pool, "santos").await;

    let mut body = class_body("CS101", "A", "numerical");
    body["semester"] = serde_json::json!("  ");

    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/api/v1/classes", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

/// An unknown grading type is a 400 validation error.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_grading_type_is_validation_error(pool: PgPool) {
    let (_id, token) = teacher_with_token(&pool, "cruz").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/classes",
        &token,
        class_body("CS101", "A", "letter_grades"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Editing via PUT updates the class in place.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_class(pool: PgPool) {
    let (_id, token) = teacher_with_token(&pool, "reyes").await;

    let class_id = create_class(&pool, &token, class_body("CS101", "A", "numerical")).await;

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/classes/{class_id}"),
        &token,
        class_body("CS101", "B", "numerical"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], class_id);
    assert_eq!(json["section_name"], "B");
}

/// Editing a class that is not yours is a 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_foreign_class_is_404(pool: PgPool) {
    let (_owner_id, owner_token) = teacher_with_token(&pool, "holder").await;
    let (_other_id, other_token) = teacher_with_token(&pool, "poacher").await;

    let class_id = create_class(&pool, &owner_token, class_body("CS101", "A", "numerical")).await;

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/classes/{class_id}"),
        &other_token,
        class_body("CS101", "B", "numerical"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deleting a class removes it and its components.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_class(pool: PgPool) {
    let (_id, token) = teacher_with_token(&pool, "lim").await;

    let class_id = create_class(
        &pool,
        &token,
        class_body("CS101", "A", "final_only_numerical"),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/classes/{class_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/classes/{class_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM grade_components WHERE class_id = $1")
            .bind(class_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count, 0, "components must cascade with the class");
}

// ---------------------------------------------------------------------------
// Grade components
// ---------------------------------------------------------------------------

/// Switching a class to final-only grading exposes exactly the three fixed
/// component rows through the API.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_final_only_components_via_api(pool: PgPool) {
    let (_id, token) = teacher_with_token(&pool, "aquino").await;

    let class_id = create_class(&pool, &token, class_body("PE1", "A", "numerical")).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/classes/{class_id}"),
        &token,
        class_body("PE1", "A", "final_only_numerical"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/classes/{class_id}/components"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let components = json.as_array().unwrap();
    assert_eq!(components.len(), 3);
    assert_eq!(components[0]["component_name"], "Prelim");
    assert_eq!(components[0]["component_type"], "attendance");
    assert_eq!(components[0]["weight"], 0.0);
    assert_eq!(components[1]["component_name"], "Midterm");
    assert_eq!(components[2]["component_name"], "Final");
    assert_eq!(components[2]["component_type"], "manual");
    assert_eq!(components[2]["weight"], 100.0);
    assert!(components.iter().all(|c| c["is_locked"] == true));
}

/// Components can be added to a numerical class.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_component(pool: PgPool) {
    let (_id, token) = teacher_with_token(&pool, "flores").await;

    let class_id = create_class(&pool, &token, class_body("CS101", "A", "numerical")).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        &format!("/api/v1/classes/{class_id}/components"),
        &token,
        serde_json::json!({
            "component_name": "Quiz 1",
            "period": "prelim",
            "component_type": "manual",
            "max_score": 50,
            "weight": 10,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["component_name"], "Quiz 1");
    assert_eq!(json["max_score"], 50.0);
    assert_eq!(json["is_locked"], false);
}

/// Adding a component to a final-only class is a 409: the scheme owns its
/// components.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_component_to_final_only_class_is_conflict(pool: PgPool) {
    let (_id, token) = teacher_with_token(&pool, "torres").await;

    let class_id = create_class(
        &pool,
        &token,
        class_body("NSTP1", "A", "final_only_numerical"),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        &format!("/api/v1/classes/{class_id}/components"),
        &token,
        serde_json::json!({
            "component_name": "Extra Credit",
            "period": "final",
            "component_type": "manual",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Updating or deleting a locked component is a 409.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_locked_component_mutation_is_conflict(pool: PgPool) {
    let (_id, token) = teacher_with_token(&pool, "navarro").await;

    let class_id = create_class(
        &pool,
        &token,
        class_body("NSTP1", "A", "final_only_numerical"),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/classes/{class_id}/components"),
        &token,
    )
    .await;
    let json = body_json(response).await;
    let component_id = json.as_array().unwrap()[0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/components/{component_id}"),
        &token,
        serde_json::json!({ "component_name": "Tampered" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/components/{component_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// An unknown period value on component creation is a 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_component_unknown_period_is_validation_error(pool: PgPool) {
    let (_id, token) = teacher_with_token(&pool, "mendoza").await;

    let class_id = create_class(&pool, &token, class_body("CS101", "A", "numerical")).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        &format!("/api/v1/classes/{class_id}/components"),
        &token,
        serde_json::json!({
            "component_name": "Quiz 1",
            "period": "finals_week",
            "component_type": "manual",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Subjects and sections created through the upsert appear in the lookups.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_lookup_endpoints(pool: PgPool) {
    let (_id, token) = teacher_with_token(&pool, "delacruz").await;

    create_class(&pool, &token, class_body("CS101", "A", "numerical")).await;
    create_class(&pool, &token, class_body("MATH21", "B", "numerical")).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/subjects", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"][0]["subject_code"], "CS101");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/sections", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}
