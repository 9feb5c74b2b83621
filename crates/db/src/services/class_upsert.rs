//! Transactional create/edit of a class.
//!
//! A class submission names its subject and section by natural key, not by
//! ID: the subject code and the (section name, academic year, semester)
//! triple. Both are resolved or created on the fly, the (subject, section,
//! teacher) uniqueness invariant is checked, the class row is written, and
//! -- when the grading scheme is `final_only_numerical` -- the class's grade
//! components are replaced wholesale by the fixed three-row plan.
//!
//! Every step runs inside one transaction. Any failure rolls back the whole
//! sequence; no partial state is ever persisted.

use sqlx::{PgPool, Postgres, Transaction};

use gradehub_core::grading::{final_only_component_plan, GradingSystemType};
use gradehub_core::types::DbId;

use crate::models::class::Class;

/// Column list for `RETURNING` clauses on the `classes` table.
const CLASS_COLUMNS: &str =
    "id, teacher_id, subject_id, section_id, grading_system_type, created_at, updated_at";

/// Input for one class create/edit submission.
///
/// `class_id` is `None` on the create path and `Some` on the edit path.
#[derive(Debug, Clone)]
pub struct ClassUpsertInput {
    pub teacher_id: DbId,
    pub subject_code: String,
    pub subject_name: String,
    pub section_name: String,
    pub academic_year: String,
    pub semester: String,
    pub grading_system_type: String,
    pub class_id: Option<DbId>,
}

/// Failure modes of the upsert, mapped to HTTP statuses by the API layer.
#[derive(Debug, thiserror::Error)]
pub enum UpsertError {
    /// A required field was empty or an enum value failed to parse.
    /// Raised before any statement reaches the database.
    #[error("{0}")]
    Validation(String),

    /// Another class of the same teacher already covers this
    /// (subject, section) pair.
    #[error("You already have a class for this subject and section")]
    DuplicateClass,

    /// The edit path referenced a class that does not exist or belongs to
    /// a different teacher.
    #[error("Class not found")]
    ClassNotFound,

    /// Any database failure. The transaction has been rolled back.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// The transactional upsert-and-cascade unit.
pub struct ClassUpsertService;

impl ClassUpsertService {
    /// Create or edit a class from one form submission.
    ///
    /// Steps, all within a single transaction:
    ///
    /// 1. Validate required fields and the grading-system type.
    /// 2. Resolve the subject by code (insert if absent; on edit, refresh
    ///    `subject_name` if it changed).
    /// 3. Resolve the section by natural key (insert if absent).
    /// 4. Reject a duplicate (subject, section) pair for this teacher,
    ///    excluding the class being edited.
    /// 5. Insert or update the class row.
    /// 6. If the scheme is `final_only_numerical`, replace all grade
    ///    components with the fixed three-row plan.
    ///
    /// Returns the written class row. On any error the transaction is
    /// dropped, which rolls back every write.
    pub async fn upsert(pool: &PgPool, input: &ClassUpsertInput) -> Result<Class, UpsertError> {
        let grading_type = validate(input)?;

        let mut tx = pool.begin().await?;

        // On the edit path the class must exist and belong to the teacher
        // before anything else is written.
        if let Some(class_id) = input.class_id {
            let owned: Option<(DbId,)> =
                sqlx::query_as("SELECT id FROM classes WHERE id = $1 AND teacher_id = $2")
                    .bind(class_id)
                    .bind(input.teacher_id)
                    .fetch_optional(&mut *tx)
                    .await?;
            if owned.is_none() {
                return Err(UpsertError::ClassNotFound);
            }
        }

        let subject_id = resolve_subject(&mut tx, input).await?;
        let section_id = resolve_section(&mut tx, input).await?;

        // Duplicate check, excluding the class being edited. The
        // uq_classes_subject_section_teacher constraint backs this up for
        // submissions racing past the check concurrently.
        let (duplicate,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                 SELECT 1 FROM classes
                 WHERE subject_id = $1 AND section_id = $2 AND teacher_id = $3
                   AND ($4::BIGINT IS NULL OR id <> $4)
             )",
        )
        .bind(subject_id)
        .bind(section_id)
        .bind(input.teacher_id)
        .bind(input.class_id)
        .fetch_one(&mut *tx)
        .await?;
        if duplicate {
            return Err(UpsertError::DuplicateClass);
        }

        let class = match input.class_id {
            None => {
                let query = format!(
                    "INSERT INTO classes (teacher_id, subject_id, section_id, grading_system_type)
                     VALUES ($1, $2, $3, $4)
                     RETURNING {CLASS_COLUMNS}"
                );
                sqlx::query_as::<_, Class>(&query)
                    .bind(input.teacher_id)
                    .bind(subject_id)
                    .bind(section_id)
                    .bind(grading_type.as_str())
                    .fetch_one(&mut *tx)
                    .await?
            }
            Some(class_id) => {
                let query = format!(
                    "UPDATE classes SET
                        subject_id = $2,
                        section_id = $3,
                        grading_system_type = $4
                     WHERE id = $1 AND teacher_id = $5
                     RETURNING {CLASS_COLUMNS}"
                );
                sqlx::query_as::<_, Class>(&query)
                    .bind(class_id)
                    .bind(subject_id)
                    .bind(section_id)
                    .bind(grading_type.as_str())
                    .bind(input.teacher_id)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        if grading_type == GradingSystemType::FinalOnlyNumerical {
            reset_components(&mut tx, class.id).await?;
            tracing::debug!(class_id = class.id, "grade components reset to final-only plan");
        }

        tx.commit().await?;
        Ok(class)
    }
}

/// Check every required field and parse the grading-system type.
///
/// Runs before the transaction opens so invalid input never reaches the
/// database.
fn validate(input: &ClassUpsertInput) -> Result<GradingSystemType, UpsertError> {
    let required = [
        ("subject_code", &input.subject_code),
        ("subject_name", &input.subject_name),
        ("section_name", &input.section_name),
        ("academic_year", &input.academic_year),
        ("semester", &input.semester),
        ("grading_system_type", &input.grading_system_type),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(UpsertError::Validation(format!("{name} is required")));
        }
    }

    GradingSystemType::parse(input.grading_system_type.trim()).ok_or_else(|| {
        UpsertError::Validation(format!(
            "unknown grading_system_type '{}'",
            input.grading_system_type
        ))
    })
}

/// Look up the subject by code, inserting it if absent. On the edit path,
/// an existing subject's name is refreshed when the submission changed it.
async fn resolve_subject(
    tx: &mut Transaction<'_, Postgres>,
    input: &ClassUpsertInput,
) -> Result<DbId, sqlx::Error> {
    let code = input.subject_code.trim();
    let name = input.subject_name.trim();

    let existing: Option<(DbId, String)> =
        sqlx::query_as("SELECT id, subject_name FROM subjects WHERE subject_code = $1")
            .bind(code)
            .fetch_optional(&mut **tx)
            .await?;

    match existing {
        Some((id, current_name)) => {
            if input.class_id.is_some() && current_name != name {
                sqlx::query("UPDATE subjects SET subject_name = $2 WHERE id = $1")
                    .bind(id)
                    .bind(name)
                    .execute(&mut **tx)
                    .await?;
            }
            Ok(id)
        }
        None => {
            let (id,): (DbId,) = sqlx::query_as(
                "INSERT INTO subjects (subject_code, subject_name)
                 VALUES ($1, $2)
                 RETURNING id",
            )
            .bind(code)
            .bind(name)
            .fetch_one(&mut **tx)
            .await?;
            Ok(id)
        }
    }
}

/// Look up the section by (name, academic year, semester), inserting it if
/// absent.
async fn resolve_section(
    tx: &mut Transaction<'_, Postgres>,
    input: &ClassUpsertInput,
) -> Result<DbId, sqlx::Error> {
    let name = input.section_name.trim();
    let year = input.academic_year.trim();
    let semester = input.semester.trim();

    let existing: Option<(DbId,)> = sqlx::query_as(
        "SELECT id FROM sections
         WHERE section_name = $1 AND academic_year = $2 AND semester = $3",
    )
    .bind(name)
    .bind(year)
    .bind(semester)
    .fetch_optional(&mut **tx)
    .await?;

    match existing {
        Some((id,)) => Ok(id),
        None => {
            let (id,): (DbId,) = sqlx::query_as(
                "INSERT INTO sections (section_name, academic_year, semester)
                 VALUES ($1, $2, $3)
                 RETURNING id",
            )
            .bind(name)
            .bind(year)
            .bind(semester)
            .fetch_one(&mut **tx)
            .await?;
            Ok(id)
        }
    }
}

/// Delete every component of the class and insert the fixed final-only plan.
/// Full replacement, never a merge.
async fn reset_components(
    tx: &mut Transaction<'_, Postgres>,
    class_id: DbId,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM grade_components WHERE class_id = $1")
        .bind(class_id)
        .execute(&mut **tx)
        .await?;

    for plan in final_only_component_plan() {
        sqlx::query(
            "INSERT INTO grade_components
                (class_id, component_name, period, component_type,
                 max_score, is_attendance_based, is_locked, weight)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(class_id)
        .bind(plan.component_name)
        .bind(plan.period.as_str())
        .bind(plan.component_type.as_str())
        .bind(plan.max_score)
        .bind(plan.is_attendance_based)
        .bind(plan.is_locked)
        .bind(plan.weight)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}
