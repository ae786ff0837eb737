use sqlx::PgPool;
use uuid::Uuid;

use crate::jobs::validation::ValidJob;
use crate::models::job::{JobCreatorRow, JobRow};

const JOB_COLUMNS: &str = "id, title, description, company, location, salary, contact, \
     requirements, responsibilities, job_type, created_by, posted_date, created_at, updated_at";

pub async fn insert(pool: &PgPool, job: &ValidJob, owner: Uuid) -> sqlx::Result<JobRow> {
    sqlx::query_as::<_, JobRow>(&format!(
        "INSERT INTO jobs \
             (title, description, company, location, salary, contact, \
              requirements, responsibilities, job_type, created_by) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
         RETURNING {JOB_COLUMNS}"
    ))
    .bind(&job.title)
    .bind(&job.description)
    .bind(&job.company)
    .bind(&job.location)
    .bind(job.salary)
    .bind(&job.contact)
    .bind(&job.requirements)
    .bind(&job.responsibilities)
    .bind(job.job_type.as_str())
    .bind(owner)
    .fetch_one(pool)
    .await
}

/// Every job joined with its creator's display name, newest first.
pub async fn list_all(pool: &PgPool) -> sqlx::Result<Vec<JobCreatorRow>> {
    sqlx::query_as::<_, JobCreatorRow>(
        "SELECT j.id, j.title, j.description, j.company, j.location, j.salary, j.contact, \
                j.requirements, j.responsibilities, j.job_type, j.created_by, \
                u.name AS creator_name, j.posted_date, j.created_at, j.updated_at \
         FROM jobs j \
         JOIN users u ON u.id = j.created_by \
         ORDER BY j.created_at DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn get(pool: &PgPool, id: Uuid) -> sqlx::Result<Option<JobRow>> {
    sqlx::query_as::<_, JobRow>(&format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_by_owner(pool: &PgPool, owner: Uuid) -> sqlx::Result<Vec<JobRow>> {
    sqlx::query_as::<_, JobRow>(&format!(
        "SELECT {JOB_COLUMNS} FROM jobs WHERE created_by = $1 ORDER BY created_at DESC"
    ))
    .bind(owner)
    .fetch_all(pool)
    .await
}

/// Replaces the mutable fields of a job. `created_by`, `posted_date` and
/// `created_at` are never in the SET list, so ownership and creation facts
/// cannot change. Returns `None` if the row no longer exists.
pub async fn update(pool: &PgPool, id: Uuid, job: &ValidJob) -> sqlx::Result<Option<JobRow>> {
    sqlx::query_as::<_, JobRow>(&format!(
        "UPDATE jobs SET \
             title = $1, description = $2, company = $3, location = $4, salary = $5, \
             contact = $6, requirements = $7, responsibilities = $8, job_type = $9, \
             updated_at = now() \
         WHERE id = $10 \
         RETURNING {JOB_COLUMNS}"
    ))
    .bind(&job.title)
    .bind(&job.description)
    .bind(&job.company)
    .bind(&job.location)
    .bind(job.salary)
    .bind(&job.contact)
    .bind(&job.requirements)
    .bind(&job.responsibilities)
    .bind(job.job_type.as_str())
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Returns whether a row was removed.
pub async fn delete(pool: &PgPool, id: Uuid) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
