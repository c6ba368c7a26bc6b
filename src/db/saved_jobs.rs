use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{SavedJob, SavedJobRow, SavedJobWithJob};

/// Saves owned by `user_id`, newest first, each with its job.
pub async fn list_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<SavedJobWithJob>, sqlx::Error> {
    let rows = sqlx::query_as::<_, SavedJobRow>(
        "SELECT s.user_id, s.job_id, s.created_at,
                j.title AS job_title,
                j.company_name AS job_company_name,
                j.location AS job_location,
                j.description AS job_description,
                j.posted_by AS job_posted_by,
                j.created_at AS job_created_at
         FROM saved_jobs s
         JOIN jobs j ON j.id = s.job_id
         WHERE s.user_id = $1
         ORDER BY s.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(SavedJobWithJob::from).collect())
}

pub async fn find(
    pool: &PgPool,
    user_id: Uuid,
    job_id: &str,
) -> Result<Option<SavedJob>, sqlx::Error> {
    sqlx::query_as::<_, SavedJob>("SELECT * FROM saved_jobs WHERE user_id = $1 AND job_id = $2")
        .bind(user_id)
        .bind(job_id)
        .fetch_optional(pool)
        .await
}

/// Fails with a unique violation if the pair already exists.
pub async fn create(pool: &PgPool, user_id: Uuid, job_id: &str) -> Result<SavedJob, sqlx::Error> {
    sqlx::query_as::<_, SavedJob>(
        "INSERT INTO saved_jobs (user_id, job_id) VALUES ($1, $2) RETURNING *",
    )
    .bind(user_id)
    .bind(job_id)
    .fetch_one(pool)
    .await
}

/// Returns whether a row was removed.
pub async fn delete(pool: &PgPool, user_id: Uuid, job_id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM saved_jobs WHERE user_id = $1 AND job_id = $2")
        .bind(user_id)
        .bind(job_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
