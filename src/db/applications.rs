use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Application;

pub async fn create(
    pool: &PgPool,
    id: Uuid,
    job_id: &str,
    user_id: Uuid,
    cover_letter: Option<&str>,
) -> Result<Application, sqlx::Error> {
    sqlx::query_as::<_, Application>(
        "INSERT INTO applications (id, job_id, user_id, cover_letter)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(id)
    .bind(job_id)
    .bind(user_id)
    .bind(cover_letter)
    .fetch_one(pool)
    .await
}

pub async fn find(
    pool: &PgPool,
    job_id: &str,
    user_id: Uuid,
) -> Result<Option<Application>, sqlx::Error> {
    sqlx::query_as::<_, Application>(
        "SELECT * FROM applications WHERE job_id = $1 AND user_id = $2",
    )
    .bind(job_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Application>, sqlx::Error> {
    sqlx::query_as::<_, Application>(
        "SELECT * FROM applications WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
