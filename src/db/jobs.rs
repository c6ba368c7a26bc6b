use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Job;

pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>(
        "SELECT * FROM jobs ORDER BY created_at DESC, id LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(
    pool: &PgPool,
    id: &str,
    title: &str,
    company_name: Option<&str>,
    location: Option<&str>,
    description: Option<&str>,
    posted_by: Uuid,
) -> Result<Job, sqlx::Error> {
    sqlx::query_as::<_, Job>(
        "INSERT INTO jobs (id, title, company_name, location, description, posted_by)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(id)
    .bind(title)
    .bind(company_name)
    .bind(location)
    .bind(description)
    .bind(posted_by)
    .fetch_one(pool)
    .await
}
